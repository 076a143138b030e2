use super::invoice::Invoice;
use crate::error::Result;
use async_trait::async_trait;

/// Storage for invoices, keyed by reference.
///
/// The processor reads a snapshot, decides, and writes it back with no lock in
/// between. Callers must not process two payments for the same reference at
/// the same time.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Returns the current snapshot for `reference`, if any.
    async fn get(&self, reference: &str) -> Result<Option<Invoice>>;
    /// Overwrites the stored invoice with the same reference.
    async fn save(&self, invoice: Invoice) -> Result<()>;
    /// Every stored invoice, ordered by reference.
    async fn all(&self) -> Result<Vec<Invoice>>;
}

pub type InvoiceRepositoryBox = Box<dyn InvoiceRepository>;

pub type InvoiceRepositoryFactory = Box<dyn Fn() -> InvoiceRepositoryBox + Send + Sync>;
