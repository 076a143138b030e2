use crate::domain::invoice::Invoice;
use crate::domain::ports::InvoiceRepository;
use crate::error::{PaymentError, Result};
use ::rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, IteratorMode, Options};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing invoices, keyed by reference.
pub const CF_INVOICES: &str = "invoices";

/// A persistent invoice repository backed by RocksDB.
///
/// Invoices are stored as JSON under their reference. `Clone` shares the
/// underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDBInvoiceRepository {
    db: Arc<DB>,
}

impl RocksDBInvoiceRepository {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the database will be stored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_invoices = ColumnFamilyDescriptor::new(CF_INVOICES, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_invoices])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn invoices_cf(&self) -> Result<&ColumnFamily> {
        self.db
            .cf_handle(CF_INVOICES)
            .ok_or_else(|| storage_error("Invoices column family not found".to_string()))
    }
}

fn storage_error(message: String) -> PaymentError {
    PaymentError::PersistenceFailure(Box::new(std::io::Error::other(message)))
}

#[async_trait]
impl InvoiceRepository for RocksDBInvoiceRepository {
    async fn get(&self, reference: &str) -> Result<Option<Invoice>> {
        let cf = self.invoices_cf()?;

        match self.db.get_cf(cf, reference.as_bytes())? {
            Some(bytes) => {
                let invoice = serde_json::from_slice(&bytes)
                    .map_err(|e| storage_error(format!("Deserialization error: {}", e)))?;
                Ok(Some(invoice))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, invoice: Invoice) -> Result<()> {
        let cf = self.invoices_cf()?;

        let value = serde_json::to_vec(&invoice)
            .map_err(|e| storage_error(format!("Serialization error: {}", e)))?;
        self.db.put_cf(cf, invoice.reference.as_bytes(), value)?;

        Ok(())
    }

    async fn all(&self) -> Result<Vec<Invoice>> {
        let cf = self.invoices_cf()?;

        // Keys are references, so iteration order is already sorted.
        let mut invoices = Vec::new();
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_key, value) =
                item.map_err(|e| storage_error(format!("RocksDB iteration error: {}", e)))?;
            let invoice: Invoice = serde_json::from_slice(&value)
                .map_err(|e| storage_error(format!("Failed to deserialize invoice: {}", e)))?;
            invoices.push(invoice);
        }

        Ok(invoices)
    }
}
