use crate::domain::calculation::settle;
use crate::domain::invoice::Invoice;
use crate::domain::outcome::{Outcome, Rejection};
use crate::domain::payment::Payment;
use crate::domain::ports::{InvoiceRepository, InvoiceRepositoryBox};
use crate::error::Result;
use tracing::{debug, info};

/// The entry point for applying payments to invoices.
///
/// `PaymentProcessor` owns the invoice repository. Each call to
/// [`process`](Self::process) performs one read and at most one write, so
/// payments for the same reference have to be submitted one at a time.
pub struct PaymentProcessor {
    repository: InvoiceRepositoryBox,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor` instance.
    ///
    /// # Arguments
    ///
    /// * `repository` - The store the invoices are read from and saved to.
    pub fn new(repository: InvoiceRepositoryBox) -> Self {
        Self { repository }
    }

    /// Processes a single payment.
    ///
    /// Business declines come back as a rejected [`Outcome`] and leave the
    /// stored invoice untouched. Corrupt invoices and storage failures are
    /// returned as errors.
    pub async fn process(&self, payment: Payment) -> Result<Outcome> {
        let Some(mut invoice) = self.repository.get(&payment.reference).await? else {
            debug!(reference = %payment.reference, "No invoice matches payment");
            return Ok(Rejection::InvoiceNotFound.into());
        };

        let reference = payment.reference.clone();
        let amount = payment.amount;

        let outcome = settle(&mut invoice, payment).inspect_err(|e| {
            debug!(reference = %reference, error = %e, "Invoice failed integrity checks");
        })?;

        match outcome {
            Outcome::Rejected(rejection) => {
                debug!(reference = %reference, %amount, ?rejection, "Payment rejected");
            }
            Outcome::Accepted(receipt) => {
                self.repository.save(invoice).await?;
                info!(reference = %reference, %amount, ?receipt, "Payment applied");
            }
        }

        Ok(outcome)
    }

    /// Consumes the processor and returns every stored invoice.
    pub async fn into_invoices(self) -> Result<Vec<Invoice>> {
        self.repository.all().await
    }
}
