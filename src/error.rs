use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error(
        "Invoice {reference} is in an invalid state, it has an amount of 0 and it has payments"
    )]
    InvalidInvoiceState { reference: String },
    #[error("Unable to calculate payment due to unsupported invoice type: {0}")]
    UnsupportedInvoiceType(String),
    #[error("Invoice {reference} holds amounts outside the supported decimal range")]
    AmountOverflow { reference: String },
    #[error("Persistence failure: {0}")]
    PersistenceFailure(Box<dyn std::error::Error + Send + Sync>),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PaymentError {
    /// True for corrupt data or configuration, as opposed to I/O or bad input.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            PaymentError::InvalidInvoiceState { .. }
                | PaymentError::UnsupportedInvoiceType(_)
                | PaymentError::AmountOverflow { .. }
        )
    }
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for PaymentError {
    fn from(e: rocksdb::Error) -> Self {
        PaymentError::PersistenceFailure(Box::new(e))
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
