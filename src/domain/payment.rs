use super::money::Amount;
use serde::{Deserialize, Serialize};

/// A single payment attempt against the invoice identified by `reference`.
///
/// Recorded payments inside an invoice file may omit the reference; it
/// defaults to empty since the owning invoice already carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default)]
    pub reference: String,
    pub amount: Amount,
}

impl Payment {
    pub fn new(reference: impl Into<String>, amount: Amount) -> Self {
        Self {
            reference: reference.into(),
            amount,
        }
    }
}
