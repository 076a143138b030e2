use super::money::{Amount, Money};
use super::payment::Payment;
use crate::error::{PaymentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of invoice, which decides how tax accrues on succeeding payments.
///
/// Type names read from storage that match neither known kind are kept as
/// `Unrecognized` so the processor can report them instead of failing to decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceType {
    #[default]
    Standard,
    Commercial,
    Unrecognized(String),
}

impl From<String> for InvoiceType {
    fn from(name: String) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "standard" => Self::Standard,
            "commercial" => Self::Commercial,
            _ => Self::Unrecognized(name),
        }
    }
}

impl From<InvoiceType> for String {
    fn from(kind: InvoiceType) -> Self {
        match kind {
            InvoiceType::Standard => "standard".to_string(),
            InvoiceType::Commercial => "commercial".to_string(),
            InvoiceType::Unrecognized(name) => name,
        }
    }
}

impl fmt::Display for InvoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceType::Standard => f.write_str("standard"),
            InvoiceType::Commercial => f.write_str("commercial"),
            InvoiceType::Unrecognized(name) => f.write_str(name),
        }
    }
}

/// Where an invoice stands, derived from `amount_paid` against `total_amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    /// Nothing is owed.
    Unbilled,
    Unpaid,
    PartiallyPaid,
    FullyPaid,
}

/// An invoice together with its payment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Key under which the invoice is stored and looked up by payments.
    pub reference: String,
    /// Total due.
    pub total_amount: Amount,
    /// Running paid amount, kept equal to the sum of `payments`.
    #[serde(default)]
    pub amount_paid: Money,
    /// Tax accrued so far.
    #[serde(default)]
    pub tax_amount: Money,
    /// Payments applied so far, oldest first. A missing list reads as empty.
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub r#type: InvoiceType,
}

impl Invoice {
    pub fn new(reference: impl Into<String>, total_amount: Amount, r#type: InvoiceType) -> Self {
        Self {
            reference: reference.into(),
            total_amount,
            amount_paid: Money::ZERO,
            tax_amount: Money::ZERO,
            payments: Vec::new(),
            r#type,
        }
    }

    pub fn total(&self) -> Money {
        self.total_amount.into()
    }

    pub fn has_payments(&self) -> bool {
        !self.payments.is_empty()
    }

    /// Sum of the recorded payment amounts.
    pub fn sum_paid(&self) -> Result<Money> {
        self.payments
            .iter()
            .try_fold(Money::ZERO, |sum, p| sum.checked_add(p.amount.into()))
            .ok_or_else(|| self.overflow())
    }

    /// Balance still owed according to the running `amount_paid`.
    pub fn remaining(&self) -> Result<Money> {
        self.total()
            .checked_sub(self.amount_paid)
            .ok_or_else(|| self.overflow())
    }

    /// The error reported when stored amounts leave the decimal range.
    pub fn overflow(&self) -> PaymentError {
        PaymentError::AmountOverflow {
            reference: self.reference.clone(),
        }
    }

    pub fn status(&self) -> InvoiceStatus {
        if self.total_amount.is_zero() {
            InvoiceStatus::Unbilled
        } else if self.amount_paid.is_zero() {
            InvoiceStatus::Unpaid
        } else if self.amount_paid < self.total() {
            InvoiceStatus::PartiallyPaid
        } else {
            InvoiceStatus::FullyPaid
        }
    }
}
