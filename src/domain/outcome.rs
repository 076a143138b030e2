use std::fmt;

/// An expected business decline. Rejections never mutate the invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvoiceNotFound,
    PaymentNotRequired,
    AlreadyFullyPaid,
    ExceedsRemainingBalance,
    ExceedsInvoiceAmount,
}

impl Rejection {
    pub fn message(self) -> &'static str {
        match self {
            Rejection::InvoiceNotFound => "there is no invoice matching this payment",
            Rejection::PaymentNotRequired => "no payment needed",
            Rejection::AlreadyFullyPaid => "invoice was already fully paid",
            Rejection::ExceedsRemainingBalance => {
                "the payment is greater than the partial amount remaining"
            }
            Rejection::ExceedsInvoiceAmount => "the payment is greater than the invoice amount",
        }
    }
}

/// What an accepted payment did to the invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receipt {
    /// A succeeding payment that settled the remaining balance.
    FinalPaymentReceived,
    /// A succeeding payment that left a balance.
    PartialPaymentReceived,
    /// An initial payment for the whole total.
    FullyPaid,
    /// An initial payment for part of the total.
    PartiallyPaid,
}

impl Receipt {
    pub fn message(self) -> &'static str {
        match self {
            Receipt::FinalPaymentReceived => {
                "final partial payment received, invoice is now fully paid"
            }
            Receipt::PartialPaymentReceived => {
                "another partial payment received, still not fully paid"
            }
            Receipt::FullyPaid => "invoice is now fully paid",
            Receipt::PartiallyPaid => "invoice is now partially paid",
        }
    }
}

/// The result of processing one payment, as shown to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted(Receipt),
    Rejected(Rejection),
}

impl Outcome {
    pub fn success(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Accepted(receipt) => receipt.message(),
            Outcome::Rejected(rejection) => rejection.message(),
        }
    }
}

impl From<Receipt> for Outcome {
    fn from(receipt: Receipt) -> Self {
        Outcome::Accepted(receipt)
    }
}

impl From<Rejection> for Outcome {
    fn from(rejection: Rejection) -> Self {
        Outcome::Rejected(rejection)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_success_flag() {
        assert!(Outcome::from(Receipt::FullyPaid).success());
        assert!(!Outcome::from(Rejection::AlreadyFullyPaid).success());
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            Outcome::from(Rejection::InvoiceNotFound).message(),
            "there is no invoice matching this payment"
        );
        assert_eq!(
            Outcome::from(Receipt::PartialPaymentReceived).to_string(),
            "another partial payment received, still not fully paid"
        );
    }
}
