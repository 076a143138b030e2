use super::invoice::Invoice;
use super::money::Money;
use super::outcome::Rejection;
use super::payment::Payment;
use crate::error::{PaymentError, Result};

/// Whether an accepted payment is the first one on the invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentKind {
    Initial,
    Succeeding,
}

/// The decision reached for a payment before anything is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept(PaymentKind),
    Reject(Rejection),
}

/// Checks `payment` against the current state of `invoice`.
///
/// Rules run in a fixed order and the first match wins. A zero total with
/// recorded payments is corrupt data and comes back as an error rather than a
/// rejection.
pub fn validate(invoice: &Invoice, payment: &Payment) -> Result<Verdict> {
    if invoice.total_amount.is_zero() {
        if invoice.has_payments() {
            return Err(PaymentError::InvalidInvoiceState {
                reference: invoice.reference.clone(),
            });
        }
        return Ok(Verdict::Reject(Rejection::PaymentNotRequired));
    }

    let sum_paid = invoice.sum_paid()?;
    let amount = Money::from(payment.amount);

    if !sum_paid.is_zero() && invoice.total() == sum_paid {
        return Ok(Verdict::Reject(Rejection::AlreadyFullyPaid));
    }

    if !sum_paid.is_zero() && amount > invoice.remaining()? {
        return Ok(Verdict::Reject(Rejection::ExceedsRemainingBalance));
    }

    // With prior payments the remaining-balance rule above is the stricter one.
    if amount > invoice.total() {
        return Ok(Verdict::Reject(Rejection::ExceedsInvoiceAmount));
    }

    let kind = if invoice.has_payments() {
        PaymentKind::Succeeding
    } else {
        PaymentKind::Initial
    };
    Ok(Verdict::Accept(kind))
}
