use super::invoice::{Invoice, InvoiceType};
use super::money::Money;
use super::outcome::{Outcome, Receipt};
use super::payment::Payment;
use super::validation::{PaymentKind, Verdict, validate};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Tax charged on paid amounts.
pub const TAX_RATE: Decimal = dec!(0.14);

/// The paid and tax totals an invoice moves to once a payment is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub amount_paid: Money,
    pub tax_amount: Money,
}

pub fn tax_on(amount: Money) -> Option<Money> {
    amount.checked_scaled(TAX_RATE)
}

/// Computes the new totals for `payment` without touching `invoice`.
///
/// Every type taxes the initial payment. Only commercial invoices keep
/// accruing tax on succeeding payments.
pub fn calculate(invoice: &Invoice, payment: &Payment, kind: PaymentKind) -> Result<Settlement> {
    let amount = Money::from(payment.amount);
    let overflow = || invoice.overflow();
    match (&invoice.r#type, kind) {
        (InvoiceType::Unrecognized(name), _) => {
            Err(PaymentError::UnsupportedInvoiceType(name.clone()))
        }
        (InvoiceType::Standard | InvoiceType::Commercial, PaymentKind::Initial) => Ok(Settlement {
            amount_paid: amount,
            tax_amount: tax_on(amount).ok_or_else(overflow)?,
        }),
        (InvoiceType::Standard, PaymentKind::Succeeding) => Ok(Settlement {
            amount_paid: invoice.amount_paid.checked_add(amount).ok_or_else(overflow)?,
            tax_amount: invoice.tax_amount,
        }),
        (InvoiceType::Commercial, PaymentKind::Succeeding) => Ok(Settlement {
            amount_paid: invoice.amount_paid.checked_add(amount).ok_or_else(overflow)?,
            tax_amount: tax_on(amount)
                .and_then(|tax| invoice.tax_amount.checked_add(tax))
                .ok_or_else(overflow)?,
        }),
    }
}

/// Applies an already validated payment and appends it to the history.
///
/// The invoice is only written once the settlement is known, so an error
/// leaves it exactly as it was.
pub fn apply(invoice: &mut Invoice, payment: Payment, kind: PaymentKind) -> Result<Receipt> {
    let settlement = calculate(invoice, &payment, kind)?;
    let amount = Money::from(payment.amount);

    let receipt = match kind {
        PaymentKind::Succeeding if invoice.remaining()? == amount => Receipt::FinalPaymentReceived,
        PaymentKind::Succeeding => Receipt::PartialPaymentReceived,
        PaymentKind::Initial if invoice.total() == amount => Receipt::FullyPaid,
        PaymentKind::Initial => Receipt::PartiallyPaid,
    };

    invoice.amount_paid = settlement.amount_paid;
    invoice.tax_amount = settlement.tax_amount;
    invoice.payments.push(payment);
    Ok(receipt)
}

/// Decides on `payment` and, when it is accepted, applies it to `invoice`.
///
/// A rejected payment leaves the invoice untouched. Callers persist the
/// invoice only when the returned outcome is a success.
pub fn settle(invoice: &mut Invoice, payment: Payment) -> Result<Outcome> {
    match validate(invoice, &payment)? {
        Verdict::Reject(rejection) => Ok(Outcome::Rejected(rejection)),
        Verdict::Accept(kind) => apply(invoice, payment, kind).map(Outcome::Accepted),
    }
}
