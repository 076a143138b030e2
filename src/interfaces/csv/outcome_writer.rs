use crate::domain::outcome::Outcome;
use crate::domain::payment::Payment;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct OutcomeRecord<'a> {
    reference: &'a str,
    amount: Decimal,
    success: bool,
    message: &'static str,
}

/// Writes one `reference,amount,success,message` row per processed payment.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_outcome(&mut self, payment: &Payment, outcome: &Outcome) -> Result<()> {
        self.writer.serialize(OutcomeRecord {
            reference: &payment.reference,
            amount: payment.amount.value().normalize(),
            success: outcome.success(),
            message: outcome.message(),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
