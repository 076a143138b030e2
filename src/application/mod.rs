//! Application layer orchestrating a payment against the invoice repository.
//!
//! `PaymentProcessor` looks the invoice up, lets the domain rules decide, and
//! saves the invoice only when the payment was accepted.

pub mod processor;
