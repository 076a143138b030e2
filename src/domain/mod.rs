//! Invoice and payment types and the rules that decide what a payment does.
//!
//! Nothing in here performs I/O; storage is reached through [`ports`].

pub mod calculation;
pub mod invoice;
pub mod money;
pub mod outcome;
pub mod payment;
pub mod ports;
pub mod validation;
