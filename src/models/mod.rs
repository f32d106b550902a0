//! Core data models for Tally
//!
//! Periods, amounts and the per-period ledger record.

pub mod money;
pub mod period;
pub mod record;

pub use money::{Money, MoneyParseError};
pub use period::{Month, Period};
pub use record::Record;
