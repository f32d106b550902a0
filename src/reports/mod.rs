//! Reports module for Tally
//!
//! Read-only computations over the record sequence: the cumulative balance
//! as of a cutoff, and the extrema/yearly analysis.

pub mod analysis;
pub mod balance;

pub use analysis::{AnalysisReport, GrandTotals, YearTotal};
pub use balance::{AsOf, BalanceReport, CumulativeTotals};
