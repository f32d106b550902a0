//! Display formatting for terminal output
//!
//! Renders records as a table and as a text chart. Nothing here computes or
//! mutates ledger data.

pub mod chart;
pub mod records;
pub mod report;

pub use chart::format_income_cost_chart;
pub use records::format_record_table;
