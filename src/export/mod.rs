//! Export module for Tally
//!
//! - CSV: the record table plus a summary block (spreadsheet-compatible)
//! - JSON: machine-readable versioned export
//! - YAML: human-readable versioned export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_records_csv;
pub use json::{export_json, import_from_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_yaml, import_from_yaml};
