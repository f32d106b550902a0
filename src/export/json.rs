//! JSON Export functionality
//!
//! Exports the ledger to a versioned JSON document carrying the records and
//! their summary.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Record};
use crate::reports::analysis::grand_totals;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Summary figures included with an export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSummary {
    pub total_income: Money,
    pub total_cost: Money,
    pub net_balance: Money,
    pub record_count: usize,
}

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All records, in store order
    pub records: Vec<Record>,

    pub summary: ExportSummary,
}

impl LedgerExport {
    /// Build an export from the current records
    pub fn from_records(records: &[Record]) -> Self {
        let totals = grand_totals(records);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            records: records.to_vec(),
            summary: ExportSummary {
                total_income: totals.income,
                total_cost: totals.cost,
                net_balance: totals.net(),
                record_count: records.len(),
            },
        }
    }

    /// Check that the document can be read by this version
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.summary.record_count != self.records.len() {
            return Err(format!(
                "Summary lists {} records but the export contains {}",
                self.summary.record_count,
                self.records.len()
            ));
        }

        Ok(())
    }
}

/// Export the ledger to JSON
pub fn export_json<W: Write>(records: &[Record], writer: &mut W, pretty: bool) -> TallyResult<()> {
    let export = LedgerExport::from_records(records);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export, checking its schema version
pub fn import_from_json(json_str: &str) -> TallyResult<LedgerExport> {
    let export: LedgerExport =
        serde_json::from_str(json_str).map_err(|e| TallyError::Export(e.to_string()))?;

    export.validate().map_err(TallyError::Export)?;

    Ok(export)
}
