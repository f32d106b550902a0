//! YAML Export functionality
//!
//! Same document as the JSON export, in a human-readable format.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::export::json::LedgerExport;
use crate::models::Record;

/// Export the ledger to YAML
pub fn export_yaml<W: Write>(records: &[Record], writer: &mut W) -> TallyResult<()> {
    let export = LedgerExport::from_records(records);

    writeln!(writer, "# Tally Ledger Export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}

/// Read back a YAML export, checking its schema version
pub fn import_from_yaml(yaml_str: &str) -> TallyResult<LedgerExport> {
    let export: LedgerExport = serde_yaml::from_str(yaml_str)?;

    export.validate().map_err(TallyError::Export)?;

    Ok(export)
}
