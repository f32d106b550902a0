//! CLI command for viewing the audit log

use clap::Args;

use crate::error::TallyResult;
use crate::storage::Storage;

/// Arguments for `tally audit`
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Number of most recent entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Handle `tally audit`
pub fn handle_audit_command(storage: &Storage, args: AuditArgs) -> TallyResult<()> {
    let entries = storage.audit_log().read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No audit entries found.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
