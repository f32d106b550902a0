//! CSV Export functionality
//!
//! Writes the record list followed by a summary block with total income,
//! total cost and net balance.

use std::io::Write;

use crate::error::TallyResult;
use crate::models::Record;
use crate::reports::analysis::grand_totals;

/// Export records and their summary to CSV
pub fn export_records_csv<W: Write>(records: &[Record], writer: W) -> TallyResult<()> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    wtr.write_record(["Year", "Month", "Income", "Cost"])?;

    for record in records {
        wtr.write_record([
            record.year().to_string(),
            record.month().to_string(),
            record.income.to_string(),
            record.cost.to_string(),
        ])?;
    }

    let totals = grand_totals(records);
    wtr.write_record(["Summary", ""])?;
    wtr.write_record(["Total Income".to_string(), totals.income.to_string()])?;
    wtr.write_record(["Total Cost".to_string(), totals.cost.to_string()])?;
    wtr.write_record(["Net Balance".to_string(), totals.net().to_string()])?;

    wtr.flush()?;
    Ok(())
}
