//! Record CLI commands
//!
//! Adding entries to the ledger and listing the stored records.

use clap::Args;

use crate::config::Settings;
use crate::display::format_record_table;
use crate::error::TallyResult;
use crate::services::LedgerService;
use crate::storage::{Storage, UpsertOutcome};

use super::input::{parse_amount, parse_period};

/// Arguments for `tally add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Year of the entry (defaults to the current period together with --month)
    #[arg(short, long, requires = "month")]
    pub year: Option<String>,

    /// Month of the entry: 1-12 or a month name
    #[arg(short, long, requires = "year")]
    pub month: Option<String>,

    /// Income for the period (e.g., "2500" or "2500.00")
    #[arg(short, long, default_value = "0")]
    pub income: String,

    /// Cost for the period
    #[arg(short, long, default_value = "0")]
    pub cost: String,
}

/// Handle `tally add`
pub fn handle_add_command(storage: &Storage, settings: &Settings, args: AddArgs) -> TallyResult<()> {
    let period = match (&args.year, &args.month) {
        (Some(year), Some(month)) => Some(parse_period(year, month)?),
        _ => None,
    };
    let income = parse_amount(&args.income, "income")?;
    let cost = parse_amount(&args.cost, "cost")?;

    let service = LedgerService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match service.add_entry(period, income, cost)? {
        UpsertOutcome::Created(record) => {
            println!("Record added for {}.", record.period);
            println!("  Income: {}", record.income.format_with_symbol(symbol));
            println!("  Cost:   {}", record.cost.format_with_symbol(symbol));
        }
        UpsertOutcome::Merged { before, after } => {
            println!("Merged entry into existing record for {}.", after.period);
            println!(
                "  Income: {} -> {}",
                before.income.format_with_symbol(symbol),
                after.income.format_with_symbol(symbol)
            );
            println!(
                "  Cost:   {} -> {}",
                before.cost.format_with_symbol(symbol),
                after.cost.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

/// Handle `tally list`
pub fn handle_list_command(storage: &Storage, settings: &Settings) -> TallyResult<()> {
    let records = LedgerService::new(storage).records()?;

    if records.is_empty() {
        println!("No records found.");
        return Ok(());
    }

    println!("--- Recorded Data ---");
    println!("{}", format_record_table(&records, &settings.currency_symbol));

    Ok(())
}
