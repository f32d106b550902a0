//! CLI commands for reports
//!
//! Analysis, balance queries and the income/cost chart.

use clap::Args;

use crate::config::Settings;
use crate::display::format_income_cost_chart;
use crate::error::TallyResult;
use crate::reports::{AnalysisReport, AsOf, BalanceReport};
use crate::storage::Storage;

use super::input::parse_month_selector;

/// Arguments for `tally balance`
#[derive(Args, Debug)]
pub struct BalanceArgs {
    /// Year of the cutoff period (omit both for today's balance)
    #[arg(short, long, requires = "month")]
    pub year: Option<String>,

    /// Month of the cutoff period: 1-12 or a month name
    #[arg(short, long, requires = "year")]
    pub month: Option<String>,
}

/// Handle `tally analyze`
pub fn handle_analyze_command(storage: &Storage, settings: &Settings) -> TallyResult<()> {
    let records = storage.records.get_all()?;

    match AnalysisReport::generate(&records) {
        Some(report) => print!("{}", report.format_terminal(&settings.currency_symbol)),
        None => println!("No data available for analysis."),
    }

    Ok(())
}

/// Handle `tally balance`
pub fn handle_balance_command(
    storage: &Storage,
    settings: &Settings,
    args: BalanceArgs,
) -> TallyResult<()> {
    let as_of = match (&args.year, &args.month) {
        (Some(year), Some(month)) => AsOf::from_selector(year, parse_month_selector(month)?)?,
        _ => AsOf::Today,
    };

    let records = storage.records.get_all()?;
    let today = chrono::Local::now().date_naive();

    match BalanceReport::generate(&records, as_of, today)? {
        Some(report) => println!("{}", report.format_terminal(&settings.currency_symbol)),
        None => println!("No data available for balance query."),
    }

    Ok(())
}

/// Handle `tally chart`
pub fn handle_chart_command(storage: &Storage, settings: &Settings) -> TallyResult<()> {
    let records = storage.records.get_all()?;
    let chart = format_income_cost_chart(&records, settings.chart_width);
    println!("{}", chart.trim_end());
    Ok(())
}
