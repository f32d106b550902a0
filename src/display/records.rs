//! Record table formatting
//!
//! Renders the store as a grid with Year, Month, Income and Cost columns.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Record;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

/// Format records as a grid table, in store order
pub fn format_record_table(records: &[Record], currency_symbol: &str) -> String {
    if records.is_empty() {
        return "No records found.".to_string();
    }

    let rows = records.iter().map(|r| RecordRow {
        year: r.year(),
        month: r.month().to_string(),
        income: r.income.format_with_symbol(currency_symbol),
        cost: r.cost.format_with_symbol(currency_symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::ascii())
        .modify(Columns::new(2..), Alignment::right());

    table.to_string()
}
