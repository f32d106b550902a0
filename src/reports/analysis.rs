//! Ledger analysis report
//!
//! Extrema and per-year summaries over the full record sequence. All
//! reductions are read-only, and ties always resolve to the first candidate
//! in store order.

use crate::models::{Money, Record};

/// Income and cost aggregated over one year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearTotal {
    pub year: i32,
    pub income: Money,
    pub cost: Money,
}

impl YearTotal {
    pub fn net(&self) -> Money {
        self.income - self.cost
    }
}

/// Income and cost summed across every record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrandTotals {
    pub income: Money,
    pub cost: Money,
}

impl GrandTotals {
    pub fn net(&self) -> Money {
        self.income - self.cost
    }
}

/// First item with the greatest key; later items must be strictly greater to
/// replace it
fn first_max_by_key<I, K, F>(items: I, key: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: Fn(&I::Item) -> K,
{
    items
        .into_iter()
        .reduce(|best, item| if key(&item) > key(&best) { item } else { best })
}

/// Record with the highest income
pub fn max_income_record(records: &[Record]) -> Option<&Record> {
    first_max_by_key(records, |r| r.income)
}

/// Per-year totals, years listed in the order they first appear
pub fn yearly_totals(records: &[Record]) -> Vec<YearTotal> {
    let mut totals: Vec<YearTotal> = Vec::new();

    for record in records {
        match totals.iter_mut().find(|t| t.year == record.year()) {
            Some(total) => {
                total.income += record.income;
                total.cost += record.cost;
            }
            None => totals.push(YearTotal {
                year: record.year(),
                income: record.income,
                cost: record.cost,
            }),
        }
    }

    totals
}

/// Year with the highest aggregated cost
pub fn max_cost_year(totals: &[YearTotal]) -> Option<&YearTotal> {
    first_max_by_key(totals, |t| t.cost)
}

/// Year with the highest aggregated income
pub fn max_income_year(totals: &[YearTotal]) -> Option<&YearTotal> {
    first_max_by_key(totals, |t| t.income)
}

/// Income minus cost for each year, in the order of `totals`
pub fn net_balance_by_year(totals: &[YearTotal]) -> Vec<(i32, Money)> {
    totals.iter().map(|t| (t.year, t.net())).collect()
}

/// Income and cost across all records regardless of year
pub fn grand_totals(records: &[Record]) -> GrandTotals {
    GrandTotals {
        income: records.iter().map(|r| r.income).sum(),
        cost: records.iter().map(|r| r.cost).sum(),
    }
}

/// Full analysis of the ledger
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub max_income_record: Record,
    pub max_cost_year: YearTotal,
    pub max_income_year: YearTotal,
    pub totals: GrandTotals,
    pub yearly: Vec<YearTotal>,
}

impl AnalysisReport {
    /// Analyze the records; `None` when there is nothing to analyze
    pub fn generate(records: &[Record]) -> Option<Self> {
        let max_income_record = max_income_record(records)?.clone();
        let yearly = yearly_totals(records);
        let max_cost_year = *max_cost_year(&yearly)?;
        let max_income_year = *max_income_year(&yearly)?;

        Some(Self {
            max_income_record,
            max_cost_year,
            max_income_year,
            totals: grand_totals(records),
            yearly,
        })
    }

    pub fn net_balance_by_year(&self) -> Vec<(i32, Money)> {
        net_balance_by_year(&self.yearly)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let fmt = |m: Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str("Ledger Analysis\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        output.push_str(&format!(
            "Month with the highest income: {} (Income: {})\n",
            self.max_income_record.period,
            fmt(self.max_income_record.income)
        ));
        output.push_str(&format!(
            "Year with the highest cost: {} (Total Cost: {})\n",
            self.max_cost_year.year,
            fmt(self.max_cost_year.cost)
        ));
        output.push_str(&format!("Total Income: {}\n", fmt(self.totals.income)));
        output.push_str(&format!("Total Cost: {}\n", fmt(self.totals.cost)));
        output.push_str(&format!(
            "Year with the highest income: {} (Total Income: {})\n",
            self.max_income_year.year,
            fmt(self.max_income_year.income)
        ));

        output.push('\n');
        for (year, balance) in self.net_balance_by_year() {
            output.push_str(&format!("Net balance for {}: {}\n", year, fmt(balance)));
        }

        output
    }
}
