//! Income vs cost chart
//!
//! Text rendering of income and cost per record, in store order, scaled to
//! the largest amount in the ledger.

use crate::models::{Money, Record};

use super::report::{format_bar, separator};

/// Format an income/cost bar chart
pub fn format_income_cost_chart(records: &[Record], width: usize) -> String {
    if records.is_empty() {
        return "No data available to visualize.".to_string();
    }

    let max_value = records
        .iter()
        .flat_map(|r| [r.income, r.cost])
        .max()
        .unwrap_or_else(Money::zero)
        .as_f64();

    let label_width = records
        .iter()
        .map(|r| r.period.to_string().len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    output.push_str("Income vs Cost\n");
    output.push_str(&separator(label_width + width + 18));
    output.push('\n');

    for record in records {
        let label = record.period.to_string();
        output.push_str(&format!(
            "{:<label_width$}  Income {} {:>10}\n",
            label,
            format_bar(record.income.as_f64(), max_value, width),
            record.income,
            label_width = label_width,
        ));
        output.push_str(&format!(
            "{:<label_width$}  Cost   {} {:>10}\n",
            "",
            format_bar(record.cost.as_f64(), max_value, width),
            record.cost,
            label_width = label_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, Period};

    #[test]
    fn test_empty_chart() {
        assert_eq!(
            format_income_cost_chart(&[], 10),
            "No data available to visualize."
        );
    }

    #[test]
    fn test_bars_scale_to_largest_amount() {
        let records = vec![
            Record::new(
                Period::new(2024, Month::January),
                Money::from_units(100),
                Money::from_units(50),
            ),
            Record::new(
                Period::new(2024, Month::February),
                Money::from_units(20),
                Money::zero(),
            ),
        ];

        let chart = format_income_cost_chart(&records, 10);
        let lines: Vec<&str> = chart.lines().collect();

        // Header, separator, then two lines per record
        assert_eq!(lines.len(), 6);
        assert!(lines[2].starts_with("January 2024"));
        assert_eq!(lines[2].matches('█').count(), 10);
        assert_eq!(lines[3].matches('█').count(), 5);
        assert_eq!(lines[4].matches('█').count(), 2);
        assert_eq!(lines[5].matches('█').count(), 0);
    }
}
