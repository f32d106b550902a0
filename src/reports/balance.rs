//! Cumulative balance report
//!
//! Running balance of all records up to and including a cutoff: either a
//! chosen period or today.

use chrono::NaiveDate;

use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Month, Period, Record};

/// Cutoff for a cumulative balance query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsOf {
    /// Up to the real current date
    Today,
    /// Up to and including the given period
    Period(Period),
}

impl AsOf {
    /// Build a cutoff from raw year/month selectors
    ///
    /// Fails with [`TallyError::InvalidPeriod`] when the year does not parse
    /// or the month is outside 1-12.
    pub fn from_selector(year: &str, month: u32) -> TallyResult<Self> {
        let year: i32 = year
            .trim()
            .parse()
            .map_err(|_| TallyError::InvalidPeriod(format!("'{}' is not a valid year", year)))?;

        let month = Month::from_ordinal(month).ok_or_else(|| {
            TallyError::InvalidPeriod(format!("month {} is not between 1 and 12", month))
        })?;

        Ok(Self::Period(Period::new(year, month)))
    }

    /// Resolve to a calendar date: the first day of the target period, or
    /// `today` itself
    pub fn resolve(&self, today: NaiveDate) -> TallyResult<NaiveDate> {
        match self {
            Self::Today => Ok(today),
            Self::Period(period) => period.first_day().ok_or_else(|| {
                TallyError::InvalidPeriod(format!("{} is outside the supported calendar", period))
            }),
        }
    }
}

/// Income and cost accumulated up to a cutoff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CumulativeTotals {
    pub income: Money,
    pub cost: Money,
    /// Number of records that fell on or before the cutoff
    pub records_counted: usize,
}

impl CumulativeTotals {
    pub fn balance(&self) -> Money {
        self.income - self.cost
    }
}

/// Accumulate every record whose month starts on or before `cutoff`
pub fn cumulative_totals(records: &[Record], cutoff: NaiveDate) -> CumulativeTotals {
    // first_day(record) <= cutoff exactly when the record's period is not
    // after the period containing the cutoff
    let cutoff_period = Period::containing(cutoff);

    records
        .iter()
        .filter(|r| r.period <= cutoff_period)
        .fold(CumulativeTotals::default(), |mut acc, r| {
            acc.income += r.income;
            acc.cost += r.cost;
            acc.records_counted += 1;
            acc
        })
}

/// Cumulative income minus cost up to and including `cutoff`; zero when no
/// record qualifies
pub fn cumulative_balance(records: &[Record], cutoff: NaiveDate) -> Money {
    cumulative_totals(records, cutoff).balance()
}

/// Balance report for a single cutoff
#[derive(Debug, Clone)]
pub struct BalanceReport {
    pub as_of: AsOf,
    pub cutoff: NaiveDate,
    pub totals: CumulativeTotals,
}

impl BalanceReport {
    /// Generate a balance report, resolving `AsOf::Today` against `today`
    ///
    /// Returns `Ok(None)` when there are no records at all.
    pub fn generate(records: &[Record], as_of: AsOf, today: NaiveDate) -> TallyResult<Option<Self>> {
        let cutoff = as_of.resolve(today)?;

        if records.is_empty() {
            return Ok(None);
        }

        Ok(Some(Self {
            as_of,
            cutoff,
            totals: cumulative_totals(records, cutoff),
        }))
    }

    pub fn balance(&self) -> Money {
        self.totals.balance()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let balance = self.balance().format_with_symbol(currency_symbol);
        match self.as_of {
            AsOf::Today => format!(
                "Current balance (from past to {}): {}",
                self.cutoff.format("%Y-%m-%d"),
                balance
            ),
            AsOf::Period(period) => format!("Balance up to {}: {}", period, balance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, month: Month, income: i64, cost: i64) -> Record {
        Record::new(
            Period::new(year, month),
            Money::from_units(income),
            Money::from_units(cost),
        )
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn jan_feb() -> Vec<Record> {
        vec![
            record(2024, Month::January, 100, 40),
            record(2024, Month::February, 200, 50),
        ]
    }

    #[test]
    fn test_inclusive_boundary() {
        let records = jan_feb();
        let today = date(2025, 1, 1);

        let jan = AsOf::Period(Period::new(2024, Month::January));
        let feb = AsOf::Period(Period::new(2024, Month::February));

        assert_eq!(
            cumulative_balance(&records, jan.resolve(today).unwrap()),
            Money::from_units(60)
        );
        assert_eq!(
            cumulative_balance(&records, feb.resolve(today).unwrap()),
            Money::from_units(210)
        );
    }

    #[test]
    fn test_store_order_does_not_matter() {
        let mut records = jan_feb();
        records.reverse();

        assert_eq!(
            cumulative_balance(&records, date(2024, 1, 1)),
            Money::from_units(60)
        );
    }

    #[test]
    fn test_nothing_qualifies_is_zero() {
        let records = jan_feb();
        assert_eq!(cumulative_balance(&records, date(2023, 12, 1)), Money::zero());
        assert_eq!(cumulative_totals(&records, date(2023, 12, 1)).records_counted, 0);
    }

    #[test]
    fn test_today_includes_current_month() {
        let records = vec![
            record(2025, Month::June, 10, 1),
            record(2025, Month::May, 5, 0),
        ];

        let totals = cumulative_totals(&records, date(2025, 6, 15));
        assert_eq!(totals.records_counted, 2);
        assert_eq!(totals.balance(), Money::from_units(14));
    }

    #[test]
    fn test_selector_validation() {
        assert_eq!(
            AsOf::from_selector("2024", 3).unwrap(),
            AsOf::Period(Period::new(2024, Month::March))
        );
        assert!(AsOf::from_selector("2024", 0).unwrap_err().is_invalid_period());
        assert!(AsOf::from_selector("2024", 13).unwrap_err().is_invalid_period());
        assert!(AsOf::from_selector("twenty", 3).unwrap_err().is_invalid_period());
    }

    #[test]
    fn test_report_on_empty_store() {
        let report = BalanceReport::generate(&[], AsOf::Today, date(2025, 6, 15)).unwrap();
        assert!(report.is_none());
    }

    #[test]
    fn test_report_formatting() {
        let records = jan_feb();
        let today = date(2025, 6, 15);

        let report = BalanceReport::generate(
            &records,
            AsOf::Period(Period::new(2024, Month::January)),
            today,
        )
        .unwrap()
        .unwrap();
        assert_eq!(report.format_terminal(""), "Balance up to January 2024: 60.00");

        let report = BalanceReport::generate(&records, AsOf::Today, today)
            .unwrap()
            .unwrap();
        assert_eq!(
            report.format_terminal("$"),
            "Current balance (from past to 2025-06-15): $210.00"
        );
    }
}
