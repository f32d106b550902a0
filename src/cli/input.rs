//! Raw input validation
//!
//! Turns command-line text into typed periods and amounts before anything
//! reaches the ledger.

use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Month, Period};

/// Parse a year such as "2024"
pub fn parse_year(s: &str) -> TallyResult<i32> {
    s.trim().parse().map_err(|_| {
        TallyError::Validation(format!(
            "Invalid year: '{}'. Please enter a valid year (e.g., 2024)",
            s
        ))
    })
}

/// Parse a month given as 1-12, a full name or a three-letter abbreviation
pub fn parse_month(s: &str) -> TallyResult<Month> {
    Month::parse(s).ok_or_else(|| {
        TallyError::Validation(format!(
            "Invalid month: '{}'. Use a number between 1 and 12 or a month name",
            s
        ))
    })
}

/// Parse a year/month pair into a period
pub fn parse_period(year: &str, month: &str) -> TallyResult<Period> {
    Ok(Period::new(parse_year(year)?, parse_month(month)?))
}

/// Parse a non-negative amount such as "120" or "19.99"
pub fn parse_amount(s: &str, field: &str) -> TallyResult<Money> {
    let amount = Money::parse(s).map_err(|e| {
        TallyError::Validation(format!(
            "Invalid {}: '{}'. Use format like '100.00' or '100'. Error: {}",
            field, s, e
        ))
    })?;

    if amount.is_negative() {
        return Err(TallyError::Validation(format!(
            "Invalid {}: '{}'. Amounts cannot be negative",
            field, s
        )));
    }

    Ok(amount)
}

/// Resolve a balance-query month selector to its ordinal
///
/// Numbers are passed through unchecked so that the range check reports the
/// selector as given.
pub fn parse_month_selector(s: &str) -> TallyResult<u32> {
    let s = s.trim();
    if let Ok(ordinal) = s.parse::<u32>() {
        return Ok(ordinal);
    }

    Month::parse(s)
        .map(Month::ordinal)
        .ok_or_else(|| TallyError::InvalidPeriod(format!("'{}' is not a valid month", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2024").unwrap(), 2024);
        assert_eq!(parse_year(" 1999 ").unwrap(), 1999);
        assert!(parse_year("20x4").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("3").unwrap(), Month::March);
        assert_eq!(parse_month("december").unwrap(), Month::December);
        assert!(parse_month("13").unwrap_err().is_validation());
        assert!(parse_month("0").is_err());
    }

    #[test]
    fn test_parse_period() {
        assert_eq!(
            parse_period("2024", "Feb").unwrap(),
            Period::new(2024, Month::February)
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("120", "income").unwrap(), Money::from_units(120));
        assert_eq!(parse_amount("0.5", "cost").unwrap(), Money::from_cents(50));

        let err = parse_amount("-5", "cost").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("cannot be negative"));

        assert!(parse_amount("lots", "income").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_oversize_values() {
        let err = parse_amount("184467440737095517", "income").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("184467440737095517"));

        assert!(parse_amount("92233720368547758.08", "cost").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_doubled_signs() {
        assert!(parse_amount("--5", "income").unwrap_err().is_validation());
        assert!(parse_amount("--3.5", "cost").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_month_selector() {
        assert_eq!(parse_month_selector("7").unwrap(), 7);
        assert_eq!(parse_month_selector("15").unwrap(), 15);
        assert_eq!(parse_month_selector("Oct").unwrap(), 10);
        assert!(parse_month_selector("someday").unwrap_err().is_invalid_period());
    }
}
