//! Reporting period representation
//!
//! A period is a (year, month) pair. Months carry their own ordinal so that
//! ordering and equality never depend on comparing month names.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar month, serialized as its full English name ("January")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Ordinal of the month, 1 for January through 12 for December
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// Look up a month by its 1-12 ordinal
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        if (1..=12).contains(&ordinal) {
            Some(Self::ALL[(ordinal - 1) as usize])
        } else {
            None
        }
    }

    /// Canonical full English name
    pub const fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Parse user input: a 1-12 number, a full name or a three-letter
    /// abbreviation, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        if let Ok(ordinal) = s.parse::<u32>() {
            return Self::from_ordinal(ordinal);
        }

        let lower = s.to_lowercase();
        Self::ALL.iter().copied().find(|m| {
            let name = m.name().to_lowercase();
            name == lower || (lower.len() == 3 && name.starts_with(&lower))
        })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A (year, month) reporting period
///
/// Field order matters: the derived `Ord` compares `year` first, then the
/// month ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: Month,
}

impl Period {
    /// Create a period
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The period containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            // chrono months are always 1-12
            month: Month::ALL[date.month0() as usize],
        }
    }

    /// The period containing today's local date
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    /// First calendar day of the period, if representable
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.ordinal(), 1)
    }

    /// Check whether this period falls strictly after `other`
    pub fn is_after(&self, other: &Period) -> bool {
        self > other
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}
