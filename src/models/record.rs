//! Monthly ledger record
//!
//! One record holds the income and cost totals for a single period. On disk a
//! record is the flat object `{"year", "month", "income", "cost"}`.

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{TallyError, TallyResult};
use super::period::{Month, Period};

/// Income and cost totals attached to one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    pub period: Period,
    pub income: Money,
    pub cost: Money,
}

impl Record {
    /// Create a new record
    pub fn new(period: Period, income: Money, cost: Money) -> Self {
        Self {
            period,
            income,
            cost,
        }
    }

    pub fn year(&self) -> i32 {
        self.period.year
    }

    pub fn month(&self) -> Month {
        self.period.month
    }

    /// Add another entry's amounts into this record's totals
    ///
    /// Leaves the record unchanged and fails if either total would overflow.
    pub fn merge(&mut self, income: Money, cost: Money) -> TallyResult<()> {
        let overflow = |field: &str| {
            TallyError::Validation(format!(
                "Adding to {} would overflow the {} total",
                self.period, field
            ))
        };

        let new_income = self.income.checked_add(income).ok_or_else(|| overflow("income"))?;
        let new_cost = self.cost.checked_add(cost).ok_or_else(|| overflow("cost"))?;

        self.income = new_income;
        self.cost = new_cost;
        Ok(())
    }

    /// Income minus cost for this period alone
    pub fn net(&self) -> Money {
        self.income - self.cost
    }
}
