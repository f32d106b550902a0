//! Ledger service
//!
//! Business rules on top of the record repository: future-date rejection,
//! additive merge by period, persistence and auditing of every entry.

use chrono::NaiveDate;

use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Period, Record};
use crate::storage::{Storage, UpsertOutcome};

/// Service for recording income/cost entries
pub struct LedgerService<'a> {
    storage: &'a Storage,
    today: Option<NaiveDate>,
}

impl<'a> LedgerService<'a> {
    /// Create a ledger service that checks entries against the real date
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            today: None,
        }
    }

    /// Create a ledger service with a fixed notion of "today"
    pub fn with_today(storage: &'a Storage, today: NaiveDate) -> Self {
        Self {
            storage,
            today: Some(today),
        }
    }

    /// The period entries are validated against
    pub fn current_period(&self) -> Period {
        match self.today {
            Some(date) => Period::containing(date),
            None => Period::current(),
        }
    }

    /// Record an entry for `period` (the current period when `None`)
    ///
    /// Entries for a period that already has a record are added into its
    /// totals. Fails with [`TallyError::FutureDate`] without touching the
    /// store when the period lies after the current one. The whole store is
    /// persisted after every accepted entry.
    ///
    /// An error means the entry was not recorded: if saving or the audit
    /// append fails, the upsert is reverted in memory and on disk.
    pub fn add_entry(
        &self,
        period: Option<Period>,
        income: Money,
        cost: Money,
    ) -> TallyResult<UpsertOutcome> {
        let current = self.current_period();
        let period = period.unwrap_or(current);

        if period.is_after(&current) {
            return Err(TallyError::future_date(period, current));
        }

        let outcome = self.storage.records.upsert(period, income, cost)?;

        if let Err(e) = self.storage.records.save() {
            self.storage.records.revert(&outcome)?;
            return Err(e);
        }

        let audited = match &outcome {
            UpsertOutcome::Created(record) => self.storage.log_create(record),
            UpsertOutcome::Merged { before, after } => self.storage.log_merge(before, after),
        };

        if let Err(e) = audited {
            self.storage.records.revert(&outcome)?;
            self.storage.records.save()?;
            return Err(e);
        }

        Ok(outcome)
    }

    /// All records in store order; empty when nothing has been recorded
    pub fn records(&self) -> TallyResult<Vec<Record>> {
        self.storage.records.get_all()
    }
}
