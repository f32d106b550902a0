//! Ledger record repository
//!
//! Owns the ordered list of period records and persists it as a bare JSON
//! array of `{year, month, income, cost}` objects. Store order is the order
//! in which periods were first seen, not chronological order.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::Deserialize;

use crate::error::TallyError;
use crate::models::{Money, Period, Record};

use super::file_io::{read_json_optional, write_json_atomic};

/// Highest records document version this build understands
pub const RECORDS_SCHEMA_VERSION: u32 = 1;

/// Accepted on-disk shapes: the bare list, or a versioned envelope
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsDocument {
    Versioned {
        schema_version: u32,
        records: Vec<Record>,
    },
    Bare(Vec<Record>),
}

/// Result of adding an entry to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No record existed for the period; one was appended
    Created(Record),
    /// Amounts were added into the existing record
    Merged { before: Record, after: Record },
}

impl UpsertOutcome {
    /// The record as it stands after the upsert
    pub fn record(&self) -> &Record {
        match self {
            Self::Created(record) => record,
            Self::Merged { after, .. } => after,
        }
    }

    pub fn is_merge(&self) -> bool {
        matches!(self, Self::Merged { .. })
    }
}

/// Repository for ledger records
pub struct RecordRepository {
    path: PathBuf,
    records: RwLock<Vec<Record>>,
}

impl RecordRepository {
    /// Create a new repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load records from disk
    ///
    /// A missing file is initialized to an empty list and persisted. Malformed
    /// content is reported and leaves the in-memory store untouched.
    pub fn load(&self) -> Result<Vec<Record>, TallyError> {
        let loaded = match read_json_optional::<RecordsDocument, _>(&self.path)? {
            Some(RecordsDocument::Bare(records)) => records,
            Some(RecordsDocument::Versioned {
                schema_version,
                records,
            }) => {
                if schema_version > RECORDS_SCHEMA_VERSION {
                    return Err(TallyError::Storage(format!(
                        "Unsupported records schema version {} in {} (expected at most {})",
                        schema_version,
                        self.path.display(),
                        RECORDS_SCHEMA_VERSION
                    )));
                }
                records
            }
            None => {
                write_json_atomic(&self.path, &Vec::<Record>::new())?;
                Vec::new()
            }
        };

        let mut records = self
            .records
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *records = loaded.clone();

        Ok(loaded)
    }

    /// Save all records to disk, replacing the whole document
    pub fn save(&self) -> Result<(), TallyError> {
        let records = self
            .records
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, records.as_slice())
    }

    /// Add amounts into the record for `period`, creating it if absent
    ///
    /// Does not persist; callers save after a successful upsert. A merge that
    /// would overflow a total fails with a validation error and changes
    /// nothing.
    pub fn upsert(
        &self,
        period: Period,
        income: Money,
        cost: Money,
    ) -> Result<UpsertOutcome, TallyError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(existing) = records.iter_mut().find(|r| r.period == period) {
            let before = existing.clone();
            existing.merge(income, cost)?;
            return Ok(UpsertOutcome::Merged {
                before,
                after: existing.clone(),
            });
        }

        let record = Record::new(period, income, cost);
        records.push(record.clone());
        Ok(UpsertOutcome::Created(record))
    }

    /// Undo an upsert that has not been persisted
    pub fn revert(&self, outcome: &UpsertOutcome) -> Result<(), TallyError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match outcome {
            UpsertOutcome::Created(created) => records.retain(|r| r.period != created.period),
            UpsertOutcome::Merged { before, .. } => {
                if let Some(existing) = records.iter_mut().find(|r| r.period == before.period) {
                    *existing = before.clone();
                }
            }
        }

        Ok(())
    }

    /// Get all records in store order
    pub fn get_all(&self) -> Result<Vec<Record>, TallyError> {
        let records = self
            .records
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.clone())
    }

    pub fn count(&self) -> Result<usize, TallyError> {
        let records = self
            .records
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.len())
    }
}
