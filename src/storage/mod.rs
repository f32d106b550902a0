//! Storage layer for Tally
//!
//! Provides JSON file storage with atomic writes plus the audit trail that
//! accompanies every record mutation.

pub mod file_io;
pub mod records;

pub use file_io::{read_json_optional, write_json_atomic};
pub use records::{RecordRepository, UpsertOutcome, RECORDS_SCHEMA_VERSION};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::TallyPaths;
use crate::error::TallyError;
use crate::models::Record;

/// Storage coordinator: the record store handle passed to every operation
pub struct Storage {
    paths: TallyPaths,
    pub records: RecordRepository,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TallyPaths) -> Result<Self, TallyError> {
        paths.ensure_directories()?;

        Ok(Self {
            records: RecordRepository::new(paths.records_file()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
            paths,
        })
    }

    /// Enable or disable audit logging of record mutations
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit_enabled = enabled;
        self
    }

    pub fn paths(&self) -> &TallyPaths {
        &self.paths
    }

    pub fn audit_log(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), TallyError> {
        self.records.load()?;
        Ok(())
    }

    /// Record a newly created record in the audit log
    pub fn log_create(&self, record: &Record) -> Result<(), TallyError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log(&AuditEntry::create(record))
    }

    /// Record a merge into an existing record in the audit log
    pub fn log_merge(&self, before: &Record, after: &Record) -> Result<(), TallyError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log(&AuditEntry::merge(before, after))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());

        storage.load_all().unwrap();
        assert!(storage.paths().records_file().exists());
        assert_eq!(storage.records.count().unwrap(), 0);
    }
}
