//! Audit logging system for Tally
//!
//! Records every record creation and merge, with before/after snapshots, in
//! an append-only JSONL audit log.
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::create(&record))?;
//! logger.log(&AuditEntry::merge(&before, &after))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
