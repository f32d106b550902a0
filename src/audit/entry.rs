//! Audit entry data structures
//!
//! Defines the structure of audit log entries: which operation touched which
//! period, with record snapshots before and after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Record;

/// Types of record operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// First entry for a period created a new record
    Create,
    /// Entry was added into an existing record's totals
    Merge,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Merge => write!(f, "MERGE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Period key of the affected record (e.g., "March 2024")
    pub period: String,

    /// Record before the operation (merges only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Record after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable summary of the change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    /// Audit entry for a newly created record
    pub fn create(record: &Record) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            period: record.period.to_string(),
            before: None,
            after: serde_json::to_value(record).ok(),
            summary: Some(format!("income {}, cost {}", record.income, record.cost)),
        }
    }

    /// Audit entry for an entry merged into an existing record
    pub fn merge(before: &Record, after: &Record) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Merge,
            period: after.period.to_string(),
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            summary: Some(format!(
                "income {} -> {}, cost {} -> {}",
                before.income, after.income, before.cost, after.cost
            )),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.period
        );

        if let Some(summary) = &self.summary {
            output.push_str(&format!("\n  Changes: {}", summary));
        }

        output
    }
}
