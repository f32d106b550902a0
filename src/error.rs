//! Custom error types for Tally
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Period;

/// The main error type for Tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for raw user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entry targets a period later than the current one
    #[error("Cannot enter future date: {period} is after the current period {current}")]
    FutureDate { period: Period, current: Period },

    /// Month selector outside 1-12 or an unparsable year
    #[error("Invalid period selector: {0}")]
    InvalidPeriod(String),

    /// Persisted state cannot be read, written or parsed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TallyError {
    /// Create a future-date rejection for `period` relative to `current`
    pub fn future_date(period: Period, current: Period) -> Self {
        Self::FutureDate { period, current }
    }

    /// Check if this is a future-date rejection
    pub fn is_future_date(&self) -> bool {
        matches!(self, Self::FutureDate { .. })
    }

    /// Check if this is an invalid period selector
    pub fn is_invalid_period(&self) -> bool {
        matches!(self, Self::InvalidPeriod(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for TallyError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for TallyError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Tally operations
pub type TallyResult<T> = Result<T, TallyError>;
