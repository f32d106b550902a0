//! Tally - Terminal-based monthly income and cost ledger
//!
//! This library provides the core functionality for the Tally ledger. Each
//! month (period) holds one record of income and cost; entering the same
//! period again adds into its totals. On top of the record store sit the
//! cumulative balance query and the extrema/yearly analysis.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Periods, amounts and records
//! - `storage`: JSON file storage layer
//! - `services`: Business rules for recording entries
//! - `reports`: Balance and analysis computations
//! - `audit`: Audit logging of record mutations
//! - `display`, `export`, `cli`: presentation collaborators
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::config::TallyPaths;
//! use tally::services::LedgerService;
//! use tally::storage::Storage;
//!
//! let mut storage = Storage::new(TallyPaths::new()?)?;
//! storage.load_all()?;
//! LedgerService::new(&storage).add_entry(None, income, cost)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TallyError, TallyResult};
