//! Service layer for Tally
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and persistence of ledger entries.

pub mod ledger;

pub use ledger::LedgerService;
