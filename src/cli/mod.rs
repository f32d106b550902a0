//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the service and report layers.

pub mod audit;
pub mod config;
pub mod export;
pub mod input;
pub mod record;
pub mod report;

pub use audit::{handle_audit_command, AuditArgs};
pub use config::{handle_config_command, ConfigArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use record::{handle_add_command, handle_list_command, AddArgs};
pub use report::{
    handle_analyze_command, handle_balance_command, handle_chart_command, BalanceArgs,
};
