//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{TallyError, TallyResult};
use crate::export::{export_json, export_records_csv, export_yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV records table with a summary block
    Csv,
    /// Versioned JSON document
    Json,
    /// Versioned YAML document (human-readable)
    Yaml,
}

impl ExportFormat {
    /// Default file extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Arguments for `tally export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path ("-" for stdout; defaults to the exports directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `tally export`
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> TallyResult<()> {
    let records = storage.records.get_all()?;

    if records.is_empty() {
        println!("No records to export.");
        return Ok(());
    }

    let path = args.output.unwrap_or_else(|| {
        storage
            .paths()
            .export_dir()
            .join(format!("income_cost_records.{}", args.format.extension()))
    });

    if path.as_os_str() == "-" {
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        write_export(&records, args.format, &mut writer)?;
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            TallyError::Export(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let file = File::create(&path).map_err(|e| {
        TallyError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write_export(&records, args.format, &mut writer)?;
    writer.flush()?;

    println!(
        "Records have been exported to '{}' with a summary.",
        path.display()
    );

    Ok(())
}

fn write_export<W: Write>(
    records: &[crate::models::Record],
    format: ExportFormat,
    writer: &mut W,
) -> TallyResult<()> {
    match format {
        ExportFormat::Csv => export_records_csv(records, writer),
        ExportFormat::Json => {
            export_json(records, writer, true)?;
            writeln!(writer)?;
            Ok(())
        }
        ExportFormat::Yaml => export_yaml(records, writer),
    }
}
