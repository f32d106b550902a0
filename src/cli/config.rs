//! CLI command for viewing and changing settings

use clap::Args;

use crate::config::{Settings, TallyPaths};
use crate::error::{TallyError, TallyResult};

/// Arguments for `tally config`
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Symbol printed before amounts (use "" to clear)
    #[arg(long)]
    pub currency: Option<String>,

    /// Turn audit logging of record changes on or off
    #[arg(long)]
    pub audit: Option<bool>,

    /// Width of the bars drawn by `tally chart`
    #[arg(long)]
    pub chart_width: Option<usize>,
}

impl ConfigArgs {
    fn has_changes(&self) -> bool {
        self.currency.is_some() || self.audit.is_some() || self.chart_width.is_some()
    }
}

/// Apply requested changes to `settings`, returning whether anything changed
pub fn apply_config_changes(settings: &mut Settings, args: ConfigArgs) -> TallyResult<bool> {
    if !args.has_changes() {
        return Ok(false);
    }

    if let Some(width) = args.chart_width {
        if width == 0 {
            return Err(TallyError::Validation(
                "Chart width must be at least 1".into(),
            ));
        }
        settings.chart_width = width;
    }
    if let Some(currency) = args.currency {
        settings.currency_symbol = currency;
    }
    if let Some(audit) = args.audit {
        settings.audit_enabled = audit;
    }

    Ok(true)
}

/// Handle `tally config`
pub fn handle_config_command(
    paths: &TallyPaths,
    mut settings: Settings,
    args: ConfigArgs,
) -> TallyResult<()> {
    if apply_config_changes(&mut settings, args)? {
        settings.save(paths)?;
        println!("Settings updated.");
        println!();
    }

    println!("Tally Configuration");
    println!("===================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Records file:   {}", paths.records_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!("Export dir:     {}", paths.export_dir().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {:?}", settings.currency_symbol);
    println!("  Audit enabled:   {}", settings.audit_enabled);
    println!("  Chart width:     {}", settings.chart_width);

    Ok(())
}
