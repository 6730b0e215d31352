//! CLI command for dashboard reports
//!
//! Generates a synthetic report for a period and prints or exports it, or
//! re-renders a saved JSON/YAML export.

use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::error::{DashError, DashResult};
use crate::export::{
    export_branches_csv, import_from_json, import_from_yaml, write_report, ExportFormat,
};
use crate::models::{FinancialReport, Period};
use crate::services::{
    rng_from_seed, Clock, DashboardService, FixedClock, PeriodService, SystemClock,
};

/// Arguments for `dashgen report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Period: day, week, month, year or custom (defaults to the configured period)
    #[arg(short, long)]
    pub period: Option<Period>,

    /// Start date for a custom range (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date for a custom range (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Generate as if the current time were this (YYYY-MM-DDTHH:MM[:SS] or YYYY-MM-DD)
    #[arg(long)]
    pub as_of: Option<String>,

    /// Seed for reproducible output (overrides the configured seed)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output format: terminal, json, yaml or csv
    #[arg(short, long, default_value = "terminal")]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the branch allocation as CSV to this file
    #[arg(long)]
    pub branches_output: Option<PathBuf>,
}

/// Arguments for `dashgen show`
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Saved JSON or YAML report export
    pub file: PathBuf,

    /// Output format: terminal, json, yaml or csv
    #[arg(short, long, default_value = "terminal")]
    pub format: ExportFormat,
}

/// Handle `dashgen report`
pub fn handle_report_command(settings: &Settings, args: ReportArgs) -> DashResult<()> {
    let period = args.period.unwrap_or(settings.default_period);
    let from = args.from.as_deref().map(parse_date).transpose()?;
    let to = args.to.as_deref().map(parse_date).transpose()?;
    let seed = args.seed.or(settings.seed);

    let report = match args.as_of.as_deref() {
        Some(s) => generate(settings, seed, FixedClock(parse_as_of(s)?), period, from, to)?,
        None => generate(settings, seed, SystemClock, period, from, to)?,
    };
    info!(
        "Generated {} report with {} buckets",
        report.period,
        report.series.len()
    );

    if let Some(path) = args.branches_output.as_ref() {
        let mut writer = create_output(path)?;
        export_branches_csv(&report, &mut writer)?;
        writer
            .flush()
            .map_err(|e| DashError::Export(e.to_string()))?;
        info!("Branch allocation exported to {}", path.display());
    }

    emit(settings, &report, args.format, seed, args.output.as_deref())
}

/// Handle `dashgen show`: re-render a saved export
pub fn handle_show_command(settings: &Settings, args: ShowArgs) -> DashResult<()> {
    let contents = std::fs::read_to_string(&args.file).map_err(|e| {
        DashError::Import(format!("Failed to read {}: {}", args.file.display(), e))
    })?;

    let ext = args
        .file
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    let export = match ext.as_str() {
        "json" => import_from_json(&contents)?,
        "yaml" | "yml" => import_from_yaml(&contents)?,
        other => {
            return Err(DashError::Import(format!(
                "Unsupported export file type '{}' (expected json or yaml)",
                other
            )))
        }
    };
    info!(
        "Loaded {} report exported at {} by dashgen {}",
        export.report.period, export.generated_at, export.app_version
    );

    emit(settings, &export.report, args.format, export.seed, None)
}

fn generate<C: Clock>(
    settings: &Settings,
    seed: Option<u64>,
    clock: C,
    period: Period,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> DashResult<FinancialReport> {
    DashboardService::new(settings, rng_from_seed(seed), clock).generate(period, from, to)
}

fn create_output(path: &Path) -> DashResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        DashError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Write a report to `output`, or to stdout when there is none
fn emit(
    settings: &Settings,
    report: &FinancialReport,
    format: ExportFormat,
    seed: Option<u64>,
    output: Option<&Path>,
) -> DashResult<()> {
    if let Some(path) = output {
        let mut writer = create_output(path)?;
        write_report(report, format, &settings.currency_symbol, seed, &mut writer)?;
        writer
            .flush()
            .map_err(|e| DashError::Export(e.to_string()))?;
        println!("Report exported to: {}", path.display());
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if format == ExportFormat::Terminal {
            let friendly =
                PeriodService::new(settings).format_window_friendly(report.period, &report.window);
            writeln!(handle, "{}\n", friendly)?;
        }
        write_report(report, format, &settings.currency_symbol, seed, &mut handle)?;
    }

    Ok(())
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(s: &str) -> DashResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        DashError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
    })
}

/// Parse an `--as-of` instant; a bare date means the end of that day
pub fn parse_as_of(s: &str) -> DashResult<NaiveDateTime> {
    let s = s.trim();
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(at) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(at);
        }
    }

    parse_date(s)
        .ok()
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .ok_or_else(|| {
            DashError::Validation(format!(
                "Invalid --as-of value: {}. Use YYYY-MM-DDTHH:MM or YYYY-MM-DD",
                s
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-14").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
        );
        assert!(parse_date("14/03/2025").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_as_of_variants() {
        let at = parse_as_of("2025-03-14T09:30").unwrap();
        assert_eq!((at.hour(), at.minute()), (9, 30));

        let at = parse_as_of("2025-03-14 09:30:15").unwrap();
        assert_eq!(at.second(), 15);

        let at = parse_as_of("2025-03-14").unwrap();
        assert_eq!((at.hour(), at.minute(), at.second()), (23, 59, 59));

        assert!(parse_as_of("yesterday").is_err());
    }
}
