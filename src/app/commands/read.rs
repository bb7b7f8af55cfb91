//! Summarize the asset-bearing sections of a config document as JSON.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::configuration::load_document;
use crate::domain::{AppError, ReportDocument};
use crate::ports::Clock;

/// Options for the read command.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Rename an existing report to `<report>.bak` instead of overwriting it.
    pub backup: bool,
}

/// Result of a read run.
#[derive(Debug, Clone)]
pub struct ReadOutcome {
    pub report_path: PathBuf,
    pub report: ReportDocument,
    /// Where the previous report was moved, if it was kept.
    pub backup_path: Option<PathBuf>,
}

/// Execute the read command.
pub fn execute<C: Clock>(
    ctx: &AppContext<C>,
    config_path: &Path,
    options: &ReadOptions,
) -> Result<ReadOutcome, AppError> {
    let document = load_document(config_path)?;
    let report = ReportDocument::from_document(&document)?;
    let json = report.to_json()?;

    let settings = ctx.settings();
    let report_path = settings.paths.report_file.clone();

    let backup_path = if options.backup || settings.read.backup_report {
        backup_existing(&report_path)?
    } else {
        None
    };

    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&report_path, json)?;

    Ok(ReadOutcome { report_path, report, backup_path })
}

fn backup_existing(report_path: &Path) -> Result<Option<PathBuf>, AppError> {
    if !report_path.is_file() {
        return Ok(None);
    }

    let mut name: OsString = report_path
        .file_name()
        .ok_or_else(|| {
            AppError::config_error(format!("Invalid report path: {}", report_path.display()))
        })?
        .to_os_string();
    name.push(".bak");
    let backup = report_path.with_file_name(name);

    fs::rename(report_path, &backup)?;
    Ok(Some(backup))
}
