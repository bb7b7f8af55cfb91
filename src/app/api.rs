//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together settings
//! loading, context creation and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::SystemClock;
use crate::app::configuration::load_settings;
use crate::app::{
    AppContext,
    commands::{generate, read},
};

pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome, SkippedAsset};
pub use crate::app::commands::read::{ReadOptions, ReadOutcome};
pub use crate::domain::AppError;

/// Create an `AppContext` for a working directory.
fn create_context(base: &Path) -> Result<AppContext<SystemClock>, AppError> {
    let settings = load_settings(base)?;
    Ok(AppContext::new(settings, SystemClock))
}

// =============================================================================
// Generate Command API
// =============================================================================

/// Generate an EFI folder from `config_path` using the current directory's database.
pub fn generate(config_path: &Path, options: &GenerateOptions) -> Result<GenerateOutcome, AppError> {
    generate_at(std::env::current_dir()?, config_path, options)
}

/// Generate an EFI folder with `base` as the working directory.
pub fn generate_at(
    base: impl Into<PathBuf>,
    config_path: &Path,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context(&base.into())?;
    generate::execute(&ctx, config_path, options)
}

// =============================================================================
// Read Command API
// =============================================================================

/// Write the JSON summary of `config_path` into the current directory.
pub fn read(config_path: &Path, options: &ReadOptions) -> Result<ReadOutcome, AppError> {
    read_at(std::env::current_dir()?, config_path, options)
}

/// Write the JSON summary of `config_path` with `base` as the working directory.
pub fn read_at(
    base: impl Into<PathBuf>,
    config_path: &Path,
    options: &ReadOptions,
) -> Result<ReadOutcome, AppError> {
    let ctx = create_context(&base.into())?;
    read::execute(&ctx, config_path, options)
}
