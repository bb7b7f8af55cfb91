//! Generate command implementation.

use std::path::PathBuf;

use crate::app::api::GenerateOptions;
use crate::domain::AppError;

pub fn run_generate(
    config: PathBuf,
    strict: bool,
    database: Option<PathBuf>,
) -> Result<(), AppError> {
    let cwd = std::env::current_dir()?;
    let options = GenerateOptions { strict, database };
    let outcome = crate::app::api::generate_at(&cwd, &config, &options)?;

    let shown = outcome.output_dir.strip_prefix(&cwd).unwrap_or(&outcome.output_dir);
    println!("EFI folder generated at: {}", shown.display());
    Ok(())
}
