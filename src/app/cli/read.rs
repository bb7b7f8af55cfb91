//! Read command implementation.

use std::path::PathBuf;

use crate::app::api::ReadOptions;
use crate::domain::AppError;

pub fn run_read(config: PathBuf, backup: bool) -> Result<(), AppError> {
    crate::app::api::read(&config, &ReadOptions { backup })?;
    Ok(())
}
