//! Config document loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, ConfigDocument};

/// Read and parse a config.plist.
///
/// A missing file is reported as [`AppError::ConfigNotFound`] before any
/// other work happens.
pub fn load_document(path: &Path) -> Result<ConfigDocument, AppError> {
    if !path.exists() {
        return Err(AppError::ConfigNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    ConfigDocument::from_xml_bytes(&bytes)
}
