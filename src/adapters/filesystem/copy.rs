//! Copy primitives with merge semantics.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::domain::AppError;

/// Copy a single file, creating parent directories and overwriting the destination.
pub fn copy_file(src: &Path, dst: &Path) -> Result<(), AppError> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dst)?;
    Ok(())
}

/// Recursively copy `src` into `dst`.
///
/// Existing directories are merged; files with colliding names are
/// overwritten by the source. Symlinks are followed and copied as content.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<(), AppError> {
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry.path().strip_prefix(src).map_err(|_| {
            AppError::config_error(format!(
                "{} is not inside {}",
                entry.path().display(),
                src.display()
            ))
        })?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            copy_file(entry.path(), &target)?;
        }
    }
    Ok(())
}
