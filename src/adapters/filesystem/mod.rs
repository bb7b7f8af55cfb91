//! Filesystem-backed asset database.
//!
//! The database is only ever read. Every lookup is anchored at the database
//! root; entry paths are validated before they reach this adapter.

mod copy;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::layout::{BOOT_ASSET_DIR, RESOURCES_DIR, VERSION_MARKER};
use crate::domain::{AppError, Section};

pub use copy::{copy_file, copy_tree};

/// A referenced asset found in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    File(PathBuf),
    Directory(PathBuf),
}

impl AssetSource {
    /// Copy this asset to `dst`: recursively for directories, verbatim for files.
    pub fn copy_to(&self, dst: &Path) -> Result<(), AppError> {
        match self {
            AssetSource::File(path) => copy_file(path, dst),
            AssetSource::Directory(path) => copy_tree(path, dst),
        }
    }
}

/// Local directory of boot binaries, ACPI tables, kexts, drivers, tools and resources.
#[derive(Debug, Clone)]
pub struct AssetDatabase {
    root: PathBuf,
}

impl AssetDatabase {
    /// Create a database rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// OpenCore version read from the marker file, whitespace-trimmed.
    ///
    /// The tag becomes part of a directory name, so it must be a single
    /// non-empty path segment.
    pub fn version_tag(&self) -> Result<String, AppError> {
        let marker = self.root.join(VERSION_MARKER);
        let content = match fs::read_to_string(&marker) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::AssetStoreIncomplete(marker));
            }
            Err(err) => return Err(err.into()),
        };

        let tag = content.trim();
        if tag.is_empty() || tag.contains(['/', '\\']) || tag.contains("..") {
            return Err(AppError::config_error(format!(
                "Invalid version tag {:?} in {}",
                tag,
                marker.display()
            )));
        }
        Ok(tag.to_string())
    }

    /// Path of a boot binary inside the `OC` folder.
    pub fn boot_binary(&self, name: &str) -> Result<PathBuf, AppError> {
        let path = self.root.join(BOOT_ASSET_DIR).join(name);
        if !path.is_file() {
            return Err(AppError::AssetStoreIncomplete(path));
        }
        Ok(path)
    }

    /// The generic resources tree.
    pub fn resources_dir(&self) -> Result<PathBuf, AppError> {
        let path = self.root.join(RESOURCES_DIR);
        if !path.is_dir() {
            return Err(AppError::AssetStoreIncomplete(path));
        }
        Ok(path)
    }

    /// Find an entry's asset inside the section's category folder.
    pub fn locate(&self, section: Section, entry_path: &str) -> Option<AssetSource> {
        let path = self.root.join(section.asset_folder()).join(entry_path);
        if path.is_dir() {
            Some(AssetSource::Directory(path))
        } else if path.exists() {
            Some(AssetSource::File(path))
        } else {
            None
        }
    }
}
