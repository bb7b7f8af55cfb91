use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::domain::layout::{DATABASE_DIR, REPORT_FILE};

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "simpleplistor.toml";

/// Tool settings, as read from `simpleplistor.toml`.
///
/// Every field has a default so an absent file and an empty file are equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub paths: PathSettings,
    #[serde(default)]
    pub generate: GenerateSettings,
    #[serde(default)]
    pub read: ReadSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathSettings {
    /// Asset database root.
    #[serde(default = "default_database")]
    pub database: PathBuf,
    /// Directory in which EFI folders are generated.
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
    /// Report written by the read operation.
    #[serde(default = "default_report_file")]
    pub report_file: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            database: default_database(),
            output_root: default_output_root(),
            report_file: default_report_file(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateSettings {
    /// Fail on assets referenced by the document but absent from the database.
    #[serde(default)]
    pub strict_assets: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadSettings {
    /// Keep the previous report as `<report>.bak`.
    #[serde(default)]
    pub backup_report: bool,
}

fn default_database() -> PathBuf {
    PathBuf::from(DATABASE_DIR)
}

fn default_output_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_report_file() -> PathBuf {
    PathBuf::from(REPORT_FILE)
}

impl Settings {
    /// Settings with every relative path anchored at `base`.
    pub fn rooted_at(mut self, base: &Path) -> Self {
        self.paths.database = anchor(base, self.paths.database);
        self.paths.output_root = anchor(base, self.paths.output_root);
        self.paths.report_file = anchor(base, self.paths.report_file);
        self
    }
}

fn anchor(base: &Path, path: PathBuf) -> PathBuf {
    let joined = if path.is_absolute() { path } else { base.join(path) };
    joined.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}
