//! Settings loading from the working directory.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, SETTINGS_FILE, Settings};

/// Load `simpleplistor.toml` from `base`, falling back to defaults when absent.
///
/// Relative paths in the returned settings are anchored at `base`.
pub fn load_settings(base: &Path) -> Result<Settings, AppError> {
    let path = base.join(SETTINGS_FILE);
    if !path.is_file() {
        return Ok(Settings::default().rooted_at(base));
    }

    let content = fs::read_to_string(&path)?;
    let settings = parse_settings_content(&content)?;
    Ok(settings.rooted_at(base))
}

/// Parse settings TOML.
pub fn parse_settings_content(content: &str) -> Result<Settings, AppError> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn absent_file_yields_rooted_defaults() {
        let dir = tempdir().unwrap();

        let settings = load_settings(dir.path()).unwrap();

        assert_eq!(settings.paths.database, dir.path().join("database"));
        assert_eq!(settings.paths.report_file, dir.path().join("temp.json"));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("simpleplistor.toml"),
            r#"[paths]
database = "assets/db"

[generate]
strict_assets = true
"#,
        )
        .unwrap();

        let settings = load_settings(dir.path()).unwrap();

        assert_eq!(settings.paths.database, dir.path().join("assets/db"));
        assert_eq!(settings.paths.output_root, dir.path());
        assert!(settings.generate.strict_assets);
        assert!(!settings.read.backup_report);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_settings_content("[paths]\ndatabse = \"db\"\n").unwrap_err();

        assert!(matches!(err, AppError::TomlParseError(_)));
    }

    #[test]
    fn empty_content_is_default() {
        let settings = parse_settings_content("").unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.paths.database, PathBuf::from("database"));
    }
}
