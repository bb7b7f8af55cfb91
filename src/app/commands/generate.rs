//! Materialize an EFI folder from a config document and the asset database.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::filesystem::{copy_file, copy_tree};
use crate::adapters::{AssetDatabase, AssetSource};
use crate::app::AppContext;
use crate::app::configuration::load_document;
use crate::domain::layout::{BOOT_BINARIES, OUTPUT_SUBDIRS, RESOURCES_DIR, output_dir_name};
use crate::domain::{AppError, ConfigDocument, Section};
use crate::ports::Clock;

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Fail on referenced assets missing from the database.
    pub strict: bool,
    /// Asset database root overriding the configured one.
    pub database: Option<PathBuf>,
}

/// An entry whose asset was not found in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedAsset {
    pub section: Section,
    pub path: String,
}

/// Result of a generate run.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// The freshly generated EFI folder.
    pub output_dir: PathBuf,
    /// Destinations of every copied section asset, in processing order.
    pub copied: Vec<PathBuf>,
    /// Section entries skipped because their asset is absent.
    pub skipped: Vec<SkippedAsset>,
}

struct PlannedCopy {
    source: AssetSource,
    destination: PathBuf,
}

/// Execute the generate command.
pub fn execute<C: Clock>(
    ctx: &AppContext<C>,
    config_path: &Path,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let document = load_document(config_path)?;
    let settings = ctx.settings();
    let database_root = options.database.clone().unwrap_or_else(|| settings.paths.database.clone());
    let database = AssetDatabase::new(database_root);
    let strict = options.strict || settings.generate.strict_assets;

    let version = database.version_tag()?;
    let output_dir = settings.paths.output_root.join(output_dir_name(&version, ctx.clock().now()));

    materialize(&document, &database, &output_dir, strict)
}

/// Copy the boot binaries, section assets and resources into `output_dir`.
///
/// Every database lookup happens before the first write, so an incomplete
/// database (or a missing asset in strict mode) leaves no output behind.
pub fn materialize(
    document: &ConfigDocument,
    database: &AssetDatabase,
    output_dir: &Path,
    strict: bool,
) -> Result<GenerateOutcome, AppError> {
    let mut boot_binaries = Vec::with_capacity(BOOT_BINARIES.len());
    for binary in BOOT_BINARIES {
        boot_binaries.push((database.boot_binary(binary.source)?, output_dir.join(binary.destination)));
    }
    let resources = database.resources_dir()?;

    let mut planned = Vec::new();
    let mut skipped = Vec::new();
    for section in Section::ALL {
        let Some(entries) = document.section(section) else {
            continue;
        };

        for entry in entries {
            match database.locate(section, &entry.path) {
                Some(source) => planned.push(PlannedCopy {
                    source,
                    destination: output_dir.join(section.output_folder()).join(&entry.path),
                }),
                None if strict => {
                    return Err(AppError::AssetMissing {
                        category: section.asset_folder(),
                        path: entry.path.clone(),
                    });
                }
                None => skipped.push(SkippedAsset { section, path: entry.path.clone() }),
            }
        }
    }

    for subdir in OUTPUT_SUBDIRS {
        fs::create_dir_all(output_dir.join(subdir))?;
    }

    for (source, destination) in &boot_binaries {
        copy_file(source, destination)?;
    }

    let mut copied = Vec::with_capacity(planned.len());
    for copy in planned {
        copy.source.copy_to(&copy.destination)?;
        copied.push(copy.destination);
    }

    copy_tree(&resources, &output_dir.join(RESOURCES_DIR))?;

    Ok(GenerateOutcome { output_dir: output_dir.to_path_buf(), copied, skipped })
}
