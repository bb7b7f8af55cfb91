//! Fixed names of the asset database and the generated EFI folder.

use chrono::NaiveDateTime;

/// Default asset database directory, relative to the working directory.
pub const DATABASE_DIR: &str = "database";
/// Single-line OpenCore version marker inside the database.
pub const VERSION_MARKER: &str = "ocver.shp";
/// Database folder holding the boot binaries.
pub const BOOT_ASSET_DIR: &str = "OC";
/// Database and output folder for generic resources.
pub const RESOURCES_DIR: &str = "Resources";
/// Default report file name.
pub const REPORT_FILE: &str = "temp.json";

/// Output subfolders created for every generated EFI folder.
pub const OUTPUT_SUBDIRS: [&str; 6] = ["BOOT", "ACPI", "Kexts", "Drivers", "Tools", "Resources"];

/// A boot binary copied verbatim from the database's `OC` folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootBinary {
    /// File name inside `database/OC`.
    pub source: &'static str,
    /// Destination relative to the output directory.
    pub destination: &'static str,
}

pub const BOOT_BINARIES: [BootBinary; 2] = [
    BootBinary { source: "BOOTx64.efi", destination: "BOOT/BOOTx64.efi" },
    BootBinary { source: "OpenCore.efi", destination: "OpenCore.efi" },
];

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Name of the generated EFI folder: `SimplePlistor_<version>_<YYYYMMDDHHMMSS>_EFI`.
pub fn output_dir_name(version: &str, at: NaiveDateTime) -> String {
    format!("SimplePlistor_{}_{}_EFI", version, at.format(TIMESTAMP_FORMAT))
}
