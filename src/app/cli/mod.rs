//! CLI Adapter.

mod generate;
mod read;

use std::path::PathBuf;

use crate::domain::AppError;
use clap::Parser;

#[derive(Parser)]
#[command(name = "simpleplistor")]
#[command(version)]
#[command(
    about = "EFI Config Reader and Generator",
    long_about = "Generate an OpenCore EFI folder from config.plist and the local asset \
                  database, or summarize its ACPI/Kernel/UEFI/Misc entries into temp.json."
)]
struct Cli {
    /// Generate EFI folder from config.plist
    #[arg(short = 'g', long, value_name = "CONFIG_PLIST", conflicts_with = "read")]
    generate: Option<PathBuf>,

    /// Read config.plist and output to temp.json
    #[arg(short = 'r', long, value_name = "CONFIG_PLIST")]
    read: Option<PathBuf>,

    /// Fail when a referenced asset is missing from the database
    #[arg(long, requires = "generate")]
    strict: bool,

    /// Asset database directory (default: ./database)
    #[arg(long, value_name = "DIR", requires = "generate")]
    database: Option<PathBuf>,

    /// Keep an existing temp.json as temp.json.bak
    #[arg(long, requires = "read")]
    backup: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = if let Some(config) = cli.generate {
        generate::run_generate(config, cli.strict, cli.database)
    } else if let Some(config) = cli.read {
        read::run_read(config, cli.backup)
    } else {
        Ok(())
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
