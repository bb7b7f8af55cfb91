//! simpleplistor: materialize an OpenCore EFI folder from config.plist, or
//! summarize its component sections as JSON.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    GenerateOptions, GenerateOutcome, ReadOptions, ReadOutcome, SkippedAsset, generate,
    generate_at, read, read_at,
};
pub use domain::{AppError, ComponentEntry, ConfigDocument, ReportDocument, ReportEntry, Section};
