pub mod config_document;
pub mod configuration;
pub mod error;
pub mod layout;
pub mod report;
pub mod section;

pub use config_document::{ComponentEntry, ConfigDocument, enabled_from_text};
pub use configuration::{SETTINGS_FILE, Settings};
pub use error::AppError;
pub use report::{ReportDocument, ReportEntry};
pub use section::Section;
