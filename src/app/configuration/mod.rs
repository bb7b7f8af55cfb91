mod document_reader;
mod settings_reader;

pub use document_reader::load_document;
pub use settings_reader::{load_settings, parse_settings_content};
