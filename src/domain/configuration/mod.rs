pub mod settings;

pub use settings::{GenerateSettings, PathSettings, ReadSettings, SETTINGS_FILE, Settings};
