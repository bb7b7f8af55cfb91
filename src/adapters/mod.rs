pub mod filesystem;
mod system_clock;

pub use filesystem::{AssetDatabase, AssetSource};
pub use system_clock::SystemClock;
