mod asset_database_fixture;
mod fixed_clock;
mod plist_builder;

pub use asset_database_fixture::AssetDatabaseFixture;
pub use fixed_clock::FixedClock;
pub use plist_builder::PlistBuilder;
