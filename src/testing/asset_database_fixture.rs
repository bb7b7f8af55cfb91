use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Section;

/// On-disk asset database populated with the fixed parts every generate run needs.
pub struct AssetDatabaseFixture {
    root: PathBuf,
}

impl AssetDatabaseFixture {
    pub fn create(root: &Path, version: &str) -> Self {
        fs::create_dir_all(root.join("OC")).unwrap();
        fs::write(root.join("ocver.shp"), format!("{version}\n")).unwrap();
        fs::write(root.join("OC/BOOTx64.efi"), "bootx64").unwrap();
        fs::write(root.join("OC/OpenCore.efi"), "opencore").unwrap();
        fs::create_dir_all(root.join("Resources/Image")).unwrap();
        fs::write(root.join("Resources/Image/Background.icns"), "icns").unwrap();
        Self { root: root.to_path_buf() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&self, section: Section, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(section.asset_folder()).join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// Add a bundle directory with a single `Contents/Info.plist` file.
    pub fn add_bundle(&self, section: Section, name: &str) -> PathBuf {
        let path = self.root.join(section.asset_folder()).join(name);
        fs::create_dir_all(path.join("Contents/MacOS")).unwrap();
        fs::write(path.join("Contents/Info.plist"), name).unwrap();
        path
    }
}
