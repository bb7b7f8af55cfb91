//! Shared testing utilities for simpleplistor CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("simpleplistor").expect("Failed to locate binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Path to the asset database in the work directory.
    pub fn database_path(&self) -> PathBuf {
        self.work_dir.join("database")
    }

    /// Create the fixed parts of the asset database.
    pub fn create_database(&self, version: &str) {
        let db = self.database_path();
        fs::create_dir_all(db.join("OC")).unwrap();
        fs::create_dir_all(db.join("Resources/Font")).unwrap();
        fs::write(db.join("ocver.shp"), format!("{version}\n")).unwrap();
        fs::write(db.join("OC/BOOTx64.efi"), "bootx64").unwrap();
        fs::write(db.join("OC/OpenCore.efi"), "opencore").unwrap();
        fs::write(db.join("Resources/Font/Terminus.hex"), "font").unwrap();
    }

    /// Add a file asset under a database category.
    pub fn add_asset(&self, category: &str, name: &str, content: &str) {
        let path = self.database_path().join(category).join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Write a config document into the work directory.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Directories in the work directory whose name marks a generated EFI folder.
    pub fn generated_dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = fs::read_dir(&self.work_dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| {
                path.is_dir()
                    && path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with("SimplePlistor_") && n.ends_with("_EFI"))
            })
            .collect();
        dirs.sort();
        dirs
    }

    /// Path to the JSON report in the work directory.
    pub fn report_path(&self) -> PathBuf {
        self.work_dir.join("temp.json")
    }
}

/// Builder for config.plist documents used by the CLI tests.
#[allow(dead_code)]
#[derive(Default)]
pub struct ConfigPlist {
    body: String,
}

#[allow(dead_code)]
impl ConfigPlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `<parent>/<array>` section whose entries are `(path, enabled_text)` pairs.
    pub fn section(mut self, parent: &str, array: &str, entries: &[(&str, &str)]) -> Self {
        let items: String = entries
            .iter()
            .map(|(path, enabled)| {
                format!(
                    "<dict><key>Comment</key><string></string>\
                     <key>Enabled</key><string>{enabled}</string>\
                     <key>Path</key><string>{path}</string></dict>"
                )
            })
            .collect();
        self.body.push_str(&format!(
            "<key>{parent}</key><dict><key>{array}</key><array>{items}</array></dict>"
        ));
        self
    }

    pub fn build(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \
             \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n\
             <plist version=\"1.0\"><dict>{}</dict></plist>\n",
            self.body
        )
    }
}
