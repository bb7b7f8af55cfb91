use std::fmt;

/// One of the four array sections of config.plist that reference assets.
///
/// Declaration order matches the order in which sections are processed
/// and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// `ACPI/Add`: SSDT tables.
    Acpi,
    /// `Kernel/Add`: kernel extensions.
    Kernel,
    /// `UEFI/Drivers`: firmware drivers.
    Drivers,
    /// `Misc/Tools`: boot picker tools.
    Tools,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Acpi, Section::Kernel, Section::Drivers, Section::Tools];

    /// Slash-separated location of the array inside the document.
    pub fn document_path(self) -> &'static str {
        match self {
            Section::Acpi => "ACPI/Add",
            Section::Kernel => "Kernel/Add",
            Section::Drivers => "UEFI/Drivers",
            Section::Tools => "Misc/Tools",
        }
    }

    /// Category folder inside the asset database.
    pub fn asset_folder(self) -> &'static str {
        match self {
            Section::Acpi => "SSDT",
            Section::Kernel => "Kexts",
            Section::Drivers => "Drivers",
            Section::Tools => "Tools",
        }
    }

    /// Subfolder of the generated EFI directory.
    pub fn output_folder(self) -> &'static str {
        match self {
            Section::Acpi => "ACPI",
            Section::Kernel => "Kexts",
            Section::Drivers => "Drivers",
            Section::Tools => "Tools",
        }
    }

    /// Key used in the JSON report.
    pub fn report_key(self) -> &'static str {
        self.asset_folder()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.document_path())
    }
}
