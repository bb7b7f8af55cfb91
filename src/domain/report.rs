//! JSON summary of enabled/disabled components.

use serde::Serialize;

use super::{AppError, ConfigDocument, Section};

/// One `{Path, Enabled}` record of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportEntry {
    pub path: String,
    pub enabled: bool,
}

/// The report written by the read operation.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportDocument {
    #[serde(rename = "SSDT")]
    pub ssdt: Vec<ReportEntry>,
    #[serde(rename = "Kexts")]
    pub kexts: Vec<ReportEntry>,
    #[serde(rename = "Drivers")]
    pub drivers: Vec<ReportEntry>,
    #[serde(rename = "Tools")]
    pub tools: Vec<ReportEntry>,
}

impl ReportDocument {
    /// Project every present section of the document. Entries without
    /// `Enabled` fail the whole report.
    pub fn from_document(document: &ConfigDocument) -> Result<Self, AppError> {
        let mut report = Self::default();

        for section in Section::ALL {
            let Some(entries) = document.section(section) else {
                continue;
            };

            let slot = report.slot_mut(section);
            for (index, entry) in entries.iter().enumerate() {
                let enabled = entry.enabled.ok_or(AppError::MissingField {
                    section,
                    index,
                    field: "Enabled",
                })?;
                slot.push(ReportEntry { path: entry.path.clone(), enabled });
            }
        }

        Ok(report)
    }

    pub fn slot(&self, section: Section) -> &[ReportEntry] {
        match section {
            Section::Acpi => &self.ssdt,
            Section::Kernel => &self.kexts,
            Section::Drivers => &self.drivers,
            Section::Tools => &self.tools,
        }
    }

    fn slot_mut(&mut self, section: Section) -> &mut Vec<ReportEntry> {
        match section {
            Section::Acpi => &mut self.ssdt,
            Section::Kernel => &mut self.kexts,
            Section::Drivers => &mut self.drivers,
            Section::Tools => &mut self.tools,
        }
    }

    /// Serialize with a four-space indent.
    pub fn to_json(&self) -> Result<String, AppError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|err| AppError::config_error(err.to_string()))
    }
}
