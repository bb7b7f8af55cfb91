//! Apple property-list layout: sections are dict keys, entries are dicts.

use std::io::Cursor;

use plist::Value;
use serde::Deserialize;

use super::{
    ComponentEntry, ConfigDocument, ENABLED_FIELD, PATH_FIELD, enabled_from_text, parse_error,
};
use crate::domain::{AppError, Section};

pub(super) fn parse(bytes: &[u8]) -> Result<ConfigDocument, AppError> {
    let raw: RawDocument = plist::from_reader_xml(Cursor::new(bytes)).map_err(parse_error)?;
    let mut sections = raw.into_sections();

    ConfigDocument::from_sections(|section| {
        let values = sections[slot(section)].take();
        values
            .map(|values| {
                values
                    .iter()
                    .enumerate()
                    .map(|(index, value)| entry_from_value(section, index, value))
                    .collect()
            })
            .transpose()
    })
}

fn entry_from_value(
    section: Section,
    index: usize,
    value: &Value,
) -> Result<ComponentEntry, AppError> {
    let dict = value.as_dictionary().ok_or(AppError::MissingField {
        section,
        index,
        field: PATH_FIELD,
    })?;

    let path = match dict.get(PATH_FIELD) {
        None => return Err(AppError::MissingField { section, index, field: PATH_FIELD }),
        Some(Value::String(path)) => path.clone(),
        Some(_) => {
            return Err(AppError::InvalidField {
                section,
                index,
                field: PATH_FIELD,
                reason: "expected a string".to_string(),
            });
        }
    };
    let enabled = dict.get(ENABLED_FIELD).map(project_enabled);

    ComponentEntry::checked(section, index, path, enabled)
}

fn project_enabled(value: &Value) -> bool {
    match value {
        Value::Boolean(flag) => *flag,
        Value::String(text) => enabled_from_text(text),
        _ => false,
    }
}

fn slot(section: Section) -> usize {
    match section {
        Section::Acpi => 0,
        Section::Kernel => 1,
        Section::Drivers => 2,
        Section::Tools => 3,
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    #[serde(rename = "ACPI", default)]
    acpi: Option<RawAdd>,
    #[serde(rename = "Kernel", default)]
    kernel: Option<RawAdd>,
    #[serde(rename = "UEFI", default)]
    uefi: Option<RawUefi>,
    #[serde(rename = "Misc", default)]
    misc: Option<RawMisc>,
}

impl RawDocument {
    fn into_sections(self) -> [Option<Vec<Value>>; 4] {
        [
            self.acpi.and_then(|s| s.add),
            self.kernel.and_then(|s| s.add),
            self.uefi.and_then(|s| s.drivers),
            self.misc.and_then(|s| s.tools),
        ]
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawAdd {
    #[serde(rename = "Add", default)]
    add: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawUefi {
    #[serde(rename = "Drivers", default)]
    drivers: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMisc {
    #[serde(rename = "Tools", default)]
    tools: Option<Vec<Value>>,
}
