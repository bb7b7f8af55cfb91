//! Typed view of the config.plist sections that reference assets.
//!
//! Two XML layouts are accepted. An Apple property list (`<plist>` root) is
//! deserialized through its dict/key structure; any other root is walked by
//! element tag, so `ACPI/Add` names a child `<ACPI>` holding an `<Add>` whose
//! child elements are the entries. Either way an absent section is not an
//! error; a present entry without a usable `Path` is.

mod element_tree;
mod plist_dict;

use std::path::{Component, Path};

use super::{AppError, Section};

const PATH_FIELD: &str = "Path";
const ENABLED_FIELD: &str = "Enabled";
const DOCUMENT_NAME: &str = "config.plist";

/// One record of an array section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEntry {
    /// File or directory name relative to the section's asset category.
    pub path: String,
    /// Projected `Enabled` flag; `None` when the field is absent.
    pub enabled: Option<bool>,
}

impl ComponentEntry {
    fn checked(
        section: Section,
        index: usize,
        path: String,
        enabled: Option<bool>,
    ) -> Result<Self, AppError> {
        validate_relative_path(section, index, &path)?;
        Ok(Self { path, enabled })
    }
}

/// Literal projection of a text `Enabled` value: only the exact text `true` is enabled.
pub fn enabled_from_text(text: &str) -> bool {
    text == "true"
}

fn validate_relative_path(section: Section, index: usize, path: &str) -> Result<(), AppError> {
    if path.is_empty() {
        return Err(AppError::InvalidField {
            section,
            index,
            field: PATH_FIELD,
            reason: "path is empty".to_string(),
        });
    }

    let escapes = Path::new(path).components().any(|component| {
        matches!(component, Component::ParentDir | Component::RootDir | Component::Prefix(_))
    });
    if escapes {
        return Err(AppError::PathTraversal(format!("{section}: {path}")));
    }
    Ok(())
}

fn parse_error(details: impl ToString) -> AppError {
    AppError::ParseError { what: DOCUMENT_NAME.to_string(), details: details.to_string() }
}

/// The parsed config document, restricted to the four asset-bearing sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    acpi_add: Option<Vec<ComponentEntry>>,
    kernel_add: Option<Vec<ComponentEntry>>,
    uefi_drivers: Option<Vec<ComponentEntry>>,
    misc_tools: Option<Vec<ComponentEntry>>,
}

impl ConfigDocument {
    /// Parse an XML document, either an Apple property list or a plain element tree.
    pub fn from_xml_bytes(bytes: &[u8]) -> Result<Self, AppError> {
        let text = std::str::from_utf8(bytes).map_err(parse_error)?;
        let options = roxmltree::ParsingOptions { allow_dtd: true, ..Default::default() };
        let tree = roxmltree::Document::parse_with_options(text, options).map_err(parse_error)?;

        if tree.root_element().has_tag_name("plist") {
            plist_dict::parse(bytes)
        } else {
            element_tree::parse(&tree)
        }
    }

    fn from_sections(
        mut section_entries: impl FnMut(Section) -> Result<Option<Vec<ComponentEntry>>, AppError>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            acpi_add: section_entries(Section::Acpi)?,
            kernel_add: section_entries(Section::Kernel)?,
            uefi_drivers: section_entries(Section::Drivers)?,
            misc_tools: section_entries(Section::Tools)?,
        })
    }

    /// Entries of a section in document order, or `None` when the section is absent.
    pub fn section(&self, section: Section) -> Option<&[ComponentEntry]> {
        let entries = match section {
            Section::Acpi => &self.acpi_add,
            Section::Kernel => &self.kernel_add,
            Section::Drivers => &self.uefi_drivers,
            Section::Tools => &self.misc_tools,
        };
        entries.as_deref()
    }
}
