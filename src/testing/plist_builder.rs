use std::collections::BTreeMap;

use crate::domain::Section;

/// Builds minimal config.plist documents for tests.
#[derive(Debug, Default)]
pub struct PlistBuilder {
    items: BTreeMap<usize, Vec<String>>,
}

impl PlistBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `{Enabled, Path}` dictionary with a text `Enabled`.
    pub fn entry(self, section: Section, path: &str, enabled: &str) -> Self {
        self.raw_entry(
            section,
            &format!(
                "<key>Enabled</key><string>{enabled}</string><key>Path</key><string>{path}</string>"
            ),
        )
    }

    /// Append a dictionary with the given inner XML.
    pub fn raw_entry(self, section: Section, inner: &str) -> Self {
        self.raw_item(section, &format!("<dict>{inner}</dict>"))
    }

    /// Append an arbitrary array element.
    pub fn raw_item(mut self, section: Section, item: &str) -> Self {
        self.items.entry(slot(section)).or_default().push(item.to_string());
        self
    }

    /// Declare a section with no entries.
    pub fn empty_section(mut self, section: Section) -> Self {
        self.items.entry(slot(section)).or_default();
        self
    }

    pub fn build(&self) -> String {
        let mut body = String::new();
        for section in Section::ALL {
            let Some(items) = self.items.get(&slot(section)) else {
                continue;
            };
            let (parent, array) =
                section.document_path().split_once('/').expect("section paths have two parts");
            body.push_str(&format!(
                "<key>{parent}</key><dict><key>{array}</key><array>{}</array></dict>",
                items.concat()
            ));
        }

        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <plist version=\"1.0\"><dict>{body}</dict></plist>\n"
        )
    }
}

fn slot(section: Section) -> usize {
    Section::ALL.iter().position(|s| *s == section).expect("known section")
}
