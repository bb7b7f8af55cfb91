//! Plain element layout: sections are nested tags, entries are child
//! elements carrying `<Path>` and `<Enabled>` text children.

use roxmltree::{Document, Node};

use super::{ComponentEntry, ConfigDocument, ENABLED_FIELD, PATH_FIELD, enabled_from_text};
use crate::domain::{AppError, Section};

pub(super) fn parse(tree: &Document<'_>) -> Result<ConfigDocument, AppError> {
    let root = tree.root_element();

    ConfigDocument::from_sections(|section| {
        let Some(array) = find_path(root, section.document_path()) else {
            return Ok(None);
        };

        array
            .children()
            .filter(Node::is_element)
            .enumerate()
            .map(|(index, item)| entry_from_element(section, index, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    })
}

/// First element reached by following each slash-separated tag name.
fn find_path<'a, 'input>(root: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    path.split('/').try_fold(root, find_child)
}

fn find_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| child.is_element() && child.has_tag_name(name))
}

fn entry_from_element(
    section: Section,
    index: usize,
    item: Node<'_, '_>,
) -> Result<ComponentEntry, AppError> {
    let path = find_child(item, PATH_FIELD)
        .ok_or(AppError::MissingField { section, index, field: PATH_FIELD })?
        .text()
        .unwrap_or_default()
        .to_string();
    let enabled = find_child(item, ENABLED_FIELD)
        .map(|node| enabled_from_text(node.text().unwrap_or_default()));

    ComponentEntry::checked(section, index, path, enabled)
}
