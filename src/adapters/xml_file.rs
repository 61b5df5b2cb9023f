// SPDX-License-Identifier: MIT OR Apache-2.0

//! XML format adapter.

use crate::domain::{ConfigTree, ConfigValue, FileFormat, SyntaxError};
use crate::ports::FormatParser;

/// Parser for XML documents, backed by `roxmltree`.
///
/// Conversion is recursive: an element with child elements becomes a table
/// keyed by child tag name; an element without child elements becomes its
/// text content (or [`ConfigValue::Null`] when it has none). Attributes are
/// not represented.
///
/// Sibling elements that share a tag name collapse into a single key with
/// last-write-wins semantics, because the conversion target is a table keyed
/// by tag name. `<root><a>1</a><a>2</a></root>` therefore yields
/// `{"a": "2"}`. Downstream consumers rely on this, so it must not be
/// "fixed" into an array without a contract change.
#[derive(Debug, Clone, Default)]
pub struct XmlParser;

impl FormatParser for XmlParser {
    fn format(&self) -> FileFormat {
        FileFormat::Xml
    }

    fn parse(&self, content: &str) -> Result<ConfigValue, SyntaxError> {
        let document = roxmltree::Document::parse(content)
            .map_err(|e| SyntaxError::new(format!("invalid XML: {}", e), e))?;
        Ok(convert(document.root_element()))
    }
}

fn convert(node: roxmltree::Node<'_, '_>) -> ConfigValue {
    let mut children = node.children().filter(roxmltree::Node::is_element).peekable();
    if children.peek().is_none() {
        return match node.text() {
            Some(text) => ConfigValue::String(text.to_string()),
            None => ConfigValue::Null,
        };
    }

    let mut tree = ConfigTree::new();
    for child in children {
        tree.insert(child.tag_name().name().to_string(), convert(child));
    }
    ConfigValue::Table(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let xml = "<config><name>app</name></config>";
        let tree = XmlParser.parse(xml).unwrap();
        assert_eq!(
            tree.as_table().unwrap().get("name"),
            Some(&ConfigValue::from("app"))
        );
    }

    #[test]
    fn test_parse_nested_elements() {
        let xml = "<config><database><host>localhost</host><port>5432</port></database></config>";
        let tree = XmlParser.parse(xml).unwrap();
        let database = tree
            .as_table()
            .unwrap()
            .get("database")
            .and_then(ConfigValue::as_table)
            .unwrap();
        assert_eq!(database.get("host"), Some(&ConfigValue::from("localhost")));
        // XML carries no types: everything is text.
        assert_eq!(database.get("port"), Some(&ConfigValue::from("5432")));
    }

    #[test]
    fn test_empty_element_is_null() {
        let xml = "<config><placeholder/></config>";
        let tree = XmlParser.parse(xml).unwrap();
        assert_eq!(
            tree.as_table().unwrap().get("placeholder"),
            Some(&ConfigValue::Null)
        );
    }

    #[test]
    fn test_duplicate_siblings_last_write_wins() {
        // Pinned lossy behavior: the table is keyed by tag name, so the
        // later sibling overwrites the earlier one.
        let xml = "<root><a>1</a><a>2</a></root>";
        let tree = XmlParser.parse(xml).unwrap();
        let table = tree.as_table().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a"), Some(&ConfigValue::from("2")));
    }

    #[test]
    fn test_childless_root_is_text() {
        let tree = XmlParser.parse("<root>just text</root>").unwrap();
        assert_eq!(tree, ConfigValue::from("just text"));
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let tree = XmlParser.parse("<root><a> spaced </a></root>").unwrap();
        assert_eq!(
            tree.as_table().unwrap().get("a"),
            Some(&ConfigValue::from(" spaced "))
        );
    }

    #[test]
    fn test_malformed_document_fails() {
        assert!(XmlParser.parse("<root><unclosed></root>").is_err());
    }

    #[test]
    fn test_format_tag() {
        assert_eq!(XmlParser.format(), FileFormat::Xml);
    }
}
