// SPDX-License-Identifier: MIT OR Apache-2.0

//! TOML format adapter.

use crate::domain::{ConfigTree, ConfigValue, FileFormat, SyntaxError};
use crate::ports::FormatParser;

/// Parser for TOML documents, backed by the `toml` crate.
///
/// TOML documents are always a table at the top level. Datetimes have no
/// counterpart in [`ConfigValue`] and are carried as their string rendering.
#[derive(Debug, Clone, Default)]
pub struct TomlParser;

impl FormatParser for TomlParser {
    fn format(&self) -> FileFormat {
        FileFormat::Toml
    }

    fn parse(&self, content: &str) -> Result<ConfigValue, SyntaxError> {
        let value: toml::Value = toml::from_str(content)
            .map_err(|e| SyntaxError::new(format!("invalid TOML: {}", e), e))?;
        Ok(convert(value))
    }
}

fn convert(value: toml::Value) -> ConfigValue {
    match value {
        toml::Value::String(s) => ConfigValue::String(s),
        toml::Value::Integer(n) => ConfigValue::Integer(n),
        toml::Value::Float(f) => ConfigValue::Float(f),
        toml::Value::Boolean(b) => ConfigValue::Bool(b),
        toml::Value::Datetime(dt) => ConfigValue::String(dt.to_string()),
        toml::Value::Array(items) => {
            ConfigValue::Array(items.into_iter().map(convert).collect())
        }
        toml::Value::Table(table) => {
            let mut tree = ConfigTree::new();
            for (key, val) in table {
                tree.insert(key, convert(val));
            }
            ConfigValue::Table(tree)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let tree = TomlParser.parse("name = \"app\"").unwrap();
        assert_eq!(
            tree.as_table().unwrap().get("name"),
            Some(&ConfigValue::from("app"))
        );
    }

    #[test]
    fn test_parse_nested_tables() {
        let toml = r#"
[database.connection]
host = "localhost"
port = 5432
"#;
        let tree = TomlParser.parse(toml).unwrap();
        let connection = tree
            .as_table()
            .unwrap()
            .get("database")
            .and_then(ConfigValue::as_table)
            .unwrap()
            .get("connection")
            .and_then(ConfigValue::as_table)
            .unwrap();
        assert_eq!(connection.get("host"), Some(&ConfigValue::from("localhost")));
        assert_eq!(connection.get("port"), Some(&ConfigValue::Integer(5432)));
    }

    #[test]
    fn test_parse_scalar_types() {
        let toml = "flag = true\ncount = 3\nratio = 0.5\n";
        let tree = TomlParser.parse(toml).unwrap();
        let table = tree.as_table().unwrap();
        assert_eq!(table.get("flag"), Some(&ConfigValue::Bool(true)));
        assert_eq!(table.get("count"), Some(&ConfigValue::Integer(3)));
        assert_eq!(table.get("ratio"), Some(&ConfigValue::Float(0.5)));
    }

    #[test]
    fn test_parse_array() {
        let tree = TomlParser.parse("servers = [\"a\", \"b\"]").unwrap();
        let servers = tree
            .as_table()
            .unwrap()
            .get("servers")
            .and_then(ConfigValue::as_array)
            .unwrap();
        assert_eq!(servers, &[ConfigValue::from("a"), ConfigValue::from("b")]);
    }

    #[test]
    fn test_datetime_becomes_string() {
        let tree = TomlParser.parse("built = 2024-01-15T08:00:00Z").unwrap();
        let built = tree.as_table().unwrap().get("built").unwrap();
        assert!(built.as_str().unwrap().starts_with("2024-01-15"));
    }

    #[test]
    fn test_malformed_document_fails() {
        let result = TomlParser.parse("key = ");
        assert!(result.is_err());
    }

    #[test]
    fn test_format_tag() {
        assert_eq!(TomlParser.format(), FileFormat::Toml);
    }
}
