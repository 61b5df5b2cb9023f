// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML format adapter.

use crate::domain::{ConfigTree, ConfigValue, FileFormat, SyntaxError};
use crate::ports::FormatParser;

/// Parser for YAML documents, backed by `serde_yaml`.
///
/// `serde_yaml` never executes arbitrary tags, so loading is safe by
/// construction. Mapping keys that are scalars (strings, numbers, booleans)
/// are stringified so the whole tree stays addressable by dotted string keys;
/// keys that are themselves collections are skipped.
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl FormatParser for YamlParser {
    fn format(&self) -> FileFormat {
        FileFormat::Yaml
    }

    fn parse(&self, content: &str) -> Result<ConfigValue, SyntaxError> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| SyntaxError::new(format!("invalid YAML: {}", e), e))?;
        Ok(convert(value))
    }
}

fn convert(value: serde_yaml::Value) -> ConfigValue {
    match value {
        serde_yaml::Value::Null => ConfigValue::Null,
        serde_yaml::Value::Bool(b) => ConfigValue::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                ConfigValue::Integer(i)
            } else {
                ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_yaml::Value::String(s) => ConfigValue::String(s),
        serde_yaml::Value::Sequence(items) => {
            ConfigValue::Array(items.into_iter().map(convert).collect())
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut tree = ConfigTree::new();
            for (key, val) in mapping {
                if let Some(key) = scalar_key(&key) {
                    tree.insert(key, convert(val));
                }
            }
            ConfigValue::Table(tree)
        }
        serde_yaml::Value::Tagged(tagged) => convert(tagged.value),
    }
}

fn scalar_key(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
