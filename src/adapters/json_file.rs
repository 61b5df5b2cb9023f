// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON format adapter.

use crate::domain::{ConfigTree, ConfigValue, FileFormat, SyntaxError};
use crate::ports::FormatParser;

/// Parser for JSON documents, backed by `serde_json`.
///
/// The document value is converted as-is: a top-level object becomes a
/// table, but arrays and scalars are legal JSON documents too and are kept
/// unchanged (dotted lookup then only resolves the empty key).
#[derive(Debug, Clone, Default)]
pub struct JsonParser;

impl FormatParser for JsonParser {
    fn format(&self) -> FileFormat {
        FileFormat::Json
    }

    fn parse(&self, content: &str) -> Result<ConfigValue, SyntaxError> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| SyntaxError::new(format!("invalid JSON: {}", e), e))?;
        Ok(convert(value))
    }
}

fn convert(value: serde_json::Value) -> ConfigValue {
    match value {
        serde_json::Value::Null => ConfigValue::Null,
        serde_json::Value::Bool(b) => ConfigValue::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                ConfigValue::Integer(i)
            } else {
                // u64 beyond i64::MAX and all fractional numbers land here.
                ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => ConfigValue::String(s),
        serde_json::Value::Array(items) => {
            ConfigValue::Array(items.into_iter().map(convert).collect())
        }
        serde_json::Value::Object(object) => {
            let mut tree = ConfigTree::new();
            for (key, val) in object {
                tree.insert(key, convert(val));
            }
            ConfigValue::Table(tree)
        }
    }
}
