// SPDX-License-Identifier: MIT OR Apache-2.0

//! Java-style properties format adapter.

use crate::domain::{ConfigTree, ConfigValue, FileFormat, SyntaxError};
use crate::ports::FormatParser;

/// Parser for `.properties` files.
///
/// Line rules, applied after trimming surrounding whitespace:
/// - empty lines and lines starting with `#` or `!` are skipped;
/// - the line splits on the first `=`, or failing that the first `:`;
/// - lines with neither separator are skipped, never fatal;
/// - key and value are trimmed before insertion;
/// - a later duplicate key overwrites an earlier one.
///
/// The output is a flat single-level table of strings. Parsing itself cannot
/// fail; only reading the file can.
#[derive(Debug, Clone, Default)]
pub struct PropertiesParser;

impl FormatParser for PropertiesParser {
    fn format(&self) -> FileFormat {
        FileFormat::Properties
    }

    fn parse(&self, content: &str) -> Result<ConfigValue, SyntaxError> {
        let mut tree = ConfigTree::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let split = line
                .split_once('=')
                .or_else(|| line.split_once(':'));
            let Some((key, value)) = split else {
                tracing::trace!(line, "skipping properties line without separator");
                continue;
            };
            tree.insert(
                key.trim().to_string(),
                ConfigValue::String(value.trim().to_string()),
            );
        }
        Ok(ConfigValue::Table(tree))
    }
}
