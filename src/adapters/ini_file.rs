// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI format adapter.

use crate::domain::{ConfigTree, ConfigValue, FileFormat, SyntaxError};
use crate::ports::FormatParser;
use ini::Ini;

/// Parser for INI files, backed by `rust-ini`.
///
/// Output is a fixed two-level shape: section name to a table of its keys.
/// INI carries no type information, so every value stays a string. The format
/// contract is strictly section-based: a property appearing before any
/// section header is a syntax error, not a loose top-level key.
#[derive(Debug, Clone, Default)]
pub struct IniParser;

impl FormatParser for IniParser {
    fn format(&self) -> FileFormat {
        FileFormat::Ini
    }

    fn parse(&self, content: &str) -> Result<ConfigValue, SyntaxError> {
        let ini = Ini::load_from_str(content)
            .map_err(|e| SyntaxError::new(format!("invalid INI: {}", e), e))?;

        let mut tree = ConfigTree::new();
        for (section, properties) in ini.iter() {
            let Some(section) = section else {
                // The general (headerless) section may exist but must be
                // empty; a property there has no addressable section name.
                if properties.iter().next().is_some() {
                    return Err(SyntaxError::message(
                        "property found before any section header",
                    ));
                }
                continue;
            };
            let mut entries = ConfigTree::new();
            for (key, value) in properties.iter() {
                entries.insert(key.to_string(), ConfigValue::from(value));
            }
            tree.insert(section.to_string(), ConfigValue::Table(entries));
        }
        Ok(ConfigValue::Table(tree))
    }
}
