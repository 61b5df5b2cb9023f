// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotenv (`.env`) format adapter.

use crate::domain::{ConfigTree, ConfigValue, FileFormat, SyntaxError};
use crate::ports::FormatParser;

/// Parser for `.env` files.
///
/// Output is a flat single-level table: `KEY=VALUE` lines become string
/// values, a bare `KEY` with no `=` becomes [`ConfigValue::Null`] (the key is
/// declared but unset). Blank lines and `#` comments are skipped, a leading
/// `export ` prefix is tolerated, and a value wrapped in matching single or
/// double quotes is unwrapped.
///
/// Values are taken literally: `$VAR` references are not expanded from the
/// process environment. Parsing itself has no failure mode; the loader maps
/// a missing `.env` file to an empty tree rather than an error.
#[derive(Debug, Clone, Default)]
pub struct DotEnvParser;

impl FormatParser for DotEnvParser {
    fn format(&self) -> FileFormat {
        FileFormat::DotEnv
    }

    fn parse(&self, content: &str) -> Result<ConfigValue, SyntaxError> {
        let mut tree = ConfigTree::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line = line.strip_prefix("export ").unwrap_or(line).trim_start();
            match line.split_once('=') {
                Some((key, value)) => {
                    tree.insert(
                        key.trim().to_string(),
                        ConfigValue::String(unquote(value.trim()).to_string()),
                    );
                }
                None => {
                    tree.insert(line.to_string(), ConfigValue::Null);
                }
            }
        }
        Ok(ConfigValue::Table(tree))
    }
}

fn unquote(value: &str) -> &str {
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
    stripped.unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let tree = DotEnvParser.parse("DATABASE_URL=postgres://localhost\n").unwrap();
        assert_eq!(
            tree.as_table().unwrap().get("DATABASE_URL"),
            Some(&ConfigValue::from("postgres://localhost"))
        );
    }

    #[test]
    fn test_bare_key_is_null() {
        let tree = DotEnvParser.parse("DECLARED_ONLY\n").unwrap();
        assert_eq!(
            tree.as_table().unwrap().get("DECLARED_ONLY"),
            Some(&ConfigValue::Null)
        );
    }

    #[test]
    fn test_empty_value_is_empty_string() {
        let tree = DotEnvParser.parse("EMPTY=\n").unwrap();
        assert_eq!(
            tree.as_table().unwrap().get("EMPTY"),
            Some(&ConfigValue::from(""))
        );
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let tree = DotEnvParser.parse("# comment\n\nKEY=value\n").unwrap();
        assert_eq!(tree.as_table().unwrap().len(), 1);
    }

    #[test]
    fn test_export_prefix_tolerated() {
        let tree = DotEnvParser.parse("export PATH_PREFIX=/opt/app\n").unwrap();
        assert_eq!(
            tree.as_table().unwrap().get("PATH_PREFIX"),
            Some(&ConfigValue::from("/opt/app"))
        );
    }

    #[test]
    fn test_quoted_values_unwrapped() {
        let tree = DotEnvParser
            .parse("DOUBLE=\"hello world\"\nSINGLE='quoted'\n")
            .unwrap();
        let table = tree.as_table().unwrap();
        assert_eq!(table.get("DOUBLE"), Some(&ConfigValue::from("hello world")));
        assert_eq!(table.get("SINGLE"), Some(&ConfigValue::from("quoted")));
    }

    #[test]
    fn test_no_interpolation() {
        let tree = DotEnvParser.parse("REF=$HOME/data\n").unwrap();
        assert_eq!(
            tree.as_table().unwrap().get("REF"),
            Some(&ConfigValue::from("$HOME/data"))
        );
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let tree = DotEnvParser.parse("KEY=a\nKEY=b\n").unwrap();
        assert_eq!(
            tree.as_table().unwrap().get("KEY"),
            Some(&ConfigValue::from("b"))
        );
    }

    #[test]
    fn test_format_tag() {
        assert_eq!(DotEnvParser.format(), FileFormat::DotEnv);
    }
}
