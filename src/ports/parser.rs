// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `FormatParser` trait: the interface every format
//! adapter implements to turn raw file content into a [`ConfigValue`] tree.

use crate::domain::{ConfigValue, FileFormat, SyntaxError};

/// A parser for one configuration file format.
///
/// Implementations are pure: they receive the file content as a string and
/// either produce a value tree or fail with a [`SyntaxError`]. Reading the
/// file, attaching the path to errors, and logging all happen in the loader,
/// so parsers stay trivially testable.
///
/// # Examples
///
/// ```
/// use omnicfg::domain::{ConfigTree, ConfigValue, FileFormat, SyntaxError};
/// use omnicfg::ports::FormatParser;
///
/// struct KeyEqualsValue;
///
/// impl FormatParser for KeyEqualsValue {
///     fn format(&self) -> FileFormat {
///         FileFormat::Properties
///     }
///
///     fn parse(&self, content: &str) -> Result<ConfigValue, SyntaxError> {
///         let mut tree = ConfigTree::new();
///         for line in content.lines() {
///             if let Some((key, value)) = line.split_once('=') {
///                 tree.insert(key.to_string(), ConfigValue::from(value));
///             }
///         }
///         Ok(ConfigValue::Table(tree))
///     }
/// }
///
/// let parser = KeyEqualsValue;
/// let tree = parser.parse("host=localhost").unwrap();
/// assert_eq!(
///     tree.as_table().unwrap().get("host"),
///     Some(&ConfigValue::from("localhost"))
/// );
/// ```
pub trait FormatParser {
    /// The format this parser handles.
    fn format(&self) -> FileFormat;

    /// Parses raw file content into a configuration value tree.
    ///
    /// The top-level value is usually a [`ConfigValue::Table`], but formats
    /// whose documents can be any value (JSON, YAML, a childless XML root)
    /// may return other variants; dotted lookup then only resolves the empty
    /// key against them.
    fn parse(&self, content: &str) -> Result<ConfigValue, SyntaxError>;
}
