// SPDX-License-Identifier: MIT OR Apache-2.0

//! The uniform configuration value tree.
//!
//! Every format parser produces a [`ConfigValue`], regardless of which format
//! the file was written in. Nested structures become [`ConfigValue::Table`],
//! sequences become [`ConfigValue::Array`], and scalars keep the closest
//! native type the source format offers (INI, properties, and `.env` values
//! are always strings because those formats carry no type information).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A nested mapping from string keys to configuration values.
///
/// `BTreeMap` keeps iteration order deterministic, which matters for
/// reproducible logging output and stable test assertions.
pub type ConfigTree = BTreeMap<String, ConfigValue>;

/// A configuration value produced by any of the format parsers.
///
/// # Examples
///
/// ```
/// use omnicfg::domain::{ConfigTree, ConfigValue};
///
/// let mut tree = ConfigTree::new();
/// tree.insert("port".to_string(), ConfigValue::Integer(5432));
/// let value = ConfigValue::Table(tree);
///
/// assert!(value.as_table().is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// An explicit null (YAML `null`, JSON `null`, empty XML element, bare
    /// `.env` key).
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// An integer scalar.
    Integer(i64),
    /// A floating-point scalar.
    Float(f64),
    /// A string scalar.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<ConfigValue>),
    /// A nested mapping.
    Table(ConfigTree),
}

impl ConfigValue {
    /// Returns `true` if this value is [`ConfigValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Returns the boolean if this value is a [`ConfigValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this value is a [`ConfigValue::Integer`].
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float if this value is a [`ConfigValue::Float`], widening
    /// integers on the way.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            ConfigValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Returns the string slice if this value is a [`ConfigValue::String`].
    ///
    /// # Examples
    ///
    /// ```
    /// use omnicfg::domain::ConfigValue;
    ///
    /// let value = ConfigValue::from("localhost");
    /// assert_eq!(value.as_str(), Some("localhost"));
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the sequence if this value is a [`ConfigValue::Array`].
    pub fn as_array(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested mapping if this value is a [`ConfigValue::Table`].
    pub fn as_table(&self) -> Option<&ConfigTree> {
        match self {
            ConfigValue::Table(table) => Some(table),
            _ => None,
        }
    }

    /// A short name for the variant, used in error and log messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::Array(_) => "array",
            ConfigValue::Table(_) => "table",
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Integer(n)
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(items: Vec<ConfigValue>) -> Self {
        ConfigValue::Array(items)
    }
}

impl From<ConfigTree> for ConfigValue {
    fn from(table: ConfigTree) -> Self {
        ConfigValue::Table(table)
    }
}
