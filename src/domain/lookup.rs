// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted-path resolution against a configuration tree.

use crate::domain::config_value::ConfigValue;
use crate::domain::key_path::KeyPath;

/// Walks `tree` segment by segment and returns the value at `path`.
///
/// Returns `None` as soon as a segment is absent, or when a segment remains
/// but the current value is not a table (a scalar mid-path is a miss, not a
/// panic). An empty path resolves to the whole tree.
///
/// The tree is never mutated; the return value borrows from it. Callers that
/// hand values out (see `Config::get`) clone at that boundary so the stored
/// tree stays read-only.
///
/// # Examples
///
/// ```
/// use omnicfg::domain::{lookup, ConfigTree, ConfigValue, KeyPath};
///
/// let mut inner = ConfigTree::new();
/// inner.insert("b".to_string(), ConfigValue::Integer(5));
/// let mut outer = ConfigTree::new();
/// outer.insert("a".to_string(), ConfigValue::Table(inner));
/// let tree = ConfigValue::Table(outer);
///
/// let value = lookup::resolve(&tree, &KeyPath::from("a.b"));
/// assert_eq!(value, Some(&ConfigValue::Integer(5)));
/// assert_eq!(lookup::resolve(&tree, &KeyPath::from("a.c")), None);
/// ```
pub fn resolve<'a>(tree: &'a ConfigValue, path: &KeyPath) -> Option<&'a ConfigValue> {
    let mut current = tree;
    for segment in path.segments() {
        let table = match current {
            ConfigValue::Table(table) => table,
            other => {
                tracing::trace!(
                    key = %path,
                    segment,
                    found = other.type_name(),
                    "lookup hit a non-table value mid-path"
                );
                return None;
            }
        };
        current = match table.get(segment) {
            Some(value) => value,
            None => {
                tracing::trace!(key = %path, segment, "lookup segment not found");
                return None;
            }
        };
    }
    tracing::trace!(key = %path, value = ?current, "lookup resolved");
    Some(current)
}
