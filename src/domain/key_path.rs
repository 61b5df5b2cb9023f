// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted lookup keys.
//!
//! A [`KeyPath`] is the parsed form of a lookup key like `"database.host"`:
//! an ordered list of segments obtained by splitting on `.`. It is built per
//! lookup call and never stored.

use std::fmt;

/// An ordered sequence of key segments for dotted-path lookup.
///
/// The empty key produces zero segments and denotes the whole tree. Segments
/// are matched verbatim against table keys; there is no escaping, so a key
/// containing a literal `.` cannot be addressed (consistent with the lookup
/// splitting rule).
///
/// # Examples
///
/// ```
/// use omnicfg::domain::KeyPath;
///
/// let path = KeyPath::from("database.connection.host");
/// assert_eq!(path.segments().count(), 3);
///
/// let whole = KeyPath::from("");
/// assert!(whole.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Creates a `KeyPath` by splitting the key on `.`.
    pub fn new(key: &str) -> Self {
        if key.is_empty() {
            return KeyPath(Vec::new());
        }
        KeyPath(key.split('.').map(str::to_string).collect())
    }

    /// Iterates over the segments in lookup order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns `true` if the path has no segments (the whole-tree lookup).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&str> for KeyPath {
    fn from(key: &str) -> Self {
        KeyPath::new(key)
    }
}

impl From<String> for KeyPath {
    fn from(key: String) -> Self {
        KeyPath::new(&key)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment() {
        let path = KeyPath::from("key");
        assert_eq!(path.len(), 1);
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["key"]);
    }

    #[test]
    fn test_nested_segments() {
        let path = KeyPath::from("a.b.c");
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_key_is_whole_tree() {
        let path = KeyPath::from("");
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
    }

    #[test]
    fn test_consecutive_dots_keep_empty_segment() {
        // "a..b" addresses an empty-string key in the middle; it will simply
        // miss during lookup rather than being rejected here.
        let path = KeyPath::from("a..b");
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["a", "", "b"]);
    }

    #[test]
    fn test_display_roundtrip() {
        let path = KeyPath::from("database.host");
        assert_eq!(path.to_string(), "database.host");
    }

    #[test]
    fn test_from_string() {
        let path = KeyPath::from("x.y".to_string());
        assert_eq!(path.len(), 2);
    }
}
