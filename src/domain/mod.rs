// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and the lookup algorithm.
//!
//! This module holds the value tree, key paths, the format tag, error types,
//! and dotted-path resolution. It is independent of file I/O and of any
//! particular parsing crate.

pub mod config_value;
pub mod errors;
pub mod format;
pub mod key_path;
pub mod lookup;

// Re-export commonly used types
pub use config_value::{ConfigTree, ConfigValue};
pub use errors::{ConfigError, Result, SyntaxError};
pub use format::FileFormat;
pub use key_path::KeyPath;
