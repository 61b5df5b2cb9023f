// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture configuration loading crate.
//!
//! This crate reads a configuration file in any of seven formats (TOML,
//! JSON, YAML, INI, XML, Java-style properties, `.env`), normalizes it into
//! a uniform nested value tree, and exposes dotted-path lookup with default
//! fallback. An optional secondary file configures the global `tracing`
//! subscriber the same way.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: core types and the lookup algorithm (`ConfigValue`,
//!   `KeyPath`, `FileFormat`, errors)
//! - **Ports**: the `FormatParser` trait each format implements
//! - **Adapters**: one parser per supported format
//! - **Service**: the loader (format dispatch), logging application, and the
//!   `Config` facade
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use omnicfg::prelude::*;
//!
//! # fn main() -> omnicfg::domain::Result<()> {
//! let config = Config::builder().path("config.yaml").build()?;
//! let host = config.get_or("database.host", "localhost");
//! let port = config.get("database.port");
//! # Ok(())
//! # }
//! ```
//!
//! # Format dispatch
//!
//! The parser is chosen by file extension, or by an explicit
//! [`FileFormat`](domain::FileFormat) override which always wins. The
//! reserved `.config` extension is rejected unless an override is supplied.
//!
//! # Lookup semantics
//!
//! A key like `"a.b.c"` walks the tree one table at a time. A missing
//! segment, or a scalar encountered mid-path, resolves to the caller's
//! default rather than an error. The empty key returns the whole tree.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for
/// convenient access.
pub mod prelude {
    pub use crate::adapters::{
        DotEnvParser, IniParser, JsonParser, PropertiesParser, TomlParser, XmlParser, YamlParser,
    };
    pub use crate::domain::{
        ConfigError, ConfigTree, ConfigValue, FileFormat, KeyPath, Result, SyntaxError,
    };
    pub use crate::ports::FormatParser;
    pub use crate::service::{Config, ConfigBuilder, LoggingSource};
}
