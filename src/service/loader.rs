// SPDX-License-Identifier: MIT OR Apache-2.0

//! Format dispatch and file loading.
//!
//! This module owns the path from a file name to a parsed tree: resolve the
//! format (explicit override beats extension inference), read the file, run
//! the matching parser, and wrap any failure in a uniform [`ConfigError`]
//! that carries the path and format.

use crate::adapters::{
    DotEnvParser, IniParser, JsonParser, PropertiesParser, TomlParser, XmlParser, YamlParser,
};
use crate::domain::{ConfigError, ConfigTree, ConfigValue, FileFormat, Result};
use crate::ports::FormatParser;
use std::fs;
use std::path::Path;

/// Loads and parses a configuration file into a value tree.
///
/// When `format` is `Some`, it overrides whatever the path's extension
/// suggests; otherwise the format is inferred via [`FileFormat::from_path`].
/// A missing `.env` file yields an empty tree; a missing file of any other
/// format is an [`ConfigError::Io`] error. Parser failures are logged with
/// full context here, once, and surface as [`ConfigError::Parse`].
///
/// # Examples
///
/// ```no_run
/// use omnicfg::domain::FileFormat;
/// use omnicfg::service::loader;
/// use std::path::Path;
///
/// # fn main() -> omnicfg::domain::Result<()> {
/// let tree = loader::load_tree(Path::new("config.toml"), None)?;
/// let overridden = loader::load_tree(Path::new("app.config"), Some(FileFormat::Json))?;
/// # Ok(())
/// # }
/// ```
pub fn load_tree(path: &Path, format: Option<FileFormat>) -> Result<ConfigValue> {
    let format = match format {
        Some(format) => format,
        None => FileFormat::from_path(path)?,
    };
    tracing::debug!(%format, path = %path.display(), "loading configuration file");

    if format == FileFormat::DotEnv && !path.exists() {
        tracing::debug!(path = %path.display(), "dotenv file absent, using empty tree");
        return Ok(ConfigValue::Table(ConfigTree::new()));
    }

    let content = fs::read_to_string(path).map_err(|source| {
        tracing::error!(
            %format,
            path = %path.display(),
            error = %source,
            "could not read configuration file"
        );
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    parser_for(format).parse(&content).map_err(|source| {
        tracing::error!(
            %format,
            path = %path.display(),
            error = %source,
            "could not parse configuration file"
        );
        ConfigError::Parse {
            format,
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Selects the parser for a format.
///
/// The match is exhaustive over [`FileFormat`], so a new format variant will
/// not compile until it is wired to a parser.
fn parser_for(format: FileFormat) -> &'static dyn FormatParser {
    match format {
        FileFormat::Toml => &TomlParser,
        FileFormat::Json => &JsonParser,
        FileFormat::Yaml => &YamlParser,
        FileFormat::Ini => &IniParser,
        FileFormat::Xml => &XmlParser,
        FileFormat::Properties => &PropertiesParser,
        FileFormat::DotEnv => &DotEnvParser,
    }
}
