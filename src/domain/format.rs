// SPDX-License-Identifier: MIT OR Apache-2.0

//! Supported configuration file formats and extension dispatch.
//!
//! [`FileFormat`] is the closed set of formats the loader understands. The
//! loader matches on it exhaustively, so adding a format is a
//! compile-time-checked change rather than a string comparison buried in a
//! dispatch function.

use crate::domain::errors::{ConfigError, Result};
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

/// The configuration file formats the loader can parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// TOML (`.toml`).
    Toml,
    /// JSON (`.json`).
    Json,
    /// YAML (`.yaml` / `.yml`), loaded without tag execution.
    Yaml,
    /// INI (`.ini`), section-based, string values only.
    Ini,
    /// XML (`.xml`), converted element-by-element into a tree.
    Xml,
    /// Java-style properties (`.properties`), line-based key/value pairs.
    Properties,
    /// Dotenv (`.env` extension or a literal `.env` file name).
    DotEnv,
}

impl FileFormat {
    /// Infers the format from a file path's extension.
    ///
    /// The match is case-sensitive: `config.TOML` is rejected. A file named
    /// exactly `.env` has no extension in path terms but is still dotenv. The
    /// reserved `.config` extension is rejected with
    /// [`ConfigError::AmbiguousExtension`], telling the caller to supply an
    /// explicit format instead; every other unknown extension gets
    /// [`ConfigError::UnsupportedExtension`].
    ///
    /// # Examples
    ///
    /// ```
    /// use omnicfg::domain::FileFormat;
    /// use std::path::Path;
    ///
    /// let format = FileFormat::from_path(Path::new("app/config.toml")).unwrap();
    /// assert_eq!(format, FileFormat::Toml);
    ///
    /// assert!(FileFormat::from_path(Path::new("config.txt")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self> {
        if path.file_name().and_then(OsStr::to_str) == Some(".env") {
            return Ok(FileFormat::DotEnv);
        }
        match path.extension().and_then(OsStr::to_str) {
            Some("toml") => Ok(FileFormat::Toml),
            Some("json") => Ok(FileFormat::Json),
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("ini") => Ok(FileFormat::Ini),
            Some("xml") => Ok(FileFormat::Xml),
            Some("properties") => Ok(FileFormat::Properties),
            Some("env") => Ok(FileFormat::DotEnv),
            Some("config") => Err(ConfigError::AmbiguousExtension {
                path: path.to_path_buf(),
            }),
            _ => Err(ConfigError::UnsupportedExtension {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileFormat::Toml => "TOML",
            FileFormat::Json => "JSON",
            FileFormat::Yaml => "YAML",
            FileFormat::Ini => "INI",
            FileFormat::Xml => "XML",
            FileFormat::Properties => "properties",
            FileFormat::DotEnv => "dotenv",
        };
        write!(f, "{}", name)
    }
}
