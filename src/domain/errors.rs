// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Every failure surfaces as a [`ConfigError`] variant so callers handle one
//! error type regardless of which format was being parsed. Parsers report
//! format-specific failures as [`SyntaxError`]; the loader wraps them with
//! the file path and format tag before they reach callers.

use crate::domain::format::FileFormat;
use std::path::PathBuf;
use thiserror::Error;

/// A format-specific parse failure, produced inside a parser adapter.
///
/// Carries a human-readable message and, when the underlying parsing crate
/// provides one, the original error as the source.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SyntaxError {
    /// Description of what went wrong.
    pub message: String,
    /// The underlying parser error, if any.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SyntaxError {
    /// Creates a `SyntaxError` wrapping an underlying parser error.
    pub fn new<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SyntaxError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a `SyntaxError` from a message alone.
    pub fn message(message: impl Into<String>) -> Self {
        SyntaxError {
            message: message.into(),
            source: None,
        }
    }
}

/// The main error type for configuration operations.
///
/// Marked `#[non_exhaustive]` to allow new variants without breaking callers.
///
/// Lookup misses are deliberately absent: a key that resolves to nothing is
/// handled by default substitution, never by an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read (missing, permissions, encoding).
    #[error("failed to read configuration file '{}'", path.display())]
    Io {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its content is malformed for the detected format.
    #[error("failed to parse {format} configuration file '{}'", path.display())]
    Parse {
        /// The format the file was parsed as.
        format: FileFormat,
        /// The path of the malformed file.
        path: PathBuf,
        /// The format-specific cause.
        #[source]
        source: SyntaxError,
    },

    /// The file extension is not in the supported set.
    #[error(
        "unsupported configuration file extension for '{}'; expected one of \
         .toml, .json, .yaml, .yml, .ini, .xml, .properties, or .env",
        path.display()
    )]
    UnsupportedExtension {
        /// The path with the unrecognized extension.
        path: PathBuf,
    },

    /// The reserved `.config` extension was used without an explicit format.
    #[error(
        "'.config' extension is format-ambiguous for '{}'; pass an explicit \
         FileFormat to parse it as",
        path.display()
    )]
    AmbiguousExtension {
        /// The `.config` path that needs an override.
        path: PathBuf,
    },

    /// The process-wide configuration was initialized twice.
    #[error("global configuration is already initialized")]
    AlreadyInitialized,

    /// The logging configuration tree could not be applied.
    #[error("invalid logging configuration: {message}")]
    Logging {
        /// What made the logging tree unusable.
        message: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_carries_path() {
        let error = ConfigError::Io {
            path: PathBuf::from("/etc/app/config.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(error.to_string().contains("/etc/app/config.toml"));
    }

    #[test]
    fn test_parse_error_names_format_and_path() {
        let error = ConfigError::Parse {
            format: FileFormat::Json,
            path: PathBuf::from("settings.json"),
            source: SyntaxError::message("unexpected end of input"),
        };
        let rendered = error.to_string();
        assert!(rendered.contains("JSON"));
        assert!(rendered.contains("settings.json"));
    }

    #[test]
    fn test_parse_error_exposes_cause() {
        use std::error::Error;

        let error = ConfigError::Parse {
            format: FileFormat::Yaml,
            path: PathBuf::from("app.yaml"),
            source: SyntaxError::message("bad indent"),
        };
        let cause = error.source().unwrap();
        assert_eq!(cause.to_string(), "bad indent");
    }

    #[test]
    fn test_unsupported_extension_enumerates_supported_set() {
        let error = ConfigError::UnsupportedExtension {
            path: PathBuf::from("config.txt"),
        };
        let rendered = error.to_string();
        for ext in [".toml", ".json", ".yaml", ".yml", ".ini", ".xml", ".properties", ".env"] {
            assert!(rendered.contains(ext), "missing {} in: {}", ext, rendered);
        }
    }

    #[test]
    fn test_ambiguous_extension_is_distinct() {
        let error = ConfigError::AmbiguousExtension {
            path: PathBuf::from("app.config"),
        };
        assert!(error.to_string().contains("ambiguous"));
    }

    #[test]
    fn test_syntax_error_wraps_source() {
        use std::error::Error;

        let inner = std::io::Error::new(std::io::ErrorKind::InvalidData, "broken");
        let error = SyntaxError::new("could not decode", inner);
        assert_eq!(error.to_string(), "could not decode");
        assert!(error.source().is_some());
    }
}
