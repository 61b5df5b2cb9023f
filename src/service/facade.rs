// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration facade.
//!
//! [`Config`] ties the loader and the lookup engine together: it is built
//! from a primary configuration file (plus an optional logging configuration
//! applied at construction time) and answers dotted-key queries against the
//! loaded tree. It is an ordinary value intended to be constructed once at
//! process start and passed by reference; an optional process-wide global is
//! provided for programs that want the singleton style.

use crate::domain::{lookup, ConfigError, ConfigValue, FileFormat, KeyPath, Result};
use crate::service::{loader, logging};
use directories::ProjectDirs;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

static GLOBAL: OnceCell<Config> = OnceCell::new();

/// A loaded configuration with dotted-key lookup.
///
/// # Copy contract
///
/// [`Config::get`] and [`Config::get_or`] return owned clones of the stored
/// values, so callers may mutate what they receive without affecting the
/// tree. [`Config::tree`] borrows the tree read-only.
///
/// # Examples
///
/// ```no_run
/// use omnicfg::service::Config;
///
/// # fn main() -> omnicfg::domain::Result<()> {
/// let config = Config::builder().path("app/config.yaml").build()?;
/// let host = config.get_or("database.host", "localhost");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Config {
    tree: ConfigValue,
    logging_tree: RwLock<Option<ConfigValue>>,
}

impl Config {
    /// Starts building a `Config`. The primary path defaults to
    /// `config.toml`.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Loads a `Config` straight from a path, inferring the format from the
    /// extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().path(path).build()
    }

    /// Returns the whole configuration tree.
    pub fn tree(&self) -> &ConfigValue {
        &self.tree
    }

    /// Resolves a dotted key against the tree.
    ///
    /// Returns `None` when any segment is absent or a non-table value is hit
    /// mid-path. The empty key returns the entire tree. The returned value
    /// is a clone; see the type-level copy contract.
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        let path = KeyPath::from(key);
        let found = lookup::resolve(&self.tree, &path).cloned();
        tracing::debug!(key, found = found.is_some(), "configuration lookup");
        found
    }

    /// Resolves a dotted key, substituting `default` when the key does not
    /// resolve.
    ///
    /// Substitution is not an error; it is logged as a warning for
    /// observability.
    pub fn get_or(&self, key: &str, default: impl Into<ConfigValue>) -> ConfigValue {
        match self.get(key) {
            Some(value) => value,
            None => {
                let default = default.into();
                tracing::warn!(key, ?default, "no value found for key, using default");
                default
            }
        }
    }

    /// Loads or assigns a logging configuration and applies it immediately.
    ///
    /// Accepts either a path (re-parsed through the format dispatcher) or an
    /// already-built tree (applied directly, with no file I/O). The loaded
    /// tree replaces any previously stored logging configuration.
    pub fn load_logging_config(&self, source: impl Into<LoggingSource>) -> Result<()> {
        let tree = match source.into() {
            LoggingSource::Path(path) => {
                let tree = loader::load_tree(&path, None)?;
                tracing::debug!(path = %path.display(), "loaded logging configuration from file");
                tree
            }
            LoggingSource::Tree(tree) => {
                tracing::debug!("loaded logging configuration from tree");
                tree
            }
        };
        logging::apply(&tree)?;
        // A poisoned lock only means a writer panicked; the slot itself is
        // still a plain Option and must keep tracking the active filter.
        let mut slot = self
            .logging_tree
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(tree);
        Ok(())
    }

    /// Returns a clone of the currently stored logging configuration tree,
    /// if one has been loaded.
    pub fn logging_config(&self) -> Option<ConfigValue> {
        self.logging_tree
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the process-wide configuration, if one has been initialized.
    pub fn global() -> Option<&'static Config> {
        GLOBAL.get()
    }

    /// Returns the process-wide configuration, initializing it from
    /// `builder` if this is the first call.
    ///
    /// First initialization wins: on later calls the builder is dropped
    /// unused and the existing instance is returned, whatever parameters it
    /// was built with. Use [`Config::try_init_global`] to make a second
    /// initialization an error instead.
    pub fn global_or_init(builder: ConfigBuilder) -> Result<&'static Config> {
        GLOBAL.get_or_try_init(|| builder.build())
    }

    /// Initializes the process-wide configuration, failing with
    /// [`ConfigError::AlreadyInitialized`] if it already exists.
    pub fn try_init_global(builder: ConfigBuilder) -> Result<&'static Config> {
        let mut initialized = false;
        let config = GLOBAL.get_or_try_init(|| {
            initialized = true;
            builder.build()
        })?;
        if initialized {
            Ok(config)
        } else {
            Err(ConfigError::AlreadyInitialized)
        }
    }
}

/// Where a logging configuration comes from.
///
/// The closed set of input kinds replaces a runtime type check: anything
/// that is neither a path nor a tree is rejected at compile time.
pub enum LoggingSource {
    /// A file to parse through the format dispatcher.
    Path(PathBuf),
    /// An already-built configuration tree, applied without file I/O.
    Tree(ConfigValue),
}

impl From<PathBuf> for LoggingSource {
    fn from(path: PathBuf) -> Self {
        LoggingSource::Path(path)
    }
}

impl From<&Path> for LoggingSource {
    fn from(path: &Path) -> Self {
        LoggingSource::Path(path.to_path_buf())
    }
}

impl From<&str> for LoggingSource {
    fn from(path: &str) -> Self {
        LoggingSource::Path(PathBuf::from(path))
    }
}

impl From<ConfigValue> for LoggingSource {
    fn from(tree: ConfigValue) -> Self {
        LoggingSource::Tree(tree)
    }
}

/// Builder for [`Config`].
///
/// # Examples
///
/// ```no_run
/// use omnicfg::domain::FileFormat;
/// use omnicfg::service::Config;
///
/// # fn main() -> omnicfg::domain::Result<()> {
/// let config = Config::builder()
///     .path("settings.config")
///     .format(FileFormat::Toml)
///     .logging_path("logging.yaml")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ConfigBuilder {
    path: PathBuf,
    format: Option<FileFormat>,
    logging_path: Option<PathBuf>,
    logging_format: Option<FileFormat>,
}

impl ConfigBuilder {
    /// Creates a builder with the default primary path, `config.toml`.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from("config.toml"),
            format: None,
            logging_path: None,
            logging_format: None,
        }
    }

    /// Sets the primary configuration file path.
    pub fn path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }

    /// Forces the primary file to be parsed as `format`, overriding the
    /// extension. Required for the reserved `.config` extension.
    pub fn format(mut self, format: FileFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets a logging configuration file to load and apply at build time.
    pub fn logging_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.logging_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Forces the logging file to be parsed as `format`.
    pub fn logging_format(mut self, format: FileFormat) -> Self {
        self.logging_format = Some(format);
        self
    }

    /// Points the builder at `config.toml` inside the OS-appropriate
    /// configuration directory for the application.
    pub fn default_location(self, qualifier: &str, app_name: &str) -> Result<Self> {
        let dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::Io {
            path: PathBuf::from(app_name),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not determine a configuration directory for this platform",
            ),
        })?;
        Ok(self.path(dirs.config_dir().join("config.toml")))
    }

    /// Loads the primary configuration and, when a logging path was given,
    /// loads and applies the logging configuration as well.
    pub fn build(self) -> Result<Config> {
        let tree = loader::load_tree(&self.path, self.format)?;
        let logging_tree = match self.logging_path {
            Some(path) => {
                let tree = loader::load_tree(&path, self.logging_format)?;
                logging::apply(&tree)?;
                Some(tree)
            }
            None => None,
        };
        Ok(Config {
            tree,
            logging_tree: RwLock::new(logging_tree),
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
