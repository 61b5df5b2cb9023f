// SPDX-License-Identifier: MIT OR Apache-2.0

//! Applying a logging configuration tree to the global `tracing` subscriber.
//!
//! A logging tree is an ordinary [`ConfigValue::Table`]. Two keys are
//! interpreted:
//!
//! - `level`: the root filter directive (e.g. `"debug"`, `"warn"`);
//! - `loggers`: a table of `target -> level` pairs, each becoming a
//!   `target=level` directive.
//!
//! The first application installs a subscriber (a registry with a reloadable
//! [`EnvFilter`] and a fmt layer) as the process-wide default; every
//! application then swaps the assembled filter in through the retained reload
//! handle, so logging can be reconfigured at runtime without touching the
//! subscriber stack.

use crate::domain::{ConfigError, ConfigValue, Result};
use once_cell::sync::OnceCell;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, EnvFilter, Registry};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

static FILTER_HANDLE: OnceCell<FilterHandle> = OnceCell::new();

/// Applies a logging configuration tree to the global subscriber.
///
/// Fails with [`ConfigError::Logging`] when the tree is not a table, a level
/// is not a string, the assembled directives do not form a valid filter, or
/// another subscriber already owns the global default on first application.
pub fn apply(tree: &ConfigValue) -> Result<()> {
    let filter = build_filter(tree)?;
    // get_or_try_init serializes installation: concurrent first callers
    // either install or block until the winner's handle is published, so
    // none of them fails just for losing the race.
    let handle = FILTER_HANDLE.get_or_try_init(install_subscriber)?;
    handle.reload(filter).map_err(|e| ConfigError::Logging {
        message: format!("could not swap logging filter: {}", e),
    })?;
    tracing::debug!("logging configuration applied");
    Ok(())
}

/// Installs the registry with a reloadable filter and a fmt layer as the
/// global default. The filter starts at `info` and is immediately replaced
/// by the caller's directives.
fn install_subscriber() -> Result<FilterHandle> {
    let (filter_layer, handle) = reload::Layer::new(EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| ConfigError::Logging {
            message: format!("could not install global subscriber: {}", e),
        })?;
    Ok(handle)
}

/// Assembles `EnvFilter` directives from a logging tree.
fn build_filter(tree: &ConfigValue) -> Result<EnvFilter> {
    let table = tree.as_table().ok_or_else(|| ConfigError::Logging {
        message: format!("expected a table, got {}", tree.type_name()),
    })?;

    let mut directives = Vec::new();
    if let Some(level) = table.get("level") {
        directives.push(level_str(level, "level")?.to_string());
    }
    if let Some(loggers) = table.get("loggers") {
        let loggers = loggers.as_table().ok_or_else(|| ConfigError::Logging {
            message: format!("'loggers' must be a table, got {}", loggers.type_name()),
        })?;
        for (target, level) in loggers {
            directives.push(format!("{}={}", target, level_str(level, target)?));
        }
    }
    if directives.is_empty() {
        directives.push("info".to_string());
    }

    EnvFilter::try_new(directives.join(",")).map_err(|e| ConfigError::Logging {
        message: format!("invalid filter directives: {}", e),
    })
}

fn level_str<'a>(value: &'a ConfigValue, key: &str) -> Result<&'a str> {
    value.as_str().ok_or_else(|| ConfigError::Logging {
        message: format!("'{}' must be a string level, got {}", key, value.type_name()),
    })
}
