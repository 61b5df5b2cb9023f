// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration test for the process-wide configuration.
//!
//! The global can only be initialized once per process, so the whole
//! scenario lives in one test function; this file is its own test binary
//! and therefore its own process.

use omnicfg::domain::{ConfigError, ConfigValue};
use omnicfg::service::Config;
use std::io::Write;
use tempfile::NamedTempFile;

fn fixture(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_global_initialization_is_first_wins() {
    assert!(Config::global().is_none());

    let first_file = fixture("source = \"first\"\n");
    let second_file = fixture("source = \"second\"\n");

    let first = Config::global_or_init(Config::builder().path(first_file.path())).unwrap();
    assert_eq!(first.get("source"), Some(ConfigValue::from("first")));

    // Second initialization with a different path returns the same
    // instance; the builder's parameters are dropped unused. This pins the
    // first-wins freeze semantics.
    let second = Config::global_or_init(Config::builder().path(second_file.path())).unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.get("source"), Some(ConfigValue::from("first")));

    // The explicit variant makes re-initialization an error instead.
    let result = Config::try_init_global(Config::builder().path(second_file.path()));
    assert!(matches!(result, Err(ConfigError::AlreadyInitialized)));

    // The accessor now observes the initialized instance.
    let global = Config::global().unwrap();
    assert_eq!(global.get("source"), Some(ConfigValue::from("first")));
}
