// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer orchestrating the dispatcher, parsers, and lookup engine.
//!
//! This module contains the loader (format dispatch + file reading), the
//! logging application layer, and the `Config` facade callers interact with.

pub mod facade;
pub mod loader;
pub mod logging;

// Re-export commonly used types
pub use facade::{Config, ConfigBuilder, LoggingSource};
