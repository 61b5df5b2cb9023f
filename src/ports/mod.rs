// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) implemented by the
//! format adapters in the adapters layer.

pub mod parser;

// Re-export commonly used types
pub use parser::FormatParser;
