// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing one parser implementation per file format.
//!
//! Each adapter implements the `FormatParser` trait from the ports layer and
//! converts its format's native value model into the uniform `ConfigValue`
//! tree at the boundary.

pub mod env_file;
pub mod ini_file;
pub mod json_file;
pub mod properties_file;
pub mod toml_file;
pub mod xml_file;
pub mod yaml_file;

// Re-export the parser types
pub use env_file::DotEnvParser;
pub use ini_file::IniParser;
pub use json_file::JsonParser;
pub use properties_file::PropertiesParser;
pub use toml_file::TomlParser;
pub use xml_file::XmlParser;
pub use yaml_file::YamlParser;
