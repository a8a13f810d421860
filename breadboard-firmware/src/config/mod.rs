//! Configuration loading and parsing
//!
//! Settings come from the embedded badge.toml, parsed by a small no_std
//! parser. Anything unparseable falls back to defaults.

pub mod toml;

pub use toml::{parse_config, ParseError};
