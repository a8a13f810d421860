//! Configuration types
//!
//! Board-agnostic configuration structures, filled from `badge.toml`.

pub mod types;

pub use types::*;
