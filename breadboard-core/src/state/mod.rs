//! Module presence and inbound events
//!
//! Presence is owned by the pin controller; `ModuleState` is its read-only view.

pub mod events;
pub mod machine;

pub use events::{Button, ButtonSet, Event};
pub use machine::ModuleState;
