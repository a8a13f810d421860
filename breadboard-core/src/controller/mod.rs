//! Pin-state controller
//!
//! Keeps the nine channel bindings in step with hexpansion presence and
//! serves reads and toggles consistently with that presence.

pub mod pin_controller;
pub mod snapshot;

pub use pin_controller::{InsertError, PinController, ToggleError};
pub use snapshot::Snapshot;
