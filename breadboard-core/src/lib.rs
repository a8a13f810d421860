//! Board-agnostic core logic for the Breadboard badge app
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Channel and port identifiers
//! - Module presence and inbound events
//! - Pin-state controller (bindings, snapshot, toggle)
//! - Value formatting
//! - Menu navigation and transient notices
//! - The application object tying them together
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod app;
pub mod channel;
pub mod config;
pub mod controller;
pub mod format;
pub mod state;
pub mod ui;

pub use app::{BreadboardApp, Response, Toggled};
pub use channel::{Channel, Port};
pub use controller::{InsertError, PinController, Snapshot, ToggleError};
