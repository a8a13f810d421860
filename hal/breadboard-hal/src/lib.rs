//! Breadboard Hardware Abstraction Layer
//!
//! This crate defines the traits a board must implement to expose the
//! pins of an attached hexpansion to the application. The same application
//! code runs against real hardware (`breadboard-hal-rp2040`) and against
//! mock pins in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (breadboard-core, etc.)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  breadboard-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ breadboard-   │
//!             │  hal-rp2040   │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::ExpansionPin`] - One digital pin on the module connector
//! - [`gpio::HexpansionPins`] - Hands out the pin groups of a port

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::{
    ExpansionPin, HexpansionPins, PinError, PinGroups, HS_PIN_COUNT, LS_PIN_COUNT, MAX_PORT,
    MIN_PORT, PIN_COUNT,
};
