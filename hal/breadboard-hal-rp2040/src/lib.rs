//! RP2040-specific HAL for the Breadboard badge app
//!
//! Implements the `breadboard-hal` traits on top of `embassy-rp`:
//!
//! - `HexpansionPin`: a `Flex` GPIO usable as input or push-pull output
//! - `Rp2040Hexpansion`: pin provider for the one port wired to this board

#![no_std]

pub mod gpio;
pub mod hexpansion;

pub use gpio::HexpansionPin;
pub use hexpansion::Rp2040Hexpansion;
