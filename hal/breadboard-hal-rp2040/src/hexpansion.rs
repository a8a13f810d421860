//! Hexpansion pin provider
//!
//! The board wires a single hexpansion port to RP2040 GPIOs. The nine pins
//! are held here while no module is bound and lent to the controller on
//! claim.

use breadboard_hal::{HexpansionPins, PinError, PinGroups, MAX_PORT, MIN_PORT};

use crate::gpio::HexpansionPin;

/// Provider for the wired port
pub struct Rp2040Hexpansion {
    port: u8,
    pins: Option<PinGroups<HexpansionPin>>,
}

impl Rp2040Hexpansion {
    /// Create a provider for `port` from its pins
    ///
    /// Returns `None` if `port` is outside the badge's port range.
    pub fn new(port: u8, pins: PinGroups<HexpansionPin>) -> Option<Self> {
        if !(MIN_PORT..=MAX_PORT).contains(&port) {
            return None;
        }
        Some(Self {
            port,
            pins: Some(pins),
        })
    }
}

impl HexpansionPins for Rp2040Hexpansion {
    type Pin = HexpansionPin;

    fn claim(&mut self, port: u8) -> Result<PinGroups<HexpansionPin>, PinError> {
        if port != self.port {
            return Err(PinError::PortUnavailable(port));
        }
        self.pins.take().ok_or(PinError::AlreadyClaimed)
    }

    fn release(&mut self, pins: PinGroups<HexpansionPin>) {
        let mut pins = pins.into_array();
        for pin in pins.iter_mut() {
            pin.release();
        }
        self.pins = Some(PinGroups::from_array(pins));
    }
}
