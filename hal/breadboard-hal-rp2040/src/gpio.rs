//! Hexpansion GPIO
//!
//! Hexpansion pins start as floating inputs and are switched to push-pull
//! outputs when a module is bound. `Flex` lets one pin do both.

use breadboard_hal::{ExpansionPin, PinError};
use embassy_rp::gpio::{Flex, Level, Pull};

/// One hexpansion signal pin
pub struct HexpansionPin {
    pin: Flex<'static>,
}

impl HexpansionPin {
    /// Wrap a pin, leaving it as a floating input
    pub fn new(mut pin: Flex<'static>) -> Self {
        pin.set_as_input();
        pin.set_pull(Pull::None);
        Self { pin }
    }

    /// Return the pin to a floating input
    pub fn release(&mut self) {
        self.pin.set_as_input();
    }
}

impl ExpansionPin for HexpansionPin {
    fn configure_as_output(&mut self) -> Result<(), PinError> {
        // Keep the current pad level so binding does not glitch the module
        let level = if self.pin.is_high() {
            Level::High
        } else {
            Level::Low
        };
        self.pin.set_level(level);
        self.pin.set_as_output();
        Ok(())
    }

    fn read_level(&mut self) -> bool {
        self.pin.is_high()
    }

    fn write_level(&mut self, high: bool) {
        self.pin.set_level(Level::from(high));
    }
}
