//! Hexpansion pin abstractions
//!
//! A hexpansion connector exposes two groups of digital pins: five
//! low-speed pins routed through the badge's I/O expander (eGPIO) and four
//! high-speed pins wired straight to the MCU (GPIO).

/// Number of low-speed (eGPIO) pins per hexpansion port
pub const LS_PIN_COUNT: usize = 5;

/// Number of high-speed (GPIO) pins per hexpansion port
pub const HS_PIN_COUNT: usize = 4;

/// Total number of user pins per hexpansion port
pub const PIN_COUNT: usize = LS_PIN_COUNT + HS_PIN_COUNT;

/// Lowest valid hexpansion port number
pub const MIN_PORT: u8 = 1;

/// Highest valid hexpansion port number
pub const MAX_PORT: u8 = 6;

/// Errors raised by the pin layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// The board has no pins wired for this port
    PortUnavailable(u8),
    /// The port's pins are already handed out
    AlreadyClaimed,
    /// The pin refused to switch to output mode
    ConfigureFailed,
}

/// One digital pin on a hexpansion connector
///
/// Reads return the level currently seen on the pin, which for a pin driven
/// as output is the level last written.
pub trait ExpansionPin {
    /// Switch the pin to push-pull digital output
    fn configure_as_output(&mut self) -> Result<(), PinError>;

    /// Read the current digital level (true = high)
    fn read_level(&mut self) -> bool;

    /// Drive the pin to the given level
    fn write_level(&mut self, high: bool);

    /// Invert the current level, returning the level written
    fn toggle(&mut self) -> bool {
        let next = !self.read_level();
        self.write_level(next);
        next
    }
}

/// The pins of one hexpansion port, split by speed class
pub struct PinGroups<P> {
    /// Low-speed (eGPIO) pins, LS_1..LS_5
    pub ls: [P; LS_PIN_COUNT],
    /// High-speed (GPIO) pins, HS_1..HS_4
    pub hs: [P; HS_PIN_COUNT],
}

impl<P> PinGroups<P> {
    /// Flatten into connector order: LS_1..LS_5 then HS_1..HS_4
    pub fn into_array(self) -> [P; PIN_COUNT] {
        let [ls1, ls2, ls3, ls4, ls5] = self.ls;
        let [hs1, hs2, hs3, hs4] = self.hs;
        [ls1, ls2, ls3, ls4, ls5, hs1, hs2, hs3, hs4]
    }

    /// Inverse of [`PinGroups::into_array`]
    pub fn from_array(pins: [P; PIN_COUNT]) -> Self {
        let [ls1, ls2, ls3, ls4, ls5, hs1, hs2, hs3, hs4] = pins;
        Self {
            ls: [ls1, ls2, ls3, ls4, ls5],
            hs: [hs1, hs2, hs3, hs4],
        }
    }
}

/// Source of hexpansion pins, keyed by port
///
/// Pins are lent out as a whole group on insertion and handed back on
/// removal, so a port is never bound by more than one owner.
pub trait HexpansionPins {
    /// Concrete pin handle type
    type Pin: ExpansionPin;

    /// Take the pin groups for a port
    fn claim(&mut self, port: u8) -> Result<PinGroups<Self::Pin>, PinError>;

    /// Return previously claimed pins
    fn release(&mut self, pins: PinGroups<Self::Pin>);
}
