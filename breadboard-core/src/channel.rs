//! Channel and port identifiers

use breadboard_hal::{MAX_PORT, MIN_PORT, PIN_COUNT};

/// Number of user-facing channels
pub const CHANNEL_COUNT: usize = PIN_COUNT;

/// One of the nine user-facing pin roles on a hexpansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Low-speed eGPIO 1 (connector pin 2)
    Ls1,
    /// Low-speed eGPIO 2 (connector pin 3)
    Ls2,
    /// Low-speed eGPIO 3 (connector pin 7)
    Ls3,
    /// Low-speed eGPIO 4 (connector pin 8)
    Ls4,
    /// Low-speed eGPIO 5 (connector pin 9)
    Ls5,
    /// High-speed GPIO 1 (connector pin 12)
    Hs1,
    /// High-speed GPIO 2 (connector pin 13)
    Hs2,
    /// High-speed GPIO 3 (connector pin 18)
    Hs3,
    /// High-speed GPIO 4 (connector pin 19)
    Hs4,
}

impl Channel {
    /// All channels in display (and connector binding) order
    pub const ALL: [Channel; CHANNEL_COUNT] = [
        Channel::Ls1,
        Channel::Ls2,
        Channel::Ls3,
        Channel::Ls4,
        Channel::Ls5,
        Channel::Hs1,
        Channel::Hs2,
        Channel::Hs3,
        Channel::Hs4,
    ];

    /// Position in [`Channel::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Channel::Ls1 => 0,
            Channel::Ls2 => 1,
            Channel::Ls3 => 2,
            Channel::Ls4 => 3,
            Channel::Ls5 => 4,
            Channel::Hs1 => 5,
            Channel::Hs2 => 6,
            Channel::Hs3 => 7,
            Channel::Hs4 => 8,
        }
    }

    /// Inverse of [`Channel::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Menu label, "<connector pin> <kind> (<id>)"
    pub const fn label(self) -> &'static str {
        match self {
            Channel::Ls1 => "2 eGPIO (LS_1)",
            Channel::Ls2 => "3 eGPIO (LS_2)",
            Channel::Ls3 => "7 eGPIO (LS_3)",
            Channel::Ls4 => "8 eGPIO (LS_4)",
            Channel::Ls5 => "9 eGPIO (LS_5)",
            Channel::Hs1 => "12 GPIO (HS_1)",
            Channel::Hs2 => "13 GPIO (HS_2)",
            Channel::Hs3 => "18 GPIO (HS_3)",
            Channel::Hs4 => "19 GPIO (HS_4)",
        }
    }

    /// Short identifier used in logs
    pub const fn id(self) -> &'static str {
        match self {
            Channel::Ls1 => "ls_1",
            Channel::Ls2 => "ls_2",
            Channel::Ls3 => "ls_3",
            Channel::Ls4 => "ls_4",
            Channel::Ls5 => "ls_5",
            Channel::Hs1 => "hs_1",
            Channel::Hs2 => "hs_2",
            Channel::Hs3 => "hs_3",
            Channel::Hs4 => "hs_4",
        }
    }
}

/// Hexpansion port (slot) number, always within 1..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Port(u8);

impl Port {
    /// Validate a raw port number
    pub const fn new(raw: u8) -> Option<Self> {
        if raw >= MIN_PORT && raw <= MAX_PORT {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Raw port number
    pub const fn get(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for (i, channel) in Channel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), i);
            assert_eq!(Channel::from_index(i), Some(*channel));
        }
        assert_eq!(Channel::from_index(CHANNEL_COUNT), None);
    }

    #[test]
    fn test_ids_follow_labels() {
        assert_eq!(Channel::Ls1.id(), "ls_1");
        assert_eq!(Channel::Hs4.id(), "hs_4");
        assert!(Channel::Hs4.label().ends_with("(HS_4)"));
    }

    #[test]
    fn test_port_range() {
        assert!(Port::new(0).is_none());
        assert_eq!(Port::new(1).map(Port::get), Some(1));
        assert_eq!(Port::new(6).map(Port::get), Some(6));
        assert!(Port::new(7).is_none());
    }
}
