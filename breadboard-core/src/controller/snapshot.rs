//! Last-observed pin levels as shown in the menu

use crate::channel::{Channel, Port, CHANNEL_COUNT};

/// Cached channel levels plus the identity of the bound module
///
/// Only the controller writes a snapshot, and only from physical pin reads
/// or when clearing on removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    identity: Option<Port>,
    levels: [bool; CHANNEL_COUNT],
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl Snapshot {
    /// Snapshot with no module and every channel low
    pub const fn new() -> Self {
        Self {
            identity: None,
            levels: [false; CHANNEL_COUNT],
        }
    }

    /// Port of the module the values were read from
    pub fn identity(&self) -> Option<Port> {
        self.identity
    }

    /// Last observed level of a channel (false while detached)
    pub fn level(&self, channel: Channel) -> bool {
        self.levels[channel.index()]
    }

    /// Iterate over (channel, level) in display order
    pub fn iter(&self) -> impl Iterator<Item = (Channel, bool)> + '_ {
        Channel::ALL
            .into_iter()
            .map(move |channel| (channel, self.level(channel)))
    }

    pub(crate) fn set_identity(&mut self, identity: Option<Port>) {
        self.identity = identity;
    }

    pub(crate) fn set_level(&mut self, channel: Channel, high: bool) {
        self.levels[channel.index()] = high;
    }

    /// Forget the module and zero every channel
    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }
}
