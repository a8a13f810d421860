//! Channel bindings and pin synchronisation
//!
//! The controller owns the pin provider and, while a module is attached, all
//! nine pin handles. Bindings are created and destroyed as one group.

use core::mem;

use breadboard_hal::{ExpansionPin, HexpansionPins, PinError, PinGroups};

use super::snapshot::Snapshot;
use crate::channel::{Channel, Port, CHANNEL_COUNT};
use crate::state::ModuleState;

/// Reasons an insertion could not bind the module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InsertError {
    /// Port number outside 1..=6
    UnknownPort(u8),
    /// The board could not hand out the port's pins
    Claim(PinError),
    /// A pin refused output mode; nothing was bound
    Configure { channel: Channel, error: PinError },
}

/// Reasons a toggle was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToggleError {
    /// No hexpansion is attached
    NoModule,
}

/// Bindings held while a module is present
enum Attachment<P> {
    Detached,
    Attached {
        port: Port,
        pins: [P; CHANNEL_COUNT],
    },
}

/// Pin-state controller
///
/// Generic over the board's pin provider so the same logic runs on the
/// badge and against mock pins.
pub struct PinController<H: HexpansionPins> {
    provider: H,
    attachment: Attachment<H::Pin>,
    snapshot: Snapshot,
}

impl<H: HexpansionPins> PinController<H> {
    /// Create a detached controller
    pub fn new(provider: H) -> Self {
        Self {
            provider,
            attachment: Attachment::Detached,
            snapshot: Snapshot::new(),
        }
    }

    /// Current module presence
    pub fn state(&self) -> ModuleState {
        match &self.attachment {
            Attachment::Detached => ModuleState::Detached,
            Attachment::Attached { port, .. } => ModuleState::Attached(*port),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.state().is_attached()
    }

    /// Values as last read from the pins
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Bound pin handles in channel order, if attached
    pub fn bound_pins(&self) -> Option<&[H::Pin; CHANNEL_COUNT]> {
        match &self.attachment {
            Attachment::Detached => None,
            Attachment::Attached { pins, .. } => Some(pins),
        }
    }

    pub fn provider(&self) -> &H {
        &self.provider
    }

    /// Bind a freshly inserted module
    ///
    /// Any previous bindings are released first. On error the controller is
    /// left detached with no pins claimed, except for an unknown port which
    /// leaves the current state untouched.
    pub fn on_module_inserted(&mut self, port: u8) -> Result<Port, InsertError> {
        let port = Port::new(port).ok_or(InsertError::UnknownPort(port))?;

        self.release_bindings();

        let mut pins = self
            .provider
            .claim(port.get())
            .map_err(InsertError::Claim)?
            .into_array();

        let failed = Channel::ALL
            .into_iter()
            .zip(pins.iter_mut())
            .find_map(|(channel, pin)| {
                pin.configure_as_output()
                    .err()
                    .map(|error| (channel, error))
            });

        if let Some((channel, error)) = failed {
            self.provider.release(PinGroups::from_array(pins));
            return Err(InsertError::Configure { channel, error });
        }

        self.attachment = Attachment::Attached { port, pins };
        self.snapshot.set_identity(Some(port));
        self.refresh();
        Ok(port)
    }

    /// Drop all bindings after the module was unplugged
    ///
    /// Returns true if a module was bound. Safe to call when detached.
    pub fn on_module_removed(&mut self) -> bool {
        let was_attached = self.release_bindings();
        self.refresh();
        was_attached
    }

    /// Re-read every bound pin into the snapshot
    ///
    /// Does nothing while detached.
    pub fn refresh(&mut self) {
        if let Attachment::Attached { pins, .. } = &mut self.attachment {
            for (channel, pin) in Channel::ALL.into_iter().zip(pins.iter_mut()) {
                self.snapshot.set_level(channel, pin.read_level());
            }
        }
    }

    /// Invert a channel's physical level and resynchronise the snapshot
    ///
    /// Returns the level written.
    pub fn toggle(&mut self, channel: Channel) -> Result<bool, ToggleError> {
        let next = match &mut self.attachment {
            Attachment::Detached => return Err(ToggleError::NoModule),
            Attachment::Attached { pins, .. } => pins[channel.index()].toggle(),
        };
        self.refresh();
        Ok(next)
    }

    /// Read a channel's physical level without touching the snapshot
    pub fn read_level(&mut self, channel: Channel) -> Option<bool> {
        match &mut self.attachment {
            Attachment::Detached => None,
            Attachment::Attached { pins, .. } => Some(pins[channel.index()].read_level()),
        }
    }

    fn release_bindings(&mut self) -> bool {
        self.snapshot.clear();
        match mem::replace(&mut self.attachment, Attachment::Detached) {
            Attachment::Attached { pins, .. } => {
                self.provider.release(PinGroups::from_array(pins));
                true
            }
            Attachment::Detached => false,
        }
    }
}
