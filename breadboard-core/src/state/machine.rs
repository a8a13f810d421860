//! Hexpansion presence as seen by the rest of the app
//!
//! The pin controller derives this from its attachment: pin bindings exist
//! exactly while `Attached`.

use crate::channel::Port;

/// Module presence states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModuleState {
    /// No hexpansion bound; toggles are rejected
    Detached,
    /// A hexpansion is bound in the given port
    Attached(Port),
}

impl ModuleState {
    /// Check if a module is bound
    pub fn is_attached(&self) -> bool {
        matches!(self, ModuleState::Attached(_))
    }
}
