//! Value formatting for the menu
//!
//! Channel levels render as "ON"/"OFF"; the module identity renders as a
//! prompt when absent or "Hexpansion <Ordinal>" for ports 1..=6.

use heapless::String;

use crate::channel::Port;

/// Longest identity text ("Insert or reinsert hexpansion.")
pub const IDENTITY_LEN: usize = 32;

/// Shown when no module is bound
pub const INSERT_PROMPT: &str = "Insert or reinsert hexpansion.";

/// Formatted identity line
pub type IdentityText = String<IDENTITY_LEN>;

/// Formatting failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// Port number has no ordinal name
    UnknownPort(u8),
}

/// Render a channel level
pub const fn format_level(high: bool) -> &'static str {
    if high {
        "ON"
    } else {
        "OFF"
    }
}

fn ordinal(port: u8) -> Option<&'static str> {
    match port {
        1 => Some("One"),
        2 => Some("Two"),
        3 => Some("Three"),
        4 => Some("Four"),
        5 => Some("Five"),
        6 => Some("Six"),
        _ => None,
    }
}

/// Render a raw module identity
pub fn format_identity(port: Option<u8>) -> Result<IdentityText, FormatError> {
    let mut text = IdentityText::new();
    match port {
        None => {
            let _ = text.push_str(INSERT_PROMPT);
        }
        Some(raw) => {
            let name = ordinal(raw).ok_or(FormatError::UnknownPort(raw))?;
            let _ = text.push_str("Hexpansion ");
            let _ = text.push_str(name);
        }
    }
    Ok(text)
}

/// Render a validated port; cannot fail
pub fn format_port(port: Option<Port>) -> IdentityText {
    match format_identity(port.map(Port::get)) {
        Ok(text) => text,
        // Port guarantees 1..=6
        Err(_) => IdentityText::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_level() {
        assert_eq!(format_level(true), "ON");
        assert_eq!(format_level(false), "OFF");
    }

    #[test]
    fn test_identity_absent() {
        assert_eq!(
            format_identity(None).unwrap(),
            "Insert or reinsert hexpansion."
        );
    }

    #[test]
    fn test_identity_ordinals() {
        assert_eq!(format_identity(Some(1)).unwrap(), "Hexpansion One");
        assert_eq!(format_identity(Some(3)).unwrap(), "Hexpansion Three");
        assert_eq!(format_identity(Some(6)).unwrap(), "Hexpansion Six");
    }

    #[test]
    fn test_identity_unknown_port() {
        assert_eq!(format_identity(Some(0)), Err(FormatError::UnknownPort(0)));
        assert_eq!(format_identity(Some(7)), Err(FormatError::UnknownPort(7)));
    }

    #[test]
    fn test_format_port() {
        assert_eq!(format_port(None), INSERT_PROMPT);
        assert_eq!(format_port(Port::new(2)), "Hexpansion Two");
    }
}
