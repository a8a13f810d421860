//! Timed on-screen notices

/// Shown when a toggle is attempted without a module
pub const NO_MODULE_NOTICE: &str = "No hexpansion! Cannot change value.";

/// A message shown over the menu for a fixed time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Notice {
    text: &'static str,
    remaining_ms: u32,
}

impl Notice {
    pub const fn new(text: &'static str, duration_ms: u32) -> Self {
        Self {
            text,
            remaining_ms: duration_ms,
        }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn is_active(&self) -> bool {
        self.remaining_ms > 0
    }

    /// Advance the timer; returns whether the notice is still showing
    pub fn update(&mut self, delta_ms: u32) -> bool {
        self.remaining_ms = self.remaining_ms.saturating_sub(delta_ms);
        self.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown() {
        let mut notice = Notice::new(NO_MODULE_NOTICE, 100);
        assert!(notice.is_active());
        assert!(notice.update(60));
        assert!(notice.update(39));
        assert!(!notice.update(1));
        assert!(!notice.is_active());
    }

    #[test]
    fn test_zero_duration_is_inactive() {
        let notice = Notice::new("x", 0);
        assert!(!notice.is_active());
    }
}
