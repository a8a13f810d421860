//! Configuration type definitions

/// Default notice display time
pub const DEFAULT_NOTICE_MS: u32 = 2_000;

/// Default idle wait between render checks
pub const DEFAULT_IDLE_POLL_MS: u32 = 50;

/// Default time the detect line must be stable before an insert/remove
pub const DEFAULT_DETECT_DEBOUNCE_MS: u32 = 100;

/// Application configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AppConfig {
    /// Port number reported for the board's wired hexpansion slot (1-6)
    pub port: u8,
    /// Detect line debounce in milliseconds
    pub detect_debounce_ms: u32,
    /// How long the "no hexpansion" notice stays up
    pub notice_ms: u32,
    /// Idle sleep of the render loop
    pub idle_poll_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl AppConfig {
    pub const fn defaults() -> Self {
        Self {
            port: 1,
            detect_debounce_ms: DEFAULT_DETECT_DEBOUNCE_MS,
            notice_ms: DEFAULT_NOTICE_MS,
            idle_poll_ms: DEFAULT_IDLE_POLL_MS,
        }
    }

    /// Clamp values into ranges the firmware can work with
    pub fn sanitize(&mut self) {
        self.port = self.port.clamp(1, 6);
        self.detect_debounce_ms = self.detect_debounce_ms.clamp(10, 1_000);
        self.notice_ms = self.notice_ms.clamp(500, 10_000);
        self.idle_poll_ms = self.idle_poll_ms.clamp(10, 500);
    }
}
