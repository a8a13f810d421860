//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use breadboard_core::state::Event;
use breadboard_display::Screen;

/// Channel capacity for inbound events
const EVENT_CHANNEL_SIZE: usize = 8;

/// Module and button events, consumed in order by the app task
pub static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, Event, EVENT_CHANNEL_SIZE> =
    Channel::new();

/// Signal that a new screen is ready in `SCREEN_BUFFER`
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Shared screen buffer protected by mutex
pub static SCREEN_BUFFER: Mutex<CriticalSectionRawMutex, Screen> = Mutex::new(Screen::new());

/// Panel power; false while the app is minimised
pub static DISPLAY_POWER: Signal<CriticalSectionRawMutex, bool> = Signal::new();
