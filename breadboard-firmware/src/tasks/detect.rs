//! Hexpansion detect task
//!
//! Watches the port's detect line (pulled up, held low by an inserted
//! module) and reports insert/remove once the level has settled.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{with_timeout, Duration, Timer};
use embedded_hal::digital::InputPin;

use breadboard_core::state::Event;

use crate::channels::EVENT_CHANNEL;

/// Upper bound between level checks
const RECHECK_INTERVAL: Duration = Duration::from_millis(500);

/// Detect task - turns detect line changes into module events
#[embassy_executor::task]
pub async fn detect_task(mut detect: Input<'static>, port: u8, debounce_ms: u32) {
    info!("Detect task started for port {}", port);

    let debounce = Duration::from_millis(debounce_ms as u64);
    let mut present = false;

    loop {
        let now_present = settled_low(&mut detect, debounce).await;

        if now_present != present {
            present = now_present;
            let event = if present {
                info!("Hexpansion inserted in port {}", port);
                Event::ModuleInserted { port }
            } else {
                info!("Hexpansion removed from port {}", port);
                Event::ModuleRemoved
            };
            EVENT_CHANNEL.send(event).await;
        }

        // Timeout catches an edge that landed while settling
        let _ = with_timeout(RECHECK_INTERVAL, detect.wait_for_any_edge()).await;
    }
}

/// Wait until the line holds one level for `debounce`, then report if it is low
async fn settled_low<P: InputPin>(pin: &mut P, debounce: Duration) -> bool {
    loop {
        let before = pin.is_low().unwrap_or(false);
        Timer::after(debounce).await;
        let after = pin.is_low().unwrap_or(false);
        if before == after {
            return after;
        }
    }
}
