//! Button input task
//!
//! Six active-low buttons. A press is reported once its level has settled;
//! buttons held together are reported as one set.

use defmt::*;
use embassy_futures::select::select_array;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use breadboard_core::state::{Button, ButtonSet, Event};

use crate::channels::EVENT_CHANNEL;

/// Settle time after the first falling edge
const DEBOUNCE: Duration = Duration::from_millis(20);

/// Poll interval while waiting for release
const RELEASE_POLL: Duration = Duration::from_millis(10);

/// Button task - `buttons` is indexed like `Button::ALL`
#[embassy_executor::task]
pub async fn buttons_task(mut buttons: [Input<'static>; 6]) {
    info!("Buttons task started");

    loop {
        select_array(buttons.each_mut().map(|b| b.wait_for_falling_edge())).await;
        Timer::after(DEBOUNCE).await;

        let pressed = pressed_set(&buttons);
        if pressed.is_empty() {
            // Bounce or glitch
            continue;
        }

        debug!("Buttons pressed: {:?}", pressed);
        EVENT_CHANNEL.send(Event::ButtonPressed(pressed)).await;

        while !pressed_set(&buttons).is_empty() {
            Timer::after(RELEASE_POLL).await;
        }
    }
}

fn pressed_set(buttons: &[Input<'static>; 6]) -> ButtonSet {
    Button::ALL
        .iter()
        .zip(buttons.iter())
        .filter(|(_, input)| input.is_low())
        .map(|(&button, _)| button)
        .collect()
}
