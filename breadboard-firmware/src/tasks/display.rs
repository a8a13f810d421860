//! Display task
//!
//! Pushes screens rendered by the app task to the SH1106 panel.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;

use breadboard_display::present;

use crate::channels::{DISPLAY_POWER, SCREEN_BUFFER, SCREEN_UPDATE};
use crate::display::Sh1106;

pub type Panel = Sh1106<I2c<'static, I2C0, Async>>;

/// Display task - redraws the panel on every screen update
#[embassy_executor::task]
pub async fn display_task(mut panel: Panel) {
    info!("Display task started");

    if let Err(e) = panel.init().await {
        error!("Display init failed: {:?}", e);
        return;
    }

    loop {
        match select(SCREEN_UPDATE.wait(), DISPLAY_POWER.wait()).await {
            Either::First(()) => {
                let screen = SCREEN_BUFFER.lock().await.clone();
                if let Err(e) = present(&screen, panel.frame_mut()) {
                    warn!("Failed to draw screen: {:?}", e);
                    continue;
                }
                if let Err(e) = panel.flush().await {
                    warn!("Failed to flush display: {:?}", e);
                }
                trace!("Screen update sent");
            }
            Either::Second(on) => {
                if let Err(e) = panel.set_display_on(on).await {
                    warn!("Failed to switch display: {:?}", e);
                }
            }
        }
    }
}
