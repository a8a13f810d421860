//! Application task
//!
//! Owns the Breadboard app and with it the hexpansion pins. Every event is
//! handled to completion before the next is taken, so no other task ever
//! touches application state.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Instant, Timer};

use breadboard_core::config::AppConfig;
use breadboard_core::state::Event;
use breadboard_core::BreadboardApp;
use breadboard_display::render_app;
use breadboard_hal_rp2040::Rp2040Hexpansion;

use crate::channels::{DISPLAY_POWER, EVENT_CHANNEL, SCREEN_BUFFER, SCREEN_UPDATE};

type App = BreadboardApp<Rp2040Hexpansion>;

/// App task - event loop with an idle tick for the notice timer
#[embassy_executor::task]
pub async fn app_task(provider: Rp2040Hexpansion, config: AppConfig) {
    info!("App task started");

    let idle = Duration::from_millis(config.idle_poll_ms as u64);
    let mut app = App::new(provider, config);
    let mut minimised = false;
    let mut last = Instant::now();

    loop {
        if let Either::First(event) = select(EVENT_CHANNEL.receive(), Timer::after(idle)).await {
            debug!("Event: {:?}", event);

            if minimised && event.is_user_event() {
                // Any press brings the app back; it is not passed on
                info!("Restoring app");
                minimised = false;
                DISPLAY_POWER.signal(true);
                render(&app).await;
                continue;
            }

            let response = app.handle_event(event);

            if let Some(fault) = response.fault {
                error!("Hexpansion insertion failed: {:?}", fault);
            }

            if let Some(toggled) = response.toggled {
                let id = toggled.channel.id();
                debug!("Pin {} before toggle: {}", id, toggled.before);
                info!("Pin {} after toggle: {}", id, toggled.after);
            }

            if response.minimise {
                info!("Minimising app");
                minimised = true;
                DISPLAY_POWER.signal(false);
            }

            if let Event::ModuleInserted { port } = event {
                if app.state().is_attached() {
                    info!("Bound hexpansion pins for port {}", port);
                }
            }
        }

        let now = Instant::now();
        let delta_ms = (now - last).as_millis() as u32;
        last = now;

        if app.update(delta_ms) && !minimised {
            render(&app).await;
        }
    }
}

/// Render into the shared buffer and wake the display task
async fn render(app: &App) {
    {
        let mut screen = SCREEN_BUFFER.lock().await;
        render_app(app, &mut screen);
    }
    SCREEN_UPDATE.signal(());
}
