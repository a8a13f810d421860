//! Breadboard - Hexpansion GPIO toggle firmware
//!
//! Firmware for RP2040-based badges. Shows the nine signal pins of the
//! inserted hexpansion on the OLED and lets the user flip each one.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Flex, Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use breadboard_core::config::AppConfig;
use breadboard_hal::PinGroups;
use breadboard_hal_rp2040::{HexpansionPin, Rp2040Hexpansion};

use crate::config::parse_config;
use crate::display::Sh1106;

mod channels;
mod config;
mod display;
mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit badge.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../badge.toml");

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Breadboard firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    info!("Configuration: {:?}", config);

    // Hexpansion signal pins (board-specific: LS_1-5 on GPIO2-6, HS_1-4 on GPIO10-13)
    let pins = PinGroups {
        ls: [
            HexpansionPin::new(Flex::new(p.PIN_2)),
            HexpansionPin::new(Flex::new(p.PIN_3)),
            HexpansionPin::new(Flex::new(p.PIN_4)),
            HexpansionPin::new(Flex::new(p.PIN_5)),
            HexpansionPin::new(Flex::new(p.PIN_6)),
        ],
        hs: [
            HexpansionPin::new(Flex::new(p.PIN_10)),
            HexpansionPin::new(Flex::new(p.PIN_11)),
            HexpansionPin::new(Flex::new(p.PIN_12)),
            HexpansionPin::new(Flex::new(p.PIN_13)),
        ],
    };

    let Some(provider) = Rp2040Hexpansion::new(config.port, pins) else {
        // sanitize() keeps the port in range
        defmt::panic!("Port {} out of range", config.port);
    };

    // Detect line (board-specific: GPIO15, low when a module is seated)
    let detect = Input::new(p.PIN_15, Pull::Up);

    // Buttons, in Button::ALL order: Up, Right, Confirm, Down, Left, Cancel
    let buttons = [
        Input::new(p.PIN_16, Pull::Up),
        Input::new(p.PIN_17, Pull::Up),
        Input::new(p.PIN_18, Pull::Up),
        Input::new(p.PIN_19, Pull::Up),
        Input::new(p.PIN_22, Pull::Up),
        Input::new(p.PIN_26, Pull::Up),
    ];

    // OLED on I2C0 (board-specific: SDA GPIO20, SCL GPIO21)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_async(p.I2C0, p.PIN_21, p.PIN_20, Irqs, i2c_config);
    let panel = Sh1106::new(i2c);

    info!("Hardware initialized");

    spawner.spawn(tasks::display_task(panel)).unwrap();
    spawner
        .spawn(tasks::app_task(provider, config))
        .unwrap();
    spawner
        .spawn(tasks::detect_task(detect, config.port, config.detect_debounce_ms))
        .unwrap();
    spawner.spawn(tasks::buttons_task(buttons)).unwrap();

    info!("All tasks spawned, firmware running");
}

/// Parse the embedded badge.toml, falling back to defaults
fn load_config() -> AppConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            // build.rs validates badge.toml, so this only happens if the
            // validator and parser disagree
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using default configuration");
            AppConfig::defaults()
        }
    }
}
