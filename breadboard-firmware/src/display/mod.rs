//! On-board OLED
//!
//! The badge drives a 128x64 SH1106 directly over I2C. The application
//! renders into a `breadboard_display::Screen`; this module turns that
//! into pixels.

pub mod sh1106;

pub use sh1106::Sh1106;
