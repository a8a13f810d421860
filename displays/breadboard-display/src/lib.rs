//! Display abstraction and menu rendering for Breadboard
//!
//! This crate provides:
//! - `Screen`, a character buffer sized for the badge OLED (8 rows of 21)
//! - `DisplayBackend` trait for the hardware that shows it
//! - The menu renderer that turns application state into a `Screen`
//!
//! # Architecture
//!
//! The application task renders into a `Screen` and hands it over; the
//! display task pushes it to whatever implements `DisplayBackend`. Neither
//! side needs to know the other's hardware.

#![no_std]

pub mod backend;
pub mod render;
pub mod screen;

pub use backend::{present, DisplayBackend, DisplayError};
pub use render::{render_app, render_menu};
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
