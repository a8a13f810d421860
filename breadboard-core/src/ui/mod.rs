//! Menu navigation and transient notices

pub mod menu;
pub mod notice;

pub use menu::{Menu, MenuAction, MenuOutcome, MENU_ITEMS};
pub use notice::{Notice, NO_MODULE_NOTICE};
