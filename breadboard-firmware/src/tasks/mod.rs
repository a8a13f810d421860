//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod app;
pub mod buttons;
pub mod detect;
pub mod display;

pub use app::app_task;
pub use buttons::buttons_task;
pub use detect::detect_task;
pub use display::display_task;
