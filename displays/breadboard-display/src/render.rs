//! Menu rendering
//!
//! Layout on the 8x21 screen:
//!
//! ```text
//! row 0-1  identity (word-wrapped)
//! row 2-7  channel rows, scrolled so the focused row stays visible
//! row 6-7  notice overlay, when one is active
//! ```
//!
//! When the focused row sits under the overlay the notice moves to rows 2-3.

use breadboard_core::app::MenuRow;
use breadboard_core::channel::CHANNEL_COUNT;
use breadboard_core::BreadboardApp;
use breadboard_hal::HexpansionPins;
use heapless::Vec;

use crate::screen::{truncate, Line, Screen, SCREEN_COLS, SCREEN_ROWS};

/// Rows given to the identity text
pub const IDENTITY_ROWS: usize = 2;

/// Rows available for channel rows
pub const MENU_ROWS: usize = SCREEN_ROWS - IDENTITY_ROWS;

/// Rows covered by a notice
pub const NOTICE_ROWS: usize = 2;

/// Render the application's current state
pub fn render_app<H: HexpansionPins>(app: &BreadboardApp<H>, screen: &mut Screen) {
    let rows: Vec<MenuRow, CHANNEL_COUNT> = app.rows().collect();
    render_menu(screen, &app.identity_text(), &rows, app.notice_text());
}

/// Render identity, channel rows and an optional notice
pub fn render_menu(screen: &mut Screen, identity: &str, rows: &[MenuRow], notice: Option<&str>) {
    screen.clear();

    for (row, text) in wrap(identity, SCREEN_COLS).take(IDENTITY_ROWS).enumerate() {
        screen.set_line(row, text);
    }

    let focus = rows.iter().position(|r| r.focused).unwrap_or(0);
    let start = scroll_start(focus, rows.len(), MENU_ROWS);
    let focus_row = IDENTITY_ROWS + focus - start;
    for (offset, item) in rows.iter().skip(start).take(MENU_ROWS).enumerate() {
        let row = IDENTITY_ROWS + offset;
        screen.set_line(row, &row_text(item));
        if item.focused {
            screen.highlight_row(row);
        }
    }

    if let Some(text) = notice {
        let first = notice_start(focus_row);
        for row in first..SCREEN_ROWS {
            screen.set_line(row, "");
            screen.highlight_row(row);
        }
        for (offset, text) in wrap(text, SCREEN_COLS).take(NOTICE_ROWS).enumerate() {
            screen.set_line(first + offset, text);
        }
    }
}

/// First screen row of the notice, kept off the focused row
fn notice_start(focus_row: usize) -> usize {
    let bottom = SCREEN_ROWS - NOTICE_ROWS;
    if focus_row >= bottom {
        IDENTITY_ROWS
    } else {
        bottom
    }
}

/// First visible row of a window of `window` rows that shows `focus`
fn scroll_start(focus: usize, len: usize, window: usize) -> usize {
    if len <= window || focus < window {
        0
    } else {
        (focus + 1 - window).min(len - window)
    }
}

/// Label on the left, value right-aligned
fn row_text(row: &MenuRow) -> Line {
    let mut line = Line::new();
    let value_col = SCREEN_COLS.saturating_sub(row.value.len() + 1);
    let _ = line.push_str(truncate(row.label, value_col));
    while line.len() <= value_col {
        let _ = line.push(' ');
    }
    let _ = line.push_str(truncate(row.value, SCREEN_COLS - line.len()));
    line
}

/// Greedy word wrap; words longer than `width` are split
fn wrap(text: &str, width: usize) -> impl Iterator<Item = &str> {
    let mut rest = text.trim();
    core::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        if rest.len() <= width {
            let line = rest;
            rest = "";
            return Some(line);
        }

        let head = truncate(rest, width);
        let split = if rest[head.len()..].starts_with(' ') {
            Some(head.len())
        } else {
            head.rfind(' ').filter(|&i| i > 0)
        };
        let (line, tail) = match split {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (head, &rest[head.len()..]),
        };
        rest = tail.trim_start();
        Some(line.trim_end())
    })
}
