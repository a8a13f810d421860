//! Screen buffer types
//!
//! A character-based screen for the badge's 128x64 OLED, which fits
//! 8 rows of 21 characters with a 5x8 font.

use heapless::String;

/// Number of character rows
pub const SCREEN_ROWS: usize = 8;

/// Number of character columns
pub const SCREEN_COLS: usize = 21;

/// Maximum characters per line
pub const LINE_LEN: usize = SCREEN_COLS;

/// Text line
pub type Line = String<LINE_LEN>;

/// Screen buffer for text-mode displays
///
/// Rendered to any `DisplayBackend` with [`crate::present`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    lines: [Line; SCREEN_ROWS],
    /// Highlighted (inverted) column range per row, end exclusive
    highlights: [Option<(u8, u8)>; SCREEN_ROWS],
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub const fn new() -> Self {
        Self {
            lines: [
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ],
            highlights: [None; SCREEN_ROWS],
        }
    }

    /// Clear text and highlights
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.highlights = [None; SCREEN_ROWS];
    }

    /// Set the content of a row, truncating to the screen width
    pub fn set_line(&mut self, row: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(row) {
            line.clear();
            let _ = line.push_str(truncate(text, LINE_LEN));
        }
    }

    /// Get the content of a row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Set highlight (invert) region for a row
    pub fn set_highlight(&mut self, row: usize, start_col: u8, end_col: u8) {
        if row < SCREEN_ROWS {
            self.highlights[row] = Some((start_col, end_col.min(SCREEN_COLS as u8)));
        }
    }

    /// Highlight a full row
    pub fn highlight_row(&mut self, row: usize) {
        self.set_highlight(row, 0, SCREEN_COLS as u8);
    }

    /// Get highlight region for a row
    pub fn get_highlight(&self, row: usize) -> Option<(u8, u8)> {
        self.highlights.get(row).copied().flatten()
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }

    pub const fn rows(&self) -> usize {
        SCREEN_ROWS
    }

    pub const fn cols(&self) -> usize {
        SCREEN_COLS
    }
}

/// Cut `text` to at most `max` bytes on a char boundary
pub(crate) fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
