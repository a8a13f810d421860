//! Display backend trait
//!
//! Defines the interface for the hardware that shows a `Screen`.

use crate::screen::Screen;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Display backend trait
///
/// Backends draw into their own frame buffer; pushing that buffer to the
/// panel is left to the driver, which may need to await a bus.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at the specified row and column (character units)
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Invert a region on the specified row, `end_col` exclusive
    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError>;

    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}

/// Draw a whole screen onto a backend
pub fn present<B: DisplayBackend>(screen: &Screen, backend: &mut B) -> Result<(), DisplayError> {
    if !backend.is_ready() {
        return Err(DisplayError::NotInitialized);
    }

    let (cols, rows) = backend.dimensions();
    if (cols as usize) < screen.cols() || (rows as usize) < screen.rows() {
        return Err(DisplayError::InvalidCoordinates);
    }

    backend.clear()?;
    for (row, line) in screen.lines().enumerate() {
        if !line.is_empty() {
            backend.draw_text(row as u8, 0, line)?;
        }
        if let Some((start, end)) = screen.get_highlight(row) {
            backend.invert_region(row as u8, start, end)?;
        }
    }
    Ok(())
}
