//! SH1106 OLED Display Driver
//!
//! Driver for 128x64 SH1106-based OLED displays via I2C. Text is drawn into
//! a local frame buffer with embedded-graphics using a 5x8 font on a 6x8
//! cell, giving 21 columns by 8 rows.

use core::convert::Infallible;

use breadboard_display::{DisplayBackend, DisplayError, SCREEN_COLS, SCREEN_ROWS};
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal_async::i2c::I2c;

/// SH1106 I2C address (typically 0x3C or 0x3D)
const SH1106_ADDR: u8 = 0x3C;

/// Display dimensions
const WIDTH: usize = 128;
const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

/// Character cell size in pixels
const CELL_WIDTH: usize = 6;
const CELL_HEIGHT: usize = 8;

/// SH1106 RAM is 132 columns wide; the panel starts at column 2
const COLUMN_OFFSET: u8 = 2;

/// FONT_5X8 with one pixel between glyphs
const CELL_FONT: MonoFont<'static> = MonoFont {
    character_spacing: 1,
    ..FONT_5X8
};

/// SH1106 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// 1bpp frame buffer, organised as pages of 8 vertical pixels
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
    ready: bool,
}

impl FrameBuffer {
    const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
            ready: false,
        }
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            if x >= WIDTH || y >= HEIGHT {
                continue;
            }

            let bit = 1u8 << (y % 8);
            let byte = &mut self.pages[y / 8][x];
            if color.is_on() {
                *byte |= bit;
            } else {
                *byte &= !bit;
            }
        }
        Ok(())
    }
}

impl DisplayBackend for FrameBuffer {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if row as usize >= SCREEN_ROWS || col as usize >= SCREEN_COLS {
            return Err(DisplayError::InvalidCoordinates);
        }

        let origin = Point::new(
            (col as usize * CELL_WIDTH) as i32,
            (row as usize * CELL_HEIGHT) as i32,
        );
        let style = MonoTextStyle::new(&CELL_FONT, BinaryColor::On);
        Text::with_baseline(text, origin, style, Baseline::Top)
            .draw(self)
            .map(|_| ())
            .map_err(|e| match e {})
    }

    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError> {
        let page = self
            .pages
            .get_mut(row as usize)
            .ok_or(DisplayError::InvalidCoordinates)?;
        let start_x = (start_col as usize * CELL_WIDTH).min(WIDTH);
        let end_x = (end_col as usize * CELL_WIDTH).min(WIDTH);

        for byte in &mut page[start_x..end_x.max(start_x)] {
            *byte ^= 0xFF;
        }
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (SCREEN_COLS as u8, SCREEN_ROWS as u8)
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

/// SH1106 OLED driver
pub struct Sh1106<I2C> {
    i2c: I2C,
    frame: FrameBuffer,
}

impl<I2C: I2c> Sh1106<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            frame: FrameBuffer::new(),
        }
    }

    /// Initialize the display
    pub async fn init(&mut self) -> Result<(), I2C::Error> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80,
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14,
            cmd::SET_SEG_REMAP,
            cmd::SET_COM_SCAN_DEC,
            cmd::SET_COM_PINS,
            0x12,
            cmd::SET_CONTRAST,
            0xCF,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c).await?;
        }

        self.frame.ready = true;
        Ok(())
    }

    async fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(SH1106_ADDR, &[0x00, cmd]).await
    }

    /// Frame buffer to draw into
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    /// Send the frame buffer to the panel
    pub async fn flush(&mut self) -> Result<(), I2C::Error> {
        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | page as u8).await?;
            self.command(cmd::SET_LOW_COLUMN | COLUMN_OFFSET).await?;
            self.command(cmd::SET_HIGH_COLUMN).await?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = 0x40; // Data mode
            data[1..].copy_from_slice(&self.frame.pages[page]);
            self.i2c.write(SH1106_ADDR, &data).await?;
        }

        Ok(())
    }

    /// Turn the panel on or off; the frame buffer is kept
    pub async fn set_display_on(&mut self, on: bool) -> Result<(), I2C::Error> {
        self.command(if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF })
            .await
    }
}
