//! Render surfaces the drawing engine paints onto.
//!
//! The engine never touches presentation directly; it issues cell and run
//! writes through [`Surface`] and reads command lines back from it.
//! - [`GridSurface`]: in-memory character grid (tests and batch mode)
//! - [`TerminalSurface`]: crossterm-driven alternate screen

pub mod grid;
pub mod terminal;

pub use grid::GridSurface;
pub use terminal::TerminalSurface;

use crate::draw::{BLANK, Point};
use thiserror::Error;

/// Fatal render-surface failures.
///
/// Unlike command validation failures these end the session; the surface is
/// released before the error propagates.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render surface has already been released")]
    Released,
}

/// Character-grid surface contract required by the drawing engine.
pub trait Surface {
    /// Canvas widths must stay strictly below this value.
    ///
    /// Implementations report one less than their column count so the right
    /// border of the widest accepted canvas still lands on screen.
    fn max_width(&self) -> u32;

    /// Places a single character at `at`. Cells off the surface are ignored.
    fn put_char(&mut self, at: Point, glyph: char) -> Result<(), SurfaceError>;

    /// Clears a single cell to blank.
    fn clear_cell(&mut self, at: Point) -> Result<(), SurfaceError> {
        self.put_char(at, BLANK)
    }

    /// Writes `len` copies of `glyph` rightwards from `start`.
    fn hline(&mut self, start: Point, glyph: char, len: u32) -> Result<(), SurfaceError> {
        for offset in 0..len {
            self.put_char(Point::new(start.x + offset as i32, start.y), glyph)?;
        }
        Ok(())
    }

    /// Writes `len` copies of `glyph` downwards from `start`.
    fn vline(&mut self, start: Point, glyph: char, len: u32) -> Result<(), SurfaceError> {
        for offset in 0..len {
            self.put_char(Point::new(start.x, start.y + offset as i32), glyph)?;
        }
        Ok(())
    }

    /// Shows `prompt` in the status area and reads the next command line.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SurfaceError>;

    /// Displays a short message in the status area without blocking.
    fn show_message(&mut self, message: &str) -> Result<(), SurfaceError>;

    /// Displays a warning and blocks until it is acknowledged.
    fn warn(&mut self, message: &str) -> Result<(), SurfaceError>;

    /// Hands the underlying device back. Calling it twice is harmless.
    fn release(&mut self) -> Result<(), SurfaceError>;
}
