//! Terminal surface backed by crossterm.
//!
//! Owns the alternate screen and raw mode for the lifetime of the session.
//! The bottom status row is reserved for prompts and warnings; command lines
//! are edited in place there (printable characters, backspace, enter).

use super::{Surface, SurfaceError};
use crate::draw::Point;
use crossterm::{
    cursor::{Hide, MoveLeft, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use std::io::{self, BufWriter, Stdout, Write};

/// Interactive render surface on the controlling terminal.
pub struct TerminalSurface {
    target: BufWriter<Stdout>,
    columns: u16,
    status_row: u16,
    released: bool,
}

impl TerminalSurface {
    /// Switches the terminal into drawing mode.
    ///
    /// # Arguments
    /// * `status_row` - Row used for prompts and warnings
    pub fn new(status_row: u16) -> Result<Self, SurfaceError> {
        let (columns, rows) = terminal::size()?;
        if status_row >= rows {
            log::warn!(
                "Terminal has {rows} rows, status row {status_row} will be clipped; enlarge the window"
            );
        }

        enable_raw_mode()?;
        let mut target = BufWriter::new(io::stdout());
        queue!(target, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        target.flush()?;

        log::debug!("Terminal surface ready ({columns}x{rows}, status row {status_row})");
        Ok(Self {
            target,
            columns,
            status_row,
            released: false,
        })
    }

    fn ensure_active(&self) -> Result<(), SurfaceError> {
        if self.released {
            Err(SurfaceError::Released)
        } else {
            Ok(())
        }
    }

    /// Converts a grid point to terminal coordinates, if it is on screen.
    fn cell(&self, at: Point) -> Option<(u16, u16)> {
        let x = u16::try_from(at.x).ok()?;
        let y = u16::try_from(at.y).ok()?;
        (x < self.columns).then_some((x, y))
    }

    fn put_status(&mut self, text: &str) -> io::Result<()> {
        queue!(
            self.target,
            MoveTo(0, self.status_row),
            Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        self.target.flush()
    }

    /// Blocks for the next key press, skipping releases and other events.
    fn next_key() -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }

    fn edit_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        loop {
            let key = Self::next_key()?;
            match key.code {
                KeyCode::Enter => return Ok(Some(buffer)),
                KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(None);
                }
                KeyCode::Backspace => {
                    if buffer.pop().is_some() {
                        queue!(self.target, MoveLeft(1), Print(' '), MoveLeft(1))?;
                    }
                }
                KeyCode::Char(c) => {
                    buffer.push(c);
                    queue!(self.target, Print(c))?;
                }
                _ => {}
            }
            self.target.flush()?;
        }
    }
}

impl Surface for TerminalSurface {
    fn max_width(&self) -> u32 {
        u32::from(self.columns.saturating_sub(1))
    }

    fn put_char(&mut self, at: Point, glyph: char) -> Result<(), SurfaceError> {
        self.ensure_active()?;
        if let Some((x, y)) = self.cell(at) {
            queue!(self.target, MoveTo(x, y), Print(glyph))?;
        }
        Ok(())
    }

    fn hline(&mut self, start: Point, glyph: char, len: u32) -> Result<(), SurfaceError> {
        self.ensure_active()?;
        let Some((x, y)) = self.cell(start) else {
            // Run starts off screen; fall back to per-cell clipping.
            for offset in 0..len {
                self.put_char(Point::new(start.x + offset as i32, start.y), glyph)?;
            }
            return Ok(());
        };

        let visible = len.min(u32::from(self.columns - x)) as usize;
        let run: String = std::iter::repeat_n(glyph, visible).collect();
        queue!(self.target, MoveTo(x, y), Print(run))?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SurfaceError> {
        self.ensure_active()?;
        self.put_status(prompt)?;
        queue!(self.target, Show)?;
        self.target.flush()?;

        let line = self.edit_line();

        queue!(self.target, Hide)?;
        self.target.flush()?;
        Ok(line?)
    }

    fn show_message(&mut self, message: &str) -> Result<(), SurfaceError> {
        self.ensure_active()?;
        self.put_status(message)?;
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<(), SurfaceError> {
        self.ensure_active()?;
        self.put_status(message)?;
        Self::next_key()?;
        Ok(())
    }

    fn release(&mut self) -> Result<(), SurfaceError> {
        if self.released {
            return Ok(());
        }
        self.released = true;

        queue!(
            self.target,
            Clear(ClearType::All),
            Show,
            LeaveAlternateScreen
        )?;
        self.target.flush()?;
        disable_raw_mode()?;
        log::debug!("Terminal surface released");
        Ok(())
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            log::error!("Failed to restore terminal: {err}");
        }
    }
}
