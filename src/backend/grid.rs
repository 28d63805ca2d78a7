//! In-memory character grid surface.

use super::{Surface, SurfaceError};
use crate::draw::{BLANK, Point};
use std::collections::VecDeque;
use std::fmt;

/// A fixed-size character grid that records everything the engine asks of it.
///
/// Input lines are scripted up front; messages and warnings are collected
/// instead of shown, and warnings never block.
#[derive(Debug, Clone)]
pub struct GridSurface {
    columns: usize,
    rows: usize,
    cells: Vec<char>,
    input: VecDeque<String>,
    prompts: usize,
    messages: Vec<String>,
    warnings: Vec<String>,
    released: bool,
}

impl GridSurface {
    /// Creates a blank grid of `columns` x `rows` cells.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec![BLANK; columns * rows],
            input: VecDeque::new(),
            prompts: 0,
            messages: Vec::new(),
            warnings: Vec::new(),
            released: false,
        }
    }

    /// Queues command lines to be returned by [`Surface::read_line`].
    pub fn with_input<I, L>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.input.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Returns the character at `at`, or blank for cells off the grid.
    pub fn char_at(&self, at: Point) -> char {
        self.index(at).map_or(BLANK, |idx| self.cells[idx])
    }

    /// Number of prompts issued so far.
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    /// Non-blocking messages shown so far, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Warnings shown so far, oldest first.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Grid rows with trailing blanks trimmed.
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.columns.max(1))
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    fn index(&self, at: Point) -> Option<usize> {
        let x = usize::try_from(at.x).ok()?;
        let y = usize::try_from(at.y).ok()?;
        (x < self.columns && y < self.rows).then(|| y * self.columns + x)
    }

    fn ensure_active(&self) -> Result<(), SurfaceError> {
        if self.released {
            Err(SurfaceError::Released)
        } else {
            Ok(())
        }
    }
}

impl Surface for GridSurface {
    fn max_width(&self) -> u32 {
        u32::try_from(self.columns.saturating_sub(1)).unwrap_or(u32::MAX)
    }

    fn put_char(&mut self, at: Point, glyph: char) -> Result<(), SurfaceError> {
        self.ensure_active()?;
        if let Some(idx) = self.index(at) {
            self.cells[idx] = glyph;
        }
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SurfaceError> {
        self.ensure_active()?;
        self.prompts += 1;
        log::trace!("{prompt}");
        Ok(self.input.pop_front())
    }

    fn show_message(&mut self, message: &str) -> Result<(), SurfaceError> {
        self.ensure_active()?;
        self.messages.push(message.to_string());
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<(), SurfaceError> {
        self.ensure_active()?;
        self.warnings.push(message.to_string());
        Ok(())
    }

    fn release(&mut self) -> Result<(), SurfaceError> {
        self.released = true;
        Ok(())
    }
}

/// Renders the grid as text: trailing blanks and empty trailing rows are
/// dropped, every remaining row ends with a newline.
impl fmt::Display for GridSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.lines();
        let used = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(0, |last| last + 1);

        for line in &lines[..used] {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
