//! Render style tags and the glyphs they map to.

use super::line::{Line, Orientation};

/// Distinguishes the canvas border from ordinary figures when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Canvas border: directional dash characters
    Canvas,
    /// Any drawn figure: a uniform marker character
    #[default]
    Figure,
}

/// The characters used to render figures and the canvas border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Marker for lines and rectangles
    pub figure: char,
    /// Horizontal canvas border
    pub canvas_horizontal: char,
    /// Vertical canvas border
    pub canvas_vertical: char,
}

/// Glyph written when erasing a cell.
pub const BLANK: char = ' ';

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            figure: 'x',
            canvas_horizontal: '-',
            canvas_vertical: '|',
        }
    }
}

impl Glyphs {
    /// Returns the glyph used to draw `line` under the given style.
    pub fn for_line(&self, line: &Line, style: RenderStyle) -> char {
        match style {
            RenderStyle::Figure => self.figure,
            RenderStyle::Canvas => match line.orientation() {
                Orientation::Horizontal => self.canvas_horizontal,
                _ => self.canvas_vertical,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Point;

    #[test]
    fn canvas_style_picks_directional_dashes() {
        let glyphs = Glyphs::default();
        let h = Line::new(Point::new(0, 0), Point::new(5, 0));
        let v = Line::new(Point::new(0, 1), Point::new(0, 4));

        assert_eq!(glyphs.for_line(&h, RenderStyle::Canvas), '-');
        assert_eq!(glyphs.for_line(&v, RenderStyle::Canvas), '|');
        assert_eq!(glyphs.for_line(&h, RenderStyle::Figure), 'x');
        assert_eq!(glyphs.for_line(&v, RenderStyle::Figure), 'x');
    }
}
