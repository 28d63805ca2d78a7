//! The active canvas: its dimensions, border, and figure registry.

use super::figure::{Figure, Registry};
use super::line::Line;
use super::point::Point;
use super::rect::Rect;
use super::render;
use super::style::{Glyphs, RenderStyle};
use crate::backend::{Surface, SurfaceError};

/// A canvas anchored at the origin and everything drawn onto it.
///
/// `width` x `height` counts interior cells; the border occupies one extra
/// cell on every side, so interior cells are `[1, width] x [1, height]`.
/// The registry is owned by the canvas and dropped with it when a new canvas
/// replaces this one.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    border: Rect,
    registry: Registry,
}

impl Canvas {
    /// Creates a canvas with an empty registry. Nothing is drawn yet.
    pub fn new(width: u32, height: u32) -> Self {
        let border = Rect::new(
            0,
            0,
            coord(width),
            coord(height),
            RenderStyle::Canvas,
        );
        Self {
            width,
            height,
            border,
            registry: Registry::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns true if `point` is an interior cell of the canvas.
    pub fn contains(&self, point: Point) -> bool {
        self.border.contains(point)
    }

    /// Returns true if `point` touches the canvas border or any registered
    /// figure. This is the stopping condition for fills.
    pub fn is_border(&self, point: Point) -> bool {
        self.border.touches(point) || self.registry.touches(point)
    }

    /// Appends a figure to the registry without drawing it.
    pub fn register(&mut self, figure: Figure) {
        self.registry.register(figure);
    }

    /// Draws the canvas border.
    pub fn render_border(
        &self,
        surface: &mut dyn Surface,
        glyphs: &Glyphs,
    ) -> Result<(), SurfaceError> {
        render::render_rect(surface, &self.border, glyphs)
    }

    /// Removes the border and every registered figure from the surface.
    pub fn erase(&self, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        render::erase_rect(surface, &self.border)?;
        for figure in self.registry.figures() {
            render::erase_figure(surface, figure)?;
        }
        Ok(())
    }

    /// Draws `line` and registers it.
    pub fn draw_line(
        &mut self,
        surface: &mut dyn Surface,
        line: Line,
        glyphs: &Glyphs,
    ) -> Result<(), SurfaceError> {
        render::render_line(surface, &line, RenderStyle::Figure, glyphs)?;
        self.register(Figure::Line(line));
        Ok(())
    }

    /// Draws `rect` and registers it.
    pub fn draw_rect(
        &mut self,
        surface: &mut dyn Surface,
        rect: Rect,
        glyphs: &Glyphs,
    ) -> Result<(), SurfaceError> {
        render::render_rect(surface, &rect, glyphs)?;
        self.register(Figure::Rect(rect));
        Ok(())
    }

    /// Paints a single cell and registers it as a point figure.
    pub fn draw_point(
        &mut self,
        surface: &mut dyn Surface,
        point: Point,
        glyph: char,
    ) -> Result<(), SurfaceError> {
        render::render_point(surface, point, glyph)?;
        self.register(Figure::Point(point, glyph));
        Ok(())
    }
}

/// Converts a command-supplied dimension or coordinate to grid space,
/// saturating values that do not fit.
pub fn coord(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
