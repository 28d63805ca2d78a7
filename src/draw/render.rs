//! Rendering of geometry onto a [`Surface`].

use super::figure::Figure;
use super::line::{Line, Orientation};
use super::point::Point;
use super::rect::Rect;
use super::style::{BLANK, Glyphs, RenderStyle};
use crate::backend::{Surface, SurfaceError};

/// Draws `line` as a single run of glyphs. Diagonal lines are skipped.
pub fn render_line(
    surface: &mut dyn Surface,
    line: &Line,
    style: RenderStyle,
    glyphs: &Glyphs,
) -> Result<(), SurfaceError> {
    run(surface, line, glyphs.for_line(line, style))
}

/// Blanks every cell covered by `line`.
pub fn erase_line(surface: &mut dyn Surface, line: &Line) -> Result<(), SurfaceError> {
    run(surface, line, BLANK)
}

/// Draws the four border lines of `rect` using the rectangle's own style.
pub fn render_rect(
    surface: &mut dyn Surface,
    rect: &Rect,
    glyphs: &Glyphs,
) -> Result<(), SurfaceError> {
    for line in rect.lines() {
        render_line(surface, &line, rect.style(), glyphs)?;
    }
    Ok(())
}

pub fn erase_rect(surface: &mut dyn Surface, rect: &Rect) -> Result<(), SurfaceError> {
    for line in rect.lines() {
        erase_line(surface, &line)?;
    }
    Ok(())
}

pub fn render_point(
    surface: &mut dyn Surface,
    point: Point,
    glyph: char,
) -> Result<(), SurfaceError> {
    surface.put_char(point, glyph)
}

pub fn erase_point(surface: &mut dyn Surface, point: Point) -> Result<(), SurfaceError> {
    surface.clear_cell(point)
}

pub fn erase_figure(surface: &mut dyn Surface, figure: &Figure) -> Result<(), SurfaceError> {
    match figure {
        Figure::Line(line) => erase_line(surface, line),
        Figure::Rect(rect) => erase_rect(surface, rect),
        Figure::Point(point, _) => erase_point(surface, *point),
    }
}

fn run(surface: &mut dyn Surface, line: &Line, glyph: char) -> Result<(), SurfaceError> {
    // A line of length n covers n + 1 cells.
    let cells = line.length() + 1;
    match line.orientation() {
        Orientation::Horizontal => surface.hline(line.p1(), glyph, cells),
        Orientation::Vertical => surface.vline(line.p1(), glyph, cells),
        Orientation::Diagonal => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::GridSurface;

    fn chars(grid: &GridSurface, cells: impl Iterator<Item = Point>) -> Vec<char> {
        cells.map(|p| grid.char_at(p)).collect()
    }

    #[test]
    fn point_draw_then_erase_restores_blank() {
        let mut grid = GridSurface::new(10, 10);
        let point = Point::new(1, 1);

        render_point(&mut grid, point, '?').unwrap();
        assert_eq!(grid.char_at(point), '?');

        erase_point(&mut grid, point).unwrap();
        assert_eq!(grid.char_at(point), ' ');
    }

    #[test]
    fn lines_draw_and_erase() {
        let mut grid = GridSurface::new(20, 20);
        let glyphs = Glyphs::default();
        let h = Line::new(Point::new(1, 1), Point::new(10, 1));
        let v = Line::new(Point::new(1, 1), Point::new(1, 10));

        render_line(&mut grid, &h, RenderStyle::Figure, &glyphs).unwrap();
        assert!(chars(&grid, h.points()).iter().all(|c| *c == 'x'));
        assert_eq!(grid.char_at(Point::new(11, 1)), ' ');
        erase_line(&mut grid, &h).unwrap();
        assert!(chars(&grid, h.points()).iter().all(|c| *c == ' '));

        render_line(&mut grid, &v, RenderStyle::Figure, &glyphs).unwrap();
        assert!(chars(&grid, v.points()).iter().all(|c| *c == 'x'));
        erase_line(&mut grid, &v).unwrap();
        assert!(chars(&grid, v.points()).iter().all(|c| *c == ' '));
    }

    #[test]
    fn diagonal_line_is_never_drawn() {
        let mut grid = GridSurface::new(10, 10);
        let line = Line::new(Point::new(1, 1), Point::new(4, 4));

        render_line(&mut grid, &line, RenderStyle::Figure, &Glyphs::default()).unwrap();
        assert_eq!(grid.to_string(), "");
    }

    #[test]
    fn rect_draws_and_erases_its_outline() {
        let mut grid = GridSurface::new(20, 20);
        let rect = Rect::from_corners(Point::new(1, 1), Point::new(10, 10), RenderStyle::Figure);

        render_rect(&mut grid, &rect, &Glyphs::default()).unwrap();
        assert!(chars(&grid, rect.points()).iter().all(|c| *c == 'x'));
        assert_eq!(grid.char_at(Point::new(5, 5)), ' ');

        erase_rect(&mut grid, &rect).unwrap();
        assert_eq!(grid.to_string(), "");
    }

    #[test]
    fn canvas_rect_uses_dashes_and_bars() {
        let mut grid = GridSurface::new(40, 40);
        let canvas = Rect::from_corners(Point::new(0, 0), Point::new(30, 30), RenderStyle::Canvas);

        render_rect(&mut grid, &canvas, &Glyphs::default()).unwrap();
        assert!(chars(&grid, canvas.points()).iter().all(|c| matches!(c, '-' | '|')));
        assert_eq!(grid.char_at(Point::new(0, 0)), '-');
        assert_eq!(grid.char_at(Point::new(0, 1)), '|');
    }

    #[test]
    fn small_canvas_renders_expected_text() {
        let mut grid = GridSurface::new(10, 6);
        let canvas = Rect::new(0, 0, 3, 2, RenderStyle::Canvas);

        render_rect(&mut grid, &canvas, &Glyphs::default()).unwrap();
        assert_eq!(grid.to_string(), "-----\n|   |\n|   |\n-----\n");
    }
}
