//! Border-aware flood fill.
//!
//! The fill never looks at the glyph currently in a cell. A cell stops the
//! fill when it touches the canvas border or any registered figure; every
//! painted cell is registered as a point figure straight away, so the growing
//! fill borders itself and terminates without a separate visited set.

use super::canvas::Canvas;
use super::point::Point;
use crate::backend::{Surface, SurfaceError};

/// Outcome of a single fill operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillReport {
    /// Number of cells painted
    pub painted: usize,
}

/// Fills the region around `seed` with `glyph`.
///
/// The caller has already checked that `seed` is inside the canvas interior.
/// A seed that touches a border paints nothing. Neighbours are explored
/// left, up, right, down; pending cells live on an explicit stack so large
/// canvases cannot exhaust the call stack.
pub fn flood_fill(
    canvas: &mut Canvas,
    surface: &mut dyn Surface,
    seed: Point,
    glyph: char,
) -> Result<FillReport, SurfaceError> {
    let mut report = FillReport::default();
    let mut pending = vec![seed];

    while let Some(point) = pending.pop() {
        if canvas.is_border(point) {
            continue;
        }

        canvas.draw_point(surface, point, glyph)?;
        report.painted += 1;

        // Pushed in reverse so left is explored first.
        for next in [point.down(), point.right(), point.up(), point.left()] {
            if canvas.contains(next) {
                pending.push(next);
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::GridSurface;
    use crate::draw::{Glyphs, Line};

    #[test]
    fn fills_whole_empty_canvas() {
        let mut grid = GridSurface::new(20, 10);
        let mut canvas = Canvas::new(5, 3);
        canvas.render_border(&mut grid, &Glyphs::default()).unwrap();

        let report = flood_fill(&mut canvas, &mut grid, Point::new(3, 2), 'o').unwrap();

        assert_eq!(report.painted, 15);
        assert_eq!(
            grid.to_string(),
            "-------\n|ooooo|\n|ooooo|\n|ooooo|\n-------\n"
        );
    }

    #[test]
    fn seed_on_a_figure_paints_nothing() {
        let mut grid = GridSurface::new(20, 10);
        let glyphs = Glyphs::default();
        let mut canvas = Canvas::new(5, 3);
        canvas
            .draw_line(&mut grid, Line::new(Point::new(1, 2), Point::new(5, 2)), &glyphs)
            .unwrap();

        let report = flood_fill(&mut canvas, &mut grid, Point::new(3, 2), 'o').unwrap();
        assert_eq!(report.painted, 0);
        assert_eq!(grid.char_at(Point::new(3, 2)), 'x');
    }

    #[test]
    fn line_splits_the_canvas() {
        let mut grid = GridSurface::new(20, 10);
        let glyphs = Glyphs::default();
        let mut canvas = Canvas::new(5, 3);
        canvas
            .draw_line(&mut grid, Line::new(Point::new(1, 2), Point::new(5, 2)), &glyphs)
            .unwrap();

        let report = flood_fill(&mut canvas, &mut grid, Point::new(1, 1), 'o').unwrap();

        assert_eq!(report.painted, 5);
        assert!((1..=5).all(|x| grid.char_at(Point::new(x, 1)) == 'o'));
        assert!((1..=5).all(|x| grid.char_at(Point::new(x, 3)) == ' '));
    }

    #[test]
    fn filled_region_blocks_a_second_fill() {
        let mut grid = GridSurface::new(20, 10);
        let mut canvas = Canvas::new(4, 2);

        flood_fill(&mut canvas, &mut grid, Point::new(1, 1), 'o').unwrap();
        let second = flood_fill(&mut canvas, &mut grid, Point::new(2, 2), '#').unwrap();

        assert_eq!(second.painted, 0);
        assert_eq!(grid.char_at(Point::new(2, 2)), 'o');
    }

    #[test]
    fn large_canvas_does_not_overflow() {
        let mut grid = GridSurface::new(400, 200);
        let mut canvas = Canvas::new(300, 150);

        let report = flood_fill(&mut canvas, &mut grid, Point::new(150, 75), '.').unwrap();
        assert_eq!(report.painted, 300 * 150);
    }
}
