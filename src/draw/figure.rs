//! Drawn figures and the registry that records them.

use super::line::Line;
use super::point::Point;
use super::rect::Rect;
use std::collections::HashSet;

/// Anything drawn onto the canvas after it was created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Figure {
    /// Axis-aligned line (`L` command)
    Line(Line),
    /// Rectangle outline (`R` command)
    Rect(Rect),
    /// A single filled cell (`B` command) and the glyph painted there
    Point(Point, char),
}

impl Figure {
    /// Returns true if `point` lies on this figure.
    pub fn touches(&self, point: Point) -> bool {
        match self {
            Figure::Line(line) => line.touches(point),
            Figure::Rect(rect) => rect.touches(point),
            Figure::Point(cell, _) => cell.touches(point),
        }
    }
}

/// Ordered record of every figure drawn since the canvas was created.
///
/// Used only for geometric queries, never for undo. Outlines and filled
/// points are also indexed separately so the border test stays cheap while a
/// large fill grows the registry one cell at a time.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    figures: Vec<Figure>,
    outlines: Vec<Figure>,
    points: HashSet<Point>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a figure in draw order.
    pub fn register(&mut self, figure: Figure) {
        match figure {
            Figure::Point(point, _) => {
                self.points.insert(point);
            }
            Figure::Line(_) | Figure::Rect(_) => self.outlines.push(figure),
        }
        self.figures.push(figure);
    }

    /// Returns true if `point` touches any registered figure.
    pub fn touches(&self, point: Point) -> bool {
        self.points.contains(&point) || self.outlines.iter().any(|figure| figure.touches(point))
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RenderStyle;

    #[test]
    fn registry_keeps_insertion_order() {
        let mut registry = Registry::new();
        let line = Figure::Line(Line::new(Point::new(1, 2), Point::new(6, 2)));
        let point = Figure::Point(Point::new(3, 3), 'o');

        registry.register(line);
        registry.register(point);

        assert_eq!(registry.figures(), &[line, point]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn touches_checks_every_kind_of_figure() {
        let mut registry = Registry::new();
        registry.register(Figure::Line(Line::new(Point::new(1, 2), Point::new(6, 2))));
        registry.register(Figure::Rect(Rect::from_corners(
            Point::new(10, 1),
            Point::new(14, 4),
            RenderStyle::Figure,
        )));
        registry.register(Figure::Point(Point::new(8, 8), 'o'));

        assert!(registry.touches(Point::new(4, 2)));
        assert!(registry.touches(Point::new(14, 3)));
        assert!(registry.touches(Point::new(8, 8)));
        assert!(!registry.touches(Point::new(12, 2)));
        assert!(!registry.touches(Point::new(8, 7)));
    }

    #[test]
    fn duplicate_figures_are_both_kept() {
        let mut registry = Registry::new();
        let line = Figure::Line(Line::new(Point::new(1, 1), Point::new(1, 4)));
        registry.register(line);
        registry.register(line);

        assert_eq!(registry.len(), 2);
        assert!(registry.touches(Point::new(1, 3)));
    }
}
