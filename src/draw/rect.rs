//! Axis-aligned rectangles built from four border lines.

use super::line::Line;
use super::point::Point;
use super::style::RenderStyle;
use std::fmt;

/// A rectangle outline made of four border lines.
///
/// The canonical form is `(x, y, width, height)` where `width`/`height` count
/// the interior cells only, so the outline spans columns `x..=x + width + 1`
/// and rows `y..=y + height + 1`:
///
/// ```text
///            top
///    (x,y) +-----+ (x+w+1,y)
///          |     |
///     left |     | right
///          |     |
///          +-----+
///           bottom
/// ```
///
/// Top and bottom own the four corners; the side lines only cover the rows
/// strictly between them, so no corner cell is drawn twice. A rectangle with
/// no interior rows has no side lines, and one collapsed onto a single row or
/// column has a single top or left line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    top: Line,
    bottom: Line,
    left: Option<Line>,
    right: Option<Line>,
    style: RenderStyle,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and interior size.
    ///
    /// Sizes below `-1` are treated as `-1` (outline collapsed onto one row or
    /// column).
    pub fn new(x: i32, y: i32, width: i32, height: i32, style: RenderStyle) -> Self {
        let width = width.max(-1);
        let height = height.max(-1);

        let x2 = x + width + 1;
        let y2 = y + height + 1;

        let top = Line::new(Point::new(x, y), Point::new(x2, y));
        let bottom = Line::new(Point::new(x, y2), Point::new(x2, y2));

        let (left, right) = if height >= 1 {
            let left = Line::new(Point::new(x, y + 1), Point::new(x, y + height));
            let right = Line::new(Point::new(x2, y + 1), Point::new(x2, y + height));
            (Some(left), (x2 != x).then_some(right))
        } else {
            (None, None)
        };

        Self {
            top,
            bottom,
            left,
            right,
            style,
        }
    }

    /// Creates a rectangle whose outline passes through two opposite corners.
    ///
    /// The corners may be given in any order.
    pub fn from_corners(a: Point, b: Point, style: RenderStyle) -> Self {
        let (x1, x2) = (a.x.min(b.x), a.x.max(b.x));
        let (y1, y2) = (a.y.min(b.y), a.y.max(b.y));

        // The border lines already span the full edge, so the interior is
        // one cell shorter on each axis.
        Self::new(x1, y1, x2 - x1 - 1, y2 - y1 - 1, style)
    }

    pub fn top(&self) -> Line {
        self.top
    }

    pub fn bottom(&self) -> Line {
        self.bottom
    }

    /// Left side, absent when there are no rows between top and bottom.
    pub fn left(&self) -> Option<Line> {
        self.left
    }

    /// Right side, absent when there are no interior rows or the rectangle
    /// is a single column wide.
    pub fn right(&self) -> Option<Line> {
        self.right
    }

    pub fn style(&self) -> RenderStyle {
        self.style
    }

    /// Distinct border lines in render order: left, right, top, bottom.
    pub fn lines(&self) -> impl Iterator<Item = Line> {
        let bottom = (self.bottom != self.top).then_some(self.bottom);
        [self.left, self.right, Some(self.top), bottom]
            .into_iter()
            .flatten()
    }

    /// Returns true if `point` lies on any border line.
    pub fn touches(&self, point: Point) -> bool {
        self.lines().any(|line| line.touches(point))
    }

    /// Strict interior test; border cells are not contained.
    pub fn contains(&self, point: Point) -> bool {
        let x_range = self.top.p1().x < point.x && point.x < self.top.p2().x;
        let y_range = self.top.p1().y < point.y && point.y < self.bottom.p1().y;

        x_range && y_range
    }

    /// Iterates over every border cell, each exactly once.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        self.lines().flat_map(Line::points)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect({}, {})", self.top, self.bottom)
    }
}
