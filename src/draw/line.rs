//! Axis-aligned line segments.

use super::point::Point;
use std::fmt;

/// Classification of a line by the axis it runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Both endpoints share the same row
    Horizontal,
    /// Both endpoints share the same column (includes single-cell lines)
    Vertical,
    /// Endpoints differ on both axes; never drawn
    Diagonal,
}

/// A straight segment between two grid points.
///
/// Endpoints are normalised at construction: for vertical lines `p1` is the
/// upper endpoint, for horizontal lines `p1` is the leftmost one. The segment
/// is immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    p1: Point,
    p2: Point,
}

impl Line {
    /// Creates a line, swapping the endpoints if needed so `p1` comes first
    /// along the varying axis.
    pub fn new(p1: Point, p2: Point) -> Self {
        let swap = match orientation_of(p1, p2) {
            Orientation::Vertical => p1.y > p2.y,
            Orientation::Horizontal => p1.x > p2.x,
            Orientation::Diagonal => false,
        };

        if swap {
            Self { p1: p2, p2: p1 }
        } else {
            Self { p1, p2 }
        }
    }

    /// First endpoint (smaller coordinate along the varying axis).
    pub fn p1(&self) -> Point {
        self.p1
    }

    /// Second endpoint.
    pub fn p2(&self) -> Point {
        self.p2
    }

    pub fn orientation(&self) -> Orientation {
        orientation_of(self.p1, self.p2)
    }

    /// Returns true if the line can be drawn, i.e. it is horizontal or vertical.
    pub fn validate(&self) -> bool {
        !matches!(self.orientation(), Orientation::Diagonal)
    }

    /// Distance between the endpoints along the varying axis.
    ///
    /// A line of length `n` covers `n + 1` cells. Diagonal lines report their
    /// vertical span.
    pub fn length(&self) -> u32 {
        match self.orientation() {
            Orientation::Horizontal => self.p1.x.abs_diff(self.p2.x),
            Orientation::Vertical | Orientation::Diagonal => self.p1.y.abs_diff(self.p2.y),
        }
    }

    /// Inclusive membership test: endpoints and every cell between them touch.
    pub fn touches(&self, point: Point) -> bool {
        match self.orientation() {
            Orientation::Vertical => {
                point.x == self.p1.x && (self.p1.y..=self.p2.y).contains(&point.y)
            }
            Orientation::Horizontal => {
                point.y == self.p1.y && (self.p1.x..=self.p2.x).contains(&point.x)
            }
            Orientation::Diagonal => false,
        }
    }

    /// Iterates over every cell covered by the line. Diagonal lines yield nothing.
    pub fn points(self) -> impl Iterator<Item = Point> {
        let (p1, p2) = (self.p1, self.p2);
        let cells: Box<dyn Iterator<Item = Point>> = match self.orientation() {
            Orientation::Horizontal => Box::new((p1.x..=p2.x).map(move |x| Point::new(x, p1.y))),
            Orientation::Vertical => Box::new((p1.y..=p2.y).map(move |y| Point::new(p1.x, y))),
            Orientation::Diagonal => Box::new(std::iter::empty()),
        };
        cells
    }
}

fn orientation_of(p1: Point, p2: Point) -> Orientation {
    if p1.x == p2.x {
        Orientation::Vertical
    } else if p1.y == p2.y {
        Orientation::Horizontal
    } else {
        Orientation::Diagonal
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({}, {})", self.p1, self.p2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h_line() -> Line {
        Line::new(Point::new(1, 1), Point::new(10, 1))
    }

    fn v_line() -> Line {
        Line::new(Point::new(1, 1), Point::new(1, 10))
    }

    #[test]
    fn orientation_is_derived_from_endpoints() {
        assert_eq!(h_line().orientation(), Orientation::Horizontal);
        assert_eq!(v_line().orientation(), Orientation::Vertical);
        assert_eq!(
            Line::new(Point::new(1, 1), Point::new(4, 5)).orientation(),
            Orientation::Diagonal
        );
    }

    #[test]
    fn single_cell_line_is_vertical() {
        let line = Line::new(Point::new(3, 3), Point::new(3, 3));
        assert_eq!(line.orientation(), Orientation::Vertical);
        assert_eq!(line.length(), 0);
        assert!(line.touches(Point::new(3, 3)));
    }

    #[test]
    fn length_is_span_along_varying_axis() {
        assert_eq!(h_line().length(), 9);
        assert_eq!(v_line().length(), 9);
    }

    #[test]
    fn construction_sorts_endpoints() {
        let vertical = Line::new(Point::new(4, 9), Point::new(4, 2));
        assert_eq!(vertical.p1(), Point::new(4, 2));
        assert_eq!(vertical.p2(), Point::new(4, 9));

        let horizontal = Line::new(Point::new(8, 5), Point::new(3, 5));
        assert_eq!(horizontal.p1(), Point::new(3, 5));
        assert_eq!(horizontal.p2(), Point::new(8, 5));
    }

    #[test]
    fn diagonal_lines_are_invalid() {
        assert!(h_line().validate());
        assert!(v_line().validate());
        assert!(!Line::new(Point::new(1, 2), Point::new(3, 4)).validate());
    }

    #[test]
    fn touches_covers_every_cell_inclusive() {
        let h = h_line();
        let v = v_line();

        assert!(h.points().all(|p| h.touches(p)));
        assert!(v.points().all(|p| v.touches(p)));
        assert_eq!(h.points().count(), 10);
    }

    #[test]
    fn touches_rejects_cells_beyond_the_span() {
        let h = h_line();
        let beyond = Line::new(Point::new(11, 1), Point::new(20, 1));
        assert!(!beyond.points().any(|p| h.touches(p)));

        let v = v_line();
        let below = Line::new(Point::new(1, 11), Point::new(1, 20));
        assert!(!below.points().any(|p| v.touches(p)));
    }

    #[test]
    fn touches_rejects_cells_off_axis() {
        assert!(!h_line().touches(Point::new(5, 2)));
        assert!(!v_line().touches(Point::new(2, 5)));
        assert!(!Line::new(Point::new(1, 1), Point::new(3, 3)).touches(Point::new(1, 1)));
    }

    #[test]
    fn display_lists_endpoints() {
        let line = Line::new(Point::new(1, 2), Point::new(3, 4));
        assert_eq!(line.to_string(), "Line(Point(1, 2), Point(3, 4))");
    }
}
