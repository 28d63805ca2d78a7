//! Grid point type.

use std::fmt;

/// A cell coordinate on the character grid.
///
/// `x` grows to the right, `y` grows downwards, and the origin is the top-left
/// corner of the surface. Coordinates are signed so that neighbours of edge
/// cells can be derived without wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point right above this one.
    pub fn up(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    /// Returns the point right below this one.
    pub fn down(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    /// Returns the point next to the left.
    pub fn left(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    /// Returns the point next to the right.
    pub fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    /// A point only touches the exact same cell.
    pub fn touches(self, other: Point) -> bool {
        self == other
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}
