//! Triangular-grid coordinates.

use derive_more::Display;

use crate::Direction;

/// A cell coordinate on the triangular grid.
///
/// Row `y` contains `y + 1` cells, with `x` ranging over `0..=y`. Coordinates
/// are signed so that a [`step`](Self::step) may land outside the grid;
/// whether a point is actually on the board is decided by
/// [`Board::in_bounds`](crate::Board::in_bounds).
///
/// # Examples
///
/// ```
/// use tripeg_core::{Direction, Point};
///
/// let point = Point::new(1, 2);
/// assert_eq!(point.step(Direction::Right), Point::new(2, 2));
/// assert_eq!(point.step(Direction::UpLeft), Point::new(0, 1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("({x}, {y})")]
pub struct Point {
    x: i8,
    y: i8,
}

impl Point {
    /// Creates a point from its coordinates.
    ///
    /// The point is not required to lie on the board.
    #[must_use]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate (position within the row).
    #[must_use]
    pub const fn x(self) -> i8 {
        self.x
    }

    /// Returns the y coordinate (row index, growing downward).
    #[must_use]
    pub const fn y(self) -> i8 {
        self.y
    }

    /// Returns the point translated one step in `direction`.
    ///
    /// No bounds checking is performed; the result may lie outside the grid.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_translates_by_delta() {
        let origin = Point::new(1, 2);
        assert_eq!(origin.step(Direction::Right), Point::new(2, 2));
        assert_eq!(origin.step(Direction::Left), Point::new(0, 2));
        assert_eq!(origin.step(Direction::UpRight), Point::new(1, 1));
        assert_eq!(origin.step(Direction::UpLeft), Point::new(0, 1));
        assert_eq!(origin.step(Direction::DownLeft), Point::new(1, 3));
        assert_eq!(origin.step(Direction::DownRight), Point::new(2, 3));
    }

    #[test]
    fn test_step_may_leave_the_grid() {
        // Stepping is pure translation, so coordinates may go negative.
        let corner = Point::new(0, 0);
        assert_eq!(corner.step(Direction::UpRight), Point::new(0, -1));
        assert_eq!(corner.step(Direction::Left), Point::new(-1, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(3, 3).to_string(), "(3, 3)");
        assert_eq!(Point::new(-1, 0).to_string(), "(-1, 0)");
    }
}
