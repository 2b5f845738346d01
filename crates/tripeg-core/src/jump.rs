//! A single coin jump.

use derive_more::Display;

use crate::Point;

/// One atomic move: the coin at `start` hops over the adjacent coin midway
/// between `start` and `end`, landing on the empty cell `end`.
///
/// `end` is always two steps from `start` along one lattice axis, so the
/// jumped-over cell is recovered as the [`middle`](Self::middle) point.
/// Legality (occupancy of the three cells) is the caller's concern; a `Jump`
/// is just the ordered pair of endpoints.
///
/// # Examples
///
/// ```
/// use tripeg_core::{Jump, Point};
///
/// let jump = Jump::new(Point::new(0, 2), Point::new(0, 0));
/// assert_eq!(jump.middle(), Point::new(0, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{start} -> {end}")]
pub struct Jump {
    start: Point,
    end: Point,
}

impl Jump {
    /// Creates a jump from `start` to `end`.
    ///
    /// `end` must be reachable from `start` by two steps along a single
    /// direction; this is asserted in debug builds.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        debug_assert_eq!((start.x() + end.x()) % 2, 0, "jump endpoints must be two steps apart");
        debug_assert_eq!((start.y() + end.y()) % 2, 0, "jump endpoints must be two steps apart");
        Self { start, end }
    }

    /// Returns the cell the jumping coin starts from.
    #[must_use]
    pub const fn start(self) -> Point {
        self.start
    }

    /// Returns the cell the jumping coin lands on.
    #[must_use]
    pub const fn end(self) -> Point {
        self.end
    }

    /// Returns the jumped-over cell, midway between `start` and `end`.
    #[must_use]
    pub const fn middle(self) -> Point {
        Point::new(
            (self.start.x() + self.end.x()) / 2,
            (self.start.y() + self.end.y()) / 2,
        )
    }
}
