//! Movement axes of the triangular lattice.

/// One of the six directions a coin can move in.
///
/// Rows grow downward, so the two "up" directions decrease `y` and the two
/// "down" directions increase it. Names describe the visual direction on a
/// triangle drawn point-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(1, 0)`: next cell in the same row.
    Right,
    /// `(0, -1)`: same x in the row above.
    UpRight,
    /// `(-1, -1)`: previous x in the row above.
    UpLeft,
    /// `(-1, 0)`: previous cell in the same row.
    Left,
    /// `(0, 1)`: same x in the row below.
    DownLeft,
    /// `(1, 1)`: next x in the row below.
    DownRight,
}

impl Direction {
    /// All six directions, in move-generation order.
    ///
    /// The order is fixed: together with the row-major enumeration of
    /// [`Board::occupied_points`](crate::Board::occupied_points) it
    /// determines the order in which the solver discovers solutions.
    pub const ALL: [Self; 6] = [
        Self::Right,
        Self::UpRight,
        Self::UpLeft,
        Self::Left,
        Self::DownLeft,
        Self::DownRight,
    ];

    /// Returns the coordinate delta `(dx, dy)` of one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::Right => (1, 0),
            Self::UpRight => (0, -1),
            Self::UpLeft => (-1, -1),
            Self::Left => (-1, 0),
            Self::DownLeft => (0, 1),
            Self::DownRight => (1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_directions_are_distinct_unit_deltas() {
        assert_eq!(Direction::ALL.len(), 6);
        for (i, a) in Direction::ALL.iter().enumerate() {
            let (dx, dy) = a.delta();
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert_ne!((dx, dy), (0, 0));
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.delta(), b.delta());
            }
        }
    }

    #[test]
    fn test_opposite_pairs_cancel() {
        let pairs = [
            (Direction::Right, Direction::Left),
            (Direction::UpRight, Direction::DownLeft),
            (Direction::UpLeft, Direction::DownRight),
        ];
        for (a, b) in pairs {
            let (ax, ay) = a.delta();
            let (bx, by) = b.delta();
            assert_eq!((ax + bx, ay + by), (0, 0));
        }
    }
}
