//! Coin occupancy for the fixed triangular board.

use crate::{Jump, Point};

/// Coin occupancy for the fixed [`ROWS`](Self::ROWS)-row triangular board.
///
/// One boolean per valid cell, where row `y` holds cells `(0, y)..=(y, y)`.
/// The board is never resized after construction; the solver mutates it in
/// place with [`apply`](Self::apply) and restores it with
/// [`undo`](Self::undo) while backtracking.
///
/// Cells outside the grid are treated as permanently absent:
/// [`occupied`](Self::occupied) returns `false` for them, so jump legality
/// checks never need a separate bounds check on the jumped-over cell.
///
/// # Examples
///
/// ```
/// use tripeg_core::{Board, Point};
///
/// let board = Board::new(Point::new(0, 1));
/// assert_eq!(board.occupied_count(), 9);
/// assert!(!board.occupied(Point::new(0, 1)));
/// assert!(board.occupied(Point::new(3, 3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    // Rectangular backing for the jagged grid; entries with x > y are
    // invalid and stay false forever.
    cells: [[bool; 4]; 4],
}

impl Board {
    /// Number of rows in the triangular grid.
    pub const ROWS: i8 = 4;

    /// Total number of cells: `ROWS * (ROWS + 1) / 2`.
    pub const CELLS: usize = 10;

    /// Creates a board with every cell occupied except `missing`.
    ///
    /// # Panics
    ///
    /// Panics if `missing` is not on the board.
    #[must_use]
    pub fn new(missing: Point) -> Self {
        let mut cells = [[false; 4]; 4];
        for (y, row) in cells.iter_mut().enumerate() {
            for cell in &mut row[..=y] {
                *cell = true;
            }
        }
        let mut board = Self { cells };
        let (x, y) = Self::cell_index(missing);
        board.cells[y][x] = false;
        board
    }

    /// Returns `true` iff `point` lies on the board.
    ///
    /// The triangular constraint is `0 <= x <= y < ROWS`.
    #[must_use]
    pub const fn in_bounds(point: Point) -> bool {
        point.x() >= 0 && point.y() < Self::ROWS && point.x() <= point.y()
    }

    /// Returns `true` iff `point` holds a coin.
    ///
    /// Points outside the grid are never occupied.
    #[must_use]
    pub fn occupied(&self, point: Point) -> bool {
        if !Self::in_bounds(point) {
            return false;
        }
        let (x, y) = Self::cell_index(point);
        self.cells[y][x]
    }

    /// Returns the number of coins on the board.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied_points().count()
    }

    /// Returns all occupied cells in row-major order (increasing `y`, then
    /// increasing `x` within the row).
    ///
    /// The enumeration order is part of the contract: the solver's
    /// move-generation order, and therefore the order in which solutions are
    /// discovered, depends on it.
    pub fn occupied_points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..Self::ROWS)
            .flat_map(|y| (0..=y).map(move |x| Point::new(x, y)))
            .filter(|&point| self.occupied(point))
    }

    /// Applies `jump`: clears its start and middle cells and fills its end
    /// cell, removing one coin from the board.
    ///
    /// The jump must be legal for the current state (start and middle
    /// occupied, end empty and in bounds); this is asserted in debug builds.
    pub fn apply(&mut self, jump: Jump) {
        debug_assert!(self.occupied(jump.start()), "start {} must hold a coin", jump.start());
        debug_assert!(self.occupied(jump.middle()), "middle {} must hold a coin", jump.middle());
        debug_assert!(Self::in_bounds(jump.end()), "end {} must be on the board", jump.end());
        debug_assert!(!self.occupied(jump.end()), "end {} must be empty", jump.end());
        self.set(jump.start(), false);
        self.set(jump.middle(), false);
        self.set(jump.end(), true);
    }

    /// Undoes `jump`, restoring the exact state before the matching
    /// [`apply`](Self::apply): start and middle become occupied again and
    /// end becomes empty.
    pub fn undo(&mut self, jump: Jump) {
        debug_assert!(!self.occupied(jump.start()));
        debug_assert!(!self.occupied(jump.middle()));
        debug_assert!(self.occupied(jump.end()));
        self.set(jump.start(), true);
        self.set(jump.middle(), true);
        self.set(jump.end(), false);
    }

    fn set(&mut self, point: Point, value: bool) {
        let (x, y) = Self::cell_index(point);
        self.cells[y][x] = value;
    }

    fn cell_index(point: Point) -> (usize, usize) {
        assert!(
            Self::in_bounds(point),
            "point {point} is outside the board"
        );
        #[expect(clippy::cast_sign_loss)]
        let index = (point.x() as usize, point.y() as usize);
        index
    }
}
