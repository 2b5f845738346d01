use tinyvec::ArrayVec;
use tripeg_core::{Board, Direction, Jump, Point};

use crate::{BestSolution, Solution};

/// The three initial removals that are pairwise non-equivalent under the
/// board's rotation/reflection symmetry group: a corner, an edge cell next
/// to a corner, and the interior cell.
///
/// Every other removal is carried onto one of these by a symmetry of the
/// triangle, so exploring just the three covers the whole puzzle.
pub const CANONICAL_REMOVALS: [Point; 3] =
    [Point::new(0, 0), Point::new(0, 1), Point::new(1, 2)];

/// Exhaustively explores every legal jump sequence from `board`, invoking
/// `accumulate(turns, jumps)` for each terminal state with exactly one coin
/// left.
///
/// The board is mutated destructively during the search and restored by
/// backtracking; when this function returns it is exactly as it was passed
/// in. The jump list handed to `accumulate` is the search's own scratch
/// buffer, only valid for the duration of the call — callers that keep a
/// solution must copy it (see [`BestSolution::offer`]).
///
/// # Examples
///
/// ```
/// use tripeg_core::{Board, Point};
/// use tripeg_solver::explore;
///
/// let mut solutions = 0_u64;
/// let mut board = Board::new(Point::new(0, 1));
/// explore(&mut board, &mut |_turns, jumps| {
///     assert_eq!(jumps.len(), Board::CELLS - 2);
///     solutions += 1;
/// });
/// assert!(solutions > 0);
/// ```
pub fn explore<F>(board: &mut Board, accumulate: &mut F)
where
    F: FnMut(u32, &[Jump]),
{
    let mut jumps = Vec::with_capacity(Board::CELLS - 2);
    explore_step(board, None, 0, &mut jumps, accumulate);
}

/// One level of the depth-first search.
///
/// `last_end` is where the previous jump landed; a jump starting there
/// continues the current turn instead of beginning a new one. Every mutation
/// performed before the recursive call is undone after it returns, so the
/// board and the jump list are bit-for-bit unchanged when this function
/// exits.
fn explore_step<F>(
    board: &mut Board,
    last_end: Option<Point>,
    turns: u32,
    jumps: &mut Vec<Jump>,
    accumulate: &mut F,
) where
    F: FnMut(u32, &[Jump]),
{
    let filled: ArrayVec<[Point; Board::CELLS]> = board.occupied_points().collect();
    if filled.len() == 1 {
        accumulate(turns, jumps);
        return;
    }

    for &start in &filled {
        for direction in Direction::ALL {
            let middle = start.step(direction);
            let end = middle.step(direction);

            // An out-of-grid middle is never occupied, so only the landing
            // cell needs an explicit bounds check.
            if !Board::in_bounds(end) || !board.occupied(middle) || board.occupied(end) {
                continue;
            }

            let jump = Jump::new(start, end);
            board.apply(jump);
            jumps.push(jump);
            let turns = turns + u32::from(last_end != Some(start));

            explore_step(board, Some(end), turns, jumps, accumulate);

            board.undo(jump);
            jumps.pop();
        }
    }
}

/// Explores the whole game tree for a single initial removal and returns
/// the minimum-turn solution, or `None` if no jump sequence from that start
/// ever reaches a single coin.
///
/// Removing a corner or the interior cell leaves the board unsolvable, so
/// `None` is a real outcome, not just a theoretical one.
#[must_use]
pub fn best_solution_from(missing: Point) -> Option<Solution> {
    let mut best = BestSolution::new();
    let mut board = Board::new(missing);
    explore(&mut board, &mut |turns, jumps| best.offer(turns, jumps));
    best.into_solution()
}

/// Searches from each of the [`CANONICAL_REMOVALS`] and returns the global
/// minimum-turn solution.
///
/// # Panics
///
/// Panics if no canonical removal admits a solution; for the fixed 4-row
/// board the edge removal `(0, 1)` always does.
#[must_use]
pub fn find_minimum() -> Solution {
    let mut best = BestSolution::new();
    for missing in CANONICAL_REMOVALS {
        let mut board = Board::new(missing);
        explore(&mut board, &mut |turns, jumps| best.offer(turns, jumps));
    }
    best.into_solution()
        .expect("an edge removal always admits a solution")
}
