//! Human-readable formatting of solutions.
//!
//! Cells are shown in the conventional 1-based numbering of the puzzle,
//! counting row by row from the top of the triangle:
//!
//! ```text
//!       1
//!      2 3
//!     4 5 6
//!    7 8 9 10
//! ```
//!
//! Consecutive jumps by the same coin are grouped into a single displayed
//! move, written as the dashed chain of cells the coin visits.

use tripeg_core::{Board, Jump, Point};
use tripeg_solver::Solution;

/// Converts a board point to its 1-based display cell number.
///
/// Row `y` starts at the triangular number `y * (y + 1) / 2`, so the cell
/// number is `1 + x + y * (y + 1) / 2`.
///
/// # Panics
///
/// Panics if `point` is not on the board.
#[must_use]
pub fn cell_number(point: Point) -> u32 {
    assert!(
        Board::in_bounds(point),
        "point {point} is outside the board"
    );
    let x = u32::from(point.x().unsigned_abs());
    let y = u32::from(point.y().unsigned_abs());
    1 + x + y * (y + 1) / 2
}

/// Converts a 1-based display cell number back to a board point.
///
/// Returns `None` if `number` does not name a cell (valid numbers are
/// `1..=10`).
#[must_use]
pub fn point_from_cell_number(number: u32) -> Option<Point> {
    (0..Board::ROWS)
        .flat_map(|y| (0..=y).map(move |x| Point::new(x, y)))
        .find(|&point| cell_number(point) == number)
}

/// Groups consecutive same-coin jumps into the chains of visited points,
/// one chain per turn.
///
/// A jump extends the current chain iff it starts where the previous jump
/// ended; otherwise it opens a new chain beginning with its own start.
#[must_use]
pub fn chain_jumps(jumps: &[Jump]) -> Vec<Vec<Point>> {
    let mut chains: Vec<Vec<Point>> = Vec::new();
    let mut last_end = None;
    for &jump in jumps {
        match chains.last_mut() {
            Some(chain) if last_end == Some(jump.start()) => chain.push(jump.end()),
            _ => chains.push(vec![jump.start(), jump.end()]),
        }
        last_end = Some(jump.end());
    }
    chains
}

/// Formats one chain of visited points as a dashed run of cell numbers,
/// e.g. `9-7-2`.
#[must_use]
pub fn format_move(chain: &[Point]) -> String {
    chain
        .iter()
        .map(|&point| cell_number(point).to_string())
        .collect::<Vec<_>>()
        .join("-")
}

/// Formats a solution as the two output lines:
///
/// ```text
/// Remove 2
/// Moves: 7-2, 1-4, 9-7-2, 6-1-4-6, 10-3
/// ```
///
/// The `Remove` line relies on the solver's guarantee that the first jump
/// lands on the initially removed cell.
#[must_use]
pub fn format_solution(solution: &Solution) -> String {
    let moves = chain_jumps(solution.jumps())
        .iter()
        .map(|chain| format_move(chain))
        .collect::<Vec<_>>()
        .join(", ");
    match solution.removed_cell() {
        Some(removed) => format!("Remove {}\nMoves: {moves}", cell_number(removed)),
        None => "Moves: (none)".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use tripeg_solver::{best_solution_from, find_minimum};

    use super::*;

    #[test]
    fn test_cell_numbering_is_the_row_major_bijection() {
        let mut expected = 1;
        for y in 0..Board::ROWS {
            for x in 0..=y {
                let point = Point::new(x, y);
                assert_eq!(cell_number(point), expected);
                assert_eq!(point_from_cell_number(expected), Some(point));
                expected += 1;
            }
        }
        assert_eq!(point_from_cell_number(0), None);
        assert_eq!(point_from_cell_number(11), None);
    }

    #[test]
    fn test_chain_jumps_groups_turns() {
        let jumps = [
            ((0, 3), (0, 1)),
            ((0, 0), (0, 2)),
            ((2, 3), (0, 3)),
            ((0, 3), (0, 1)),
        ]
        .map(|((sx, sy), (ex, ey))| Jump::new(Point::new(sx, sy), Point::new(ex, ey)));

        let chains = chain_jumps(&jumps);
        assert_eq!(chains.len(), 3);
        assert_eq!(format_move(&chains[0]), "7-2");
        assert_eq!(format_move(&chains[1]), "1-4");
        assert_eq!(format_move(&chains[2]), "9-7-2");
    }

    #[test]
    fn test_chain_count_equals_turn_count() {
        let solution = best_solution_from(Point::new(2, 3)).expect("edge removal is solvable");
        let chains = chain_jumps(solution.jumps());
        assert_eq!(u32::try_from(chains.len()).unwrap(), solution.turns());
    }

    #[test]
    fn test_format_minimum_solution() {
        let solution = find_minimum();
        assert_eq!(
            format_solution(&solution),
            "Remove 2\nMoves: 7-2, 1-4, 9-7-2, 6-1-4-6, 10-3"
        );
    }
}
