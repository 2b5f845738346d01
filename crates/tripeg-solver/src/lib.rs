//! Exhaustive search for minimum-turn solutions of the coin-jumping puzzle.
//!
//! The solver explores every legal jump sequence from a starting board by
//! depth-first backtracking, reporting each terminal single-coin state to an
//! accumulator. [`find_minimum`] drives the search across the three
//! symmetry-representative initial removals and returns the solution with
//! the fewest turns, where a turn is a maximal run of consecutive jumps made
//! by the same coin.
//!
//! # Examples
//!
//! ```
//! use tripeg_solver::find_minimum;
//!
//! let solution = find_minimum();
//! assert_eq!(solution.turns(), 5);
//! ```

pub use self::{search::*, solution::*};

mod search;
mod solution;
