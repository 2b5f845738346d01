//! Core data structures for the triangular coin-jumping puzzle.
//!
//! This crate provides the board model shared by the solver and the
//! presentation layer:
//!
//! - [`point`]: signed `(x, y)` coordinates on the triangular grid
//! - [`direction`]: the six movement axes of the triangular lattice
//! - [`jump`]: one atomic move (a coin hopping over an adjacent coin)
//! - [`board`]: coin occupancy for the fixed 4-row board, with the in-place
//!   apply/undo mutations the solver's backtracking relies on
//!
//! # Examples
//!
//! ```
//! use tripeg_core::{Board, Direction, Jump, Point};
//!
//! // Start with the top corner removed.
//! let mut board = Board::new(Point::new(0, 0));
//! assert_eq!(board.occupied_count(), Board::CELLS - 1);
//!
//! // Cell (0, 2) jumps over (0, 1) into the empty corner.
//! let start = Point::new(0, 2);
//! let end = start.step(Direction::UpRight).step(Direction::UpRight);
//! board.apply(Jump::new(start, end));
//! assert_eq!(board.occupied_count(), Board::CELLS - 2);
//! ```

pub mod board;
pub mod direction;
pub mod jump;
pub mod point;

// Re-export commonly used types
pub use self::{board::Board, direction::Direction, jump::Jump, point::Point};
