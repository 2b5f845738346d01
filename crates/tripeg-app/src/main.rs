//! Command-line solver for the triangular coin-jumping puzzle.
//!
//! Starts from a full 4-row triangle of coins with one removed, searches
//! every legal jump sequence, and prints the solution with the fewest turns
//! as a `Remove <n>` line followed by a `Moves:` line.
//!
//! # Usage
//!
//! Search the three symmetry-representative removals (the full puzzle):
//!
//! ```sh
//! cargo run --bin tripeg
//! ```
//!
//! Search from one specific removal, named by its 1-based cell number:
//!
//! ```sh
//! cargo run --bin tripeg -- --remove 2
//! ```

use std::process;

use clap::Parser;
use tripeg_solver::{Solution, best_solution_from, find_minimum};

mod display;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Initial removal to solve for, as a 1-based cell number (1-10).
    /// Without this, the three symmetry-representative removals are
    /// searched.
    #[arg(long, value_name = "CELL")]
    remove: Option<u32>,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
enum AppError {
    /// The requested cell number does not name a board cell.
    #[display("cell {number} is not on the board (cell numbers are 1-10)")]
    InvalidCell {
        /// The rejected cell number.
        number: u32,
    },
    /// The requested removal admits no solution (corners and the center
    /// cell are unsolvable).
    #[display("removing cell {number} leaves the board unsolvable")]
    Unsolvable {
        /// The cell number of the unsolvable removal.
        number: u32,
    },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match solve(&args) {
        Ok(solution) => println!("{}", display::format_solution(&solution)),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

fn solve(args: &Args) -> Result<Solution, AppError> {
    if let Some(number) = args.remove {
        let missing =
            display::point_from_cell_number(number).ok_or(AppError::InvalidCell { number })?;
        log::debug!("searching from removal of cell {number} at {missing}");
        return best_solution_from(missing).ok_or(AppError::Unsolvable { number });
    }

    let solution = find_minimum();
    log::debug!(
        "minimum over canonical removals: {} turns, {} jumps",
        solution.turns(),
        solution.jumps().len()
    );
    Ok(solution)
}
