use tripeg_core::{Jump, Point};

/// A complete solution: a jump sequence that reduces the starting board to a
/// single coin, together with its turn count.
///
/// The turn count equals the number of maximal runs of consecutive jumps
/// made by the same coin: one for the very first jump, plus one for every
/// later jump whose start differs from the previous jump's end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    turns: u32,
    jumps: Vec<Jump>,
}

impl Solution {
    /// Creates a solution from its turn count and jump sequence.
    #[must_use]
    pub const fn new(turns: u32, jumps: Vec<Jump>) -> Self {
        Self { turns, jumps }
    }

    /// Returns the number of turns the solution takes.
    #[must_use]
    pub const fn turns(&self) -> u32 {
        self.turns
    }

    /// Returns the jumps in the order they are made.
    #[must_use]
    pub fn jumps(&self) -> &[Jump] {
        &self.jumps
    }

    /// Returns the cell that was initially removed from the board.
    ///
    /// The first jump necessarily lands on the only empty cell, so this is
    /// the first jump's end. Returns `None` for an empty jump sequence.
    #[must_use]
    pub fn removed_cell(&self) -> Option<Point> {
        self.jumps.first().map(|jump| jump.end())
    }
}

/// Best-so-far record shared across all recursive branches and all
/// top-level initial-removal attempts.
///
/// [`offer`](Self::offer) keeps the first strictly better candidate it sees,
/// snapshotting the jump list: the buffer handed to the accumulator keeps
/// being mutated by the ongoing backtracking and must not be aliased.
///
/// # Examples
///
/// ```
/// use tripeg_core::{Board, Point};
/// use tripeg_solver::{BestSolution, Solution, explore};
///
/// let mut best = BestSolution::new();
/// let mut board = Board::new(Point::new(0, 1));
/// explore(&mut board, &mut |turns, jumps| best.offer(turns, jumps));
/// assert_eq!(best.best().map(Solution::turns), Some(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BestSolution {
    best: Option<Solution>,
}

impl BestSolution {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self { best: None }
    }

    /// Records `jumps` as the new best solution if `turns` strictly improves
    /// on the current best.
    pub fn offer(&mut self, turns: u32, jumps: &[Jump]) {
        if self.best.as_ref().is_none_or(|best| turns < best.turns()) {
            self.best = Some(Solution::new(turns, jumps.to_vec()));
        }
    }

    /// Returns the best solution seen so far, if any.
    #[must_use]
    pub fn best(&self) -> Option<&Solution> {
        self.best.as_ref()
    }

    /// Consumes the record, yielding the best solution seen.
    #[must_use]
    pub fn into_solution(self) -> Option<Solution> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jump(start: (i8, i8), end: (i8, i8)) -> Jump {
        Jump::new(Point::new(start.0, start.1), Point::new(end.0, end.1))
    }

    #[test]
    fn test_offer_keeps_strict_improvements_only() {
        let mut best = BestSolution::new();
        assert!(best.best().is_none());

        let first = [jump((0, 2), (0, 0))];
        best.offer(4, &first);
        assert_eq!(best.best().map(Solution::turns), Some(4));

        // Equal turn count does not replace the stored solution.
        let tie = [jump((0, 3), (0, 1))];
        best.offer(4, &tie);
        assert_eq!(best.best().map(Solution::jumps), Some(&first[..]));

        let better = [jump((2, 2), (0, 0))];
        best.offer(3, &better);
        assert_eq!(best.best().map(Solution::turns), Some(3));
        assert_eq!(best.best().map(Solution::jumps), Some(&better[..]));
    }

    #[test]
    fn test_offer_snapshots_the_jump_list() {
        let mut best = BestSolution::new();
        let mut jumps = vec![jump((0, 2), (0, 0))];
        best.offer(1, &jumps);

        // Mutating the caller's buffer must not affect the stored solution.
        jumps.push(jump((2, 2), (0, 2)));
        jumps.clear();
        assert_eq!(best.best().map(|s| s.jumps().len()), Some(1));
    }

    #[test]
    fn test_removed_cell_is_first_jump_end() {
        let solution = Solution::new(2, vec![jump((0, 3), (0, 1)), jump((0, 0), (0, 2))]);
        assert_eq!(solution.removed_cell(), Some(Point::new(0, 1)));
        assert_eq!(Solution::new(0, Vec::new()).removed_cell(), None);
    }
}
