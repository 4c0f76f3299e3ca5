//! Solve Sudoku puzzles

pub use self::constraint::{box_allows, col_allows, is_legal, row_allows};

use crate::puzzle::Puzzle;
use crate::solve::search::search_solution;

mod constraint;
mod search;

pub enum SolveResult {
    /// The puzzle cannot be solved - there may be an error in the puzzle
    Unsolvable,
    /// The puzzle was solved in place
    Solved,
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved)
    }
}

/// Solves the puzzle in place with backtracking search.
///
/// Cells are visited in row-major order and candidates tried in ascending
/// order, so a puzzle with more than one completion always yields the same
/// one. If the puzzle cannot be solved the grid is left exactly as it was.
pub fn solve(puzzle: &mut Puzzle) -> SolveResult {
    if !givens_are_legal(puzzle) {
        return SolveResult::Unsolvable;
    }
    info!("Begin backtracking");
    if search_solution(puzzle) {
        SolveResult::Solved
    } else {
        SolveResult::Unsolvable
    }
}

/// Re-validates every filled cell against the rest of the grid, catching
/// inputs whose givens already conflict before any search effort
fn givens_are_legal(puzzle: &Puzzle) -> bool {
    puzzle
        .cells()
        .all(|((row, col), value)| value.map_or(true, |value| is_legal(puzzle, row, col, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Value, SIZE};

    #[test]
    fn empty_puzzle() {
        let mut puzzle = Puzzle::new();
        assert!(solve(&mut puzzle).is_solved());
        let first_row: Vec<_> = puzzle.rows().next().unwrap().to_vec();
        let expected: Vec<_> = (1..=SIZE as Value).map(Some).collect();
        assert_eq!(first_row, expected);
        assert!(puzzle.cells().all(|(_, value)| value.is_some()));
    }

    #[test]
    fn single_empty_cell() {
        let mut puzzle = Puzzle::new();
        for col in 0..SIZE - 1 {
            puzzle.set(0, col, Some(col as Value + 1));
        }
        assert!(solve(&mut puzzle).is_solved());
        assert_eq!(puzzle.get(0, SIZE - 1), Some(9));
    }

    #[test]
    fn conflicting_givens() {
        let mut puzzle = Puzzle::new();
        puzzle.set(3, 1, Some(5));
        puzzle.set(3, 7, Some(5));
        let before = puzzle.clone();
        assert!(!solve(&mut puzzle).is_solved());
        assert_eq!(puzzle, before);
    }

    #[test]
    fn conflicting_givens_in_box() {
        let mut puzzle = Puzzle::new();
        puzzle.set(0, 0, Some(5));
        puzzle.set(1, 1, Some(5));
        let before = puzzle.clone();
        assert!(!solve(&mut puzzle).is_solved());
        assert_eq!(puzzle, before);
    }

    #[test]
    fn solved_puzzle_is_kept() {
        let mut puzzle = Puzzle::new();
        assert!(solve(&mut puzzle).is_solved());
        let before = puzzle.clone();
        assert!(solve(&mut puzzle).is_solved());
        assert_eq!(puzzle, before);
    }
}
