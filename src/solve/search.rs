use crate::puzzle::{Puzzle, Value, SIZE};
use crate::solve::constraint::is_legal;

/// Fills every empty cell of the puzzle, or returns `false` if no legal
/// completion exists, leaving the puzzle as it was
pub(crate) fn search_solution(puzzle: &mut Puzzle) -> bool {
    search_next(puzzle, 0, 0)
}

/// Searches cells from `(row, col)` onward in row-major order. Candidates
/// are tried in ascending order and every assignment is undone before a
/// branch reports failure.
fn search_next(puzzle: &mut Puzzle, row: usize, col: usize) -> bool {
    if row == SIZE {
        return true;
    }
    let (next_row, next_col) = if col == SIZE - 1 {
        (row + 1, 0)
    } else {
        (row, col + 1)
    };
    if puzzle.get(row, col).is_some() {
        return search_next(puzzle, next_row, next_col);
    }
    for candidate in 1..=SIZE as Value {
        if !is_legal(puzzle, row, col, candidate) {
            continue;
        }
        debug!("Guessing with {} at ({}, {})", candidate, row, col);
        puzzle.set(row, col, Some(candidate));
        if search_next(puzzle, next_row, next_col) {
            return true;
        }
        debug!("Guess failed");
        puzzle.set(row, col, None);
    }
    false
}
