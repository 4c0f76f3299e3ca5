//! Row, column, and box uniqueness checks

use itertools::iproduct;

use crate::puzzle::{Puzzle, Value, BOX_SIZE, SIZE};

/// Checks whether `candidate` may occupy the given cell without violating
/// row, column, or box uniqueness.
///
/// The cell itself is excluded from every check, so a filled cell can be
/// re-validated against the rest of the grid.
pub fn is_legal(puzzle: &Puzzle, row: usize, col: usize, candidate: Value) -> bool {
    row_allows(puzzle, row, col, candidate)
        && col_allows(puzzle, row, col, candidate)
        && box_allows(puzzle, row, col, candidate)
}

/// Checks that no other cell in the row holds `candidate`
pub fn row_allows(puzzle: &Puzzle, row: usize, col: usize, candidate: Value) -> bool {
    (0..SIZE).all(|c| c == col || puzzle.get(row, c) != Some(candidate))
}

/// Checks that no other cell in the column holds `candidate`
pub fn col_allows(puzzle: &Puzzle, row: usize, col: usize, candidate: Value) -> bool {
    (0..SIZE).all(|r| r == row || puzzle.get(r, col) != Some(candidate))
}

/// Checks that no other cell in the surrounding 3×3 box holds `candidate`
pub fn box_allows(puzzle: &Puzzle, row: usize, col: usize, candidate: Value) -> bool {
    let box_row = row - row % BOX_SIZE;
    let box_col = col - col % BOX_SIZE;
    iproduct!(box_row..box_row + BOX_SIZE, box_col..box_col + BOX_SIZE)
        .all(|(r, c)| (r, c) == (row, col) || puzzle.get(r, c) != Some(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row() {
        let mut puzzle = Puzzle::new();
        puzzle.set(2, 4, Some(7));
        assert!(!row_allows(&puzzle, 2, 0, 7));
        assert!(row_allows(&puzzle, 2, 0, 6));
        assert!(row_allows(&puzzle, 3, 0, 7));
    }

    #[test]
    fn col() {
        let mut puzzle = Puzzle::new();
        puzzle.set(2, 4, Some(7));
        assert!(!col_allows(&puzzle, 8, 4, 7));
        assert!(col_allows(&puzzle, 8, 4, 6));
        assert!(col_allows(&puzzle, 8, 5, 7));
    }

    #[test]
    fn same_box() {
        let mut puzzle = Puzzle::new();
        puzzle.set(4, 4, Some(7));
        assert!(!box_allows(&puzzle, 3, 3, 7));
        assert!(!box_allows(&puzzle, 5, 5, 7));
        assert!(box_allows(&puzzle, 3, 3, 6));
        // same row, different box
        assert!(box_allows(&puzzle, 4, 6, 7));
    }

    #[test]
    fn excludes_own_cell() {
        let mut puzzle = Puzzle::new();
        puzzle.set(0, 0, Some(5));
        assert!(is_legal(&puzzle, 0, 0, 5));
        assert!(!is_legal(&puzzle, 0, 1, 5));
        assert!(!is_legal(&puzzle, 1, 0, 5));
        assert!(!is_legal(&puzzle, 2, 2, 5));
    }

    #[test]
    fn all_constraints() {
        let mut puzzle = Puzzle::new();
        puzzle.set(0, 8, Some(1));
        puzzle.set(8, 0, Some(2));
        puzzle.set(1, 1, Some(3));
        assert!(!is_legal(&puzzle, 0, 0, 1));
        assert!(!is_legal(&puzzle, 0, 0, 2));
        assert!(!is_legal(&puzzle, 0, 0, 3));
        assert!(is_legal(&puzzle, 0, 0, 4));
    }
}
