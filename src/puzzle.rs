//! Sudoku puzzles

use std::fmt;
use std::fmt::Display;
use std::fs;
use std::path::Path;

use itertools::Itertools;

use crate::error::{ParsePuzzleError, PuzzleFromFileError};
use crate::parse::parse_puzzle;

/// A digit 1 through 9
pub type Value = u8;

/// The width and height of a puzzle
pub const SIZE: usize = 9;

/// The width and height of a box, one third of the puzzle
pub(crate) const BOX_SIZE: usize = 3;

/// A 9×9 Sudoku grid where every cell holds a digit or is empty.
///
/// Two puzzles are equal when all 81 cells match exactly, empty cells
/// included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Puzzle {
    cells: [[Option<Value>; SIZE]; SIZE],
}

impl Puzzle {
    /// Creates an empty puzzle
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a puzzle from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PuzzleFromFileError> {
        let buf = fs::read_to_string(path)?;
        let puzzle = Self::parse(&buf)?;
        Ok(puzzle)
    }

    /// Parses a puzzle from 81 whitespace-delimited values in row-major
    /// order, where 0 denotes an empty cell
    pub fn parse(str: &str) -> Result<Self, ParsePuzzleError> {
        parse_puzzle(str)
    }

    /// Returns the value at the given cell
    pub fn get(&self, row: usize, col: usize) -> Option<Value> {
        assert!(row < SIZE && col < SIZE);
        self.cells[row][col]
    }

    /// Sets or clears the value at the given cell
    pub fn set(&mut self, row: usize, col: usize, value: Option<Value>) {
        assert!(row < SIZE && col < SIZE);
        self.cells[row][col] = value;
    }

    /// Iterates over the rows of the grid from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Value>]> {
        self.cells.iter().map(|row| &row[..])
    }

    /// Iterates over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Option<Value>)> + '_ {
        (0..SIZE)
            .cartesian_product(0..SIZE)
            .map(move |(row, col)| ((row, col), self.cells[row][col]))
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.rows().enumerate() {
            for (col, value) in cells.iter().enumerate() {
                match value {
                    Some(value) => write!(f, "{} ", value)?,
                    None => write!(f, "  ")?,
                }
                if col % BOX_SIZE == BOX_SIZE - 1 && col != SIZE - 1 {
                    write!(f, "| ")?;
                }
            }
            writeln!(f)?;
            if row % BOX_SIZE == BOX_SIZE - 1 && row != SIZE - 1 {
                writeln!(f, "------+-------+------")?;
            }
        }
        Ok(())
    }
}
