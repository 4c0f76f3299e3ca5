//! Parse puzzles from text

use crate::error::ParsePuzzleError;
use crate::puzzle::{Puzzle, Value, SIZE};

/// parse a `Puzzle` from a string
pub(crate) fn parse_puzzle(str: &str) -> Result<Puzzle, ParsePuzzleError> {
    let mut tokens = str.split_whitespace();
    let mut puzzle = Puzzle::new();
    for index in 0..SIZE * SIZE {
        let token = tokens
            .next()
            .ok_or(ParsePuzzleError::UnexpectedEnd { found: index })?;
        let value: i32 = token.parse().map_err(|_| ParsePuzzleError::InvalidToken {
            token: token.to_string(),
            index,
        })?;
        if !(0..=SIZE as i32).contains(&value) {
            return Err(ParsePuzzleError::OutOfRange { value, index });
        }
        if value != 0 {
            puzzle.set(index / SIZE, index % SIZE, Some(value as Value));
        }
    }
    if let Some(token) = tokens.next() {
        return Err(ParsePuzzleError::UnexpectedToken {
            token: token.to_string(),
        });
    }
    Ok(puzzle)
}
