use std::io;

use thiserror::Error;

/// An error encountered while parsing a puzzle from text
#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ParsePuzzleError {
    #[error("invalid token \"{}\" at value {}", token, index)]
    InvalidToken { token: String, index: usize },
    #[error("value {} out of range at value {}", value, index)]
    OutOfRange { value: i32, index: usize },
    #[error("unexpected end of input after {} of 81 values", found)]
    UnexpectedEnd { found: usize },
    #[error("unexpected token \"{}\" after the last value", token)]
    UnexpectedToken { token: String },
}

#[derive(Debug, Error)]
pub enum PuzzleFromFileError {
    #[error("error reading puzzle file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParsePuzzleError),
}
