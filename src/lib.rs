//! Solve 9×9 Sudoku puzzles with backtracking search

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod error;
pub mod puzzle;
pub mod solve;

mod parse;
