#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use sudoku::error::PuzzleFromFileError;
use sudoku::puzzle::Puzzle;
use sudoku::solve::solve;

use crate::options::{Options, Source};

mod options;

const DEFAULT_PUZZLE_DIR: &str = "txt";
const DEFAULT_PUZZLE_FILE: &str = "sudoku-test1.txt";

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let path = match options.source() {
        Source::File(path) => path.clone(),
        Source::Prompt => prompt_for_path()?,
    };
    println!("Reading puzzle from \"{}\"", path.display());
    let mut puzzle = Puzzle::from_file(&path)
        .with_context(|| format!("could not read puzzle from \"{}\"", path.display()))?;
    let reference = read_reference_solution(&options, &path)?;
    println!("\nPuzzle:\n");
    print!("{}", puzzle);
    println!("\nSolution:\n");
    let start = Instant::now();
    let result = solve(&mut puzzle);
    let elapsed = start.elapsed();
    if result.is_solved() {
        println!("{}", puzzle);
    } else {
        println!("No Solution");
    }
    if let Some(reference) = reference {
        if puzzle == reference {
            println!("Solver works! This is the solution!");
        } else {
            println!("Not the correct solution. Try again.");
        }
    }
    println!("Time used: {} seconds.", elapsed.as_secs_f64());
    Ok(())
}

fn prompt_for_path() -> Result<PathBuf> {
    println!(
        "\nEnter puzzle text file (assumes file is in \"{}\" folder).",
        DEFAULT_PUZZLE_DIR
    );
    println!(
        "Pressing <Enter> will run the file \"{}\".",
        DEFAULT_PUZZLE_FILE
    );
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let name = match line.trim() {
        "" => DEFAULT_PUZZLE_FILE,
        name => name,
    };
    Ok(Path::new(DEFAULT_PUZZLE_DIR).join(name))
}

/// Reads the reference solution named with `--solution`, defaulting to
/// "<puzzle>-solution.<ext>" next to the puzzle file. A missing file is not
/// an error since the comparison is advisory.
fn read_reference_solution(options: &Options, puzzle_path: &Path) -> Result<Option<Puzzle>> {
    let path = match options.solution() {
        Some(path) => path.to_path_buf(),
        None => solution_path(puzzle_path),
    };
    match Puzzle::from_file(&path) {
        Ok(puzzle) => Ok(Some(puzzle)),
        Err(PuzzleFromFileError::Io(ref e)) if e.kind() == io::ErrorKind::NotFound => {
            println!("No reference solution at \"{}\"", path.display());
            Ok(None)
        }
        Err(e) => {
            Err(e).with_context(|| format!("could not read solution from \"{}\"", path.display()))
        }
    }
}

fn solution_path(puzzle_path: &Path) -> PathBuf {
    let mut name = puzzle_path.file_stem().unwrap_or_default().to_os_string();
    name.push("-solution");
    if let Some(ext) = puzzle_path.extension() {
        name.push(".");
        name.push(ext);
    }
    puzzle_path.with_file_name(name)
}
