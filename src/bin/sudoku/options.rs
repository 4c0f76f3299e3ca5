use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ArgMatches;

#[derive(Clone)]
pub(crate) struct Options {
    source: Source,
    solution: Option<PathBuf>,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let options = Self {
            source: if let Some(path) = matches.value_of("input") {
                Source::File(path.into())
            } else {
                Source::Prompt
            },
            solution: matches.value_of("solution").map(PathBuf::from),
        };
        Ok(options)
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn solution(&self) -> Option<&Path> {
        self.solution.as_deref()
    }
}

#[derive(Clone)]
pub(crate) enum Source {
    /// Read the puzzle from the given file
    File(PathBuf),
    /// Ask for a file name on standard input
    Prompt,
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("Sudoku")
        .author("Cameron Steffen <cam.steffen94@gmail.com>")
        .help_message("Solve Sudoku Puzzles")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .help("read a Sudoku puzzle from a file")
                .display_order(1),
        )
        .arg(
            Arg::with_name("solution")
                .short("s")
                .long("solution")
                .takes_value(true)
                .value_name("PATH")
                .help("compare the result against a reference solution"),
        )
}
