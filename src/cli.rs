//! CLI argument definitions for advent.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use advent::puzzle::Part;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_SHA"),
    " ",
    env!("BUILD_DATE"),
    ")"
);

#[derive(Parser)]
#[command(name = "advent")]
#[command(version = VERSION)]
#[command(about = "Advent of Code puzzle solutions", long_about = None)]
#[command(
    after_help = "PUZZLE IDS:\n    2015/4, 2015-04, 2015:4, y2015d04, or just 4 when defaults.year is set\n\nINPUTS:\n    Inputs are read from inputs.dir (default ./inputs) using inputs.layout\n    (default {year}/day{day:02}.txt). Configure them in .advent/config.md\n    or set ADVENT_INPUTS."
)]
pub struct Cli {
    /// Only print answers and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solve one puzzle
    Run {
        /// Puzzle to solve, e.g. 2015/4
        #[arg(value_name = "PUZZLE")]
        puzzle: String,
        /// Solve only this part (1 or 2)
        #[arg(long, short)]
        part: Option<Part>,
        /// Read input from this file instead of the configured inputs directory
        #[arg(long, short, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Solve every registered puzzle that has an input file
    All {
        /// Restrict to one year
        #[arg(long, short)]
        year: Option<u16>,
    },
    /// List registered puzzles and whether their input is present
    List {
        /// Restrict to one year
        #[arg(long, short)]
        year: Option<u16>,
    },
    /// Show the effective configuration
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_enum)]
        shell: Shell,
    },
}
