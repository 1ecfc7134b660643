//! # Advent - Advent of Code solutions
//!
//! A library of Advent of Code puzzle solutions (2015 days 1-22 and
//! 2016 days 1-9) plus the plumbing the `advent` binary uses to find
//! inputs, run parts and report answers.
//!
//! ## Core Concepts
//!
//! - **Puzzles**: identified by a [`puzzle::PuzzleId`] (`2015-04`), each with two parts
//! - **Solutions**: types implementing [`puzzle::Solution`], one per puzzle
//! - **Registry**: the sorted table of every implemented puzzle
//!
//! ## Modules
//!
//! - [`puzzle`] - Puzzle ids, parts, answers and the `Solution` trait
//! - [`registry`] - Lookup of registered solutions
//! - [`config`] - Layered configuration from Markdown frontmatter
//! - [`input`] - Input file resolution
//! - [`runner`] - Timed execution and part reports
//! - [`solutions`] - The puzzle solutions themselves
//!
//! ## Example
//!
//! ```
//! use advent::puzzle::{Answer, Part, PuzzleId};
//! use advent::registry;
//!
//! let id = PuzzleId::parse("2015/1", None).unwrap();
//! let entry = registry::get(id).unwrap();
//! let answer = entry.solution.solve(Part::One, "(()(()(").unwrap();
//! assert_eq!(answer, Answer::Number(3));
//! ```

pub mod combinatorics;
pub mod config;
pub mod digest;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod parse;
pub mod puzzle;
pub mod registry;
pub mod runner;
pub mod solutions;
pub mod ui;

/// Default path constants for advent configuration.
pub mod paths {
    /// Project configuration file: `.advent/config.md`
    pub const CONFIG_PATH: &str = ".advent/config.md";
    /// Global configuration file, relative to the home directory
    pub const GLOBAL_CONFIG_PATH: &str = ".config/advent/config.md";
}
