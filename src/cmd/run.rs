//! Run command: solve one puzzle

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use advent::config::Config;
use advent::input;
use advent::puzzle::{Part, PuzzleId};
use advent::registry;
use advent::runner::{self, Summary};

use crate::cmd::ui::Output;

/// Solve `puzzle` (both parts unless `part` is given).
///
/// `input_file` bypasses the configured inputs directory.
pub fn cmd_run(
    config: &Config,
    output: &Output,
    puzzle: &str,
    part: Option<Part>,
    input_file: Option<&Path>,
) -> Result<Summary> {
    let id = PuzzleId::parse(puzzle, config.defaults.year)?;
    let entry = registry::get(id)?;
    debug!(puzzle = %id, title = entry.title(), "running");

    let text = match input_file {
        Some(path) => input::read_input(path)?,
        None => input::load(config, id)?,
    };

    let parts = match part {
        Some(part) => vec![part],
        None => Part::BOTH.to_vec(),
    };

    let reports = runner::run_puzzle(entry, &parts, &text);
    output.reports(&reports);
    Ok(Summary::of(&reports))
}
