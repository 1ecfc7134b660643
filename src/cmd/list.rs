//! List command: registered puzzles and their inputs

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use advent::config::Config;
use advent::input;
use advent::registry;
use advent::ui::{colors, format};

use crate::cmd::ui::{Output, OutputMode};

const TITLE_WIDTH: usize = 36;

#[derive(Debug, Serialize)]
struct ListedPuzzle {
    puzzle: String,
    title: &'static str,
    input: bool,
    path: PathBuf,
}

fn listed(config: &Config, year: Option<u16>) -> Result<Vec<ListedPuzzle>> {
    registry::for_year(year)
        .map(|entry| {
            let path = input::input_path(config, entry.id)?;
            Ok(ListedPuzzle {
                puzzle: entry.id.to_string(),
                title: entry.title(),
                input: path.exists(),
                path,
            })
        })
        .collect()
}

pub fn cmd_list(config: &Config, output: &Output, year: Option<u16>) -> Result<()> {
    let puzzles = listed(config, year.or(config.defaults.year))?;

    if output.mode() == OutputMode::Json {
        output.json(&puzzles);
        return Ok(());
    }

    for puzzle in &puzzles {
        let status = if puzzle.input {
            output.paint("input", colors::success)
        } else {
            output.paint("missing", colors::secondary)
        };
        output.info(&format!(
            "{}  {:<width$}  {}",
            output.paint(&puzzle.puzzle, colors::identifier),
            format::truncate_title(puzzle.title, TITLE_WIDTH),
            status,
            width = TITLE_WIDTH
        ));
    }

    let present = puzzles.iter().filter(|p| p.input).count();
    output.detail(&format!(
        "{} puzzles, {} with input",
        puzzles.len(),
        present
    ));
    Ok(())
}
