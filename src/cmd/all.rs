//! All command: solve every puzzle that has an input file

use anyhow::Result;

use advent::config::Config;
use advent::input;
use advent::puzzle::{Part, PuzzleId};
use advent::registry;
use advent::runner::{self, PartReport, Summary};

use crate::cmd::ui::Output;

/// Solve every registered puzzle of `year` (or of the configured default
/// year, or of every year). Puzzles without an input file are skipped.
pub fn cmd_all(config: &Config, output: &Output, year: Option<u16>) -> Result<Summary> {
    let year = year.or(config.defaults.year);
    if let Some(year) = year {
        PuzzleId::new(year, 1)?;
    }

    let reports = collect_reports(config, year)?;
    if reports.is_empty() {
        match year {
            Some(year) => output.warn(&format!("No puzzles registered for {}", year)),
            None => output.warn("No puzzles registered"),
        }
    }

    output.reports(&reports);
    Ok(Summary::of(&reports))
}

fn collect_reports(config: &Config, year: Option<u16>) -> Result<Vec<PartReport>> {
    let mut reports = Vec::new();
    for entry in registry::for_year(year) {
        let path = input::input_path(config, entry.id)?;
        if path.exists() {
            let text = input::read_input(&path)?;
            reports.extend(runner::run_puzzle(entry, &Part::BOTH, &text));
        } else {
            let reason = format!("no input at {}", path.display());
            reports.extend(runner::skip_puzzle(entry, &Part::BOTH, &reason));
        }
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collect_skips_missing_inputs() {
        let tmp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.inputs.dir = tmp.path().to_path_buf();
        fs::create_dir_all(tmp.path().join("2016")).unwrap();
        fs::write(tmp.path().join("2016/day01.txt"), "R5, L5, R5, R3\n").unwrap();

        let reports = collect_reports(&config, Some(2016)).unwrap();
        assert_eq!(reports.len(), 18);

        let summary = Summary::of(&reports);
        assert_eq!(summary.skipped, 16);
        assert_eq!(reports[0].answer.as_ref().unwrap().to_string(), "12");
        assert!(reports[2].skipped);
    }
}
