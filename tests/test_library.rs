//! Library-level tests across the registry, runner and config

use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use advent::config::{Config, OutputFormat, INPUTS_ENV};
use advent::puzzle::{Answer, Part, PuzzleId};
use advent::registry;
use advent::runner::{self, Summary};

#[test]
fn test_every_puzzle_survives_empty_input() {
    for entry in registry::all() {
        for input in ["", "\n", "   \n\n"] {
            let reports = runner::run_puzzle(entry, &Part::BOTH, input);
            assert_eq!(reports.len(), 2, "{}", entry.id);
            for report in &reports {
                if let Some(error) = &report.error {
                    assert!(!error.is_empty(), "{} has an empty error", entry.id);
                }
            }
        }
    }
}

#[test]
fn test_every_puzzle_rejects_binary_noise() {
    // mining puzzles would hash forever on a non-empty key
    let mining = [
        PuzzleId::new(2015, 4).unwrap(),
        PuzzleId::new(2015, 10).unwrap(),
        PuzzleId::new(2015, 11).unwrap(),
        PuzzleId::new(2016, 5).unwrap(),
    ];
    for entry in registry::all().iter().filter(|e| !mining.contains(&e.id)) {
        let reports = runner::run_puzzle(entry, &Part::BOTH, "\u{1}\u{2}~~~\n@@@\n");
        assert_eq!(reports.len(), 2, "{}", entry.id);
    }
}

#[test]
fn test_runner_across_years() {
    let cases = [
        ((2015, 1), "))(((((", Answer::Number(3)),
        ((2015, 3), "^v^v^v^v^v", Answer::Number(2)),
        ((2015, 5), "ugknbfddgicrmopn\naaa\njchzalrnumimnmhp\n", Answer::Number(2)),
        ((2015, 8), "\"\"\n\"abc\"\n\"aaa\\\"aaa\"\n\"\\x27\"\n", Answer::Number(12)),
        ((2016, 3), "5 10 25\n3 4 5\n", Answer::Number(1)),
        ((2016, 3), "4000000000 4000000000 1\n", Answer::Number(1)),
        ((2016, 9), "X(8x2)(3x3)ABCY", Answer::Number(18)),
    ];
    for ((year, day), input, expected) in cases {
        let entry = registry::get(PuzzleId::new(year, day).unwrap()).unwrap();
        let report = runner::run_part(entry, Part::One, input);
        assert_eq!(report.answer, Some(expected), "{}", entry.id);
    }
}

#[test]
fn test_summary_of_mixed_reports() {
    let entry = registry::get(PuzzleId::new(2015, 1).unwrap()).unwrap();
    let mut reports = runner::run_puzzle(entry, &Part::BOTH, "(((");
    reports.extend(runner::skip_puzzle(entry, &Part::BOTH, "no input"));

    let summary = Summary::of(&reports);
    assert_eq!(
        summary,
        Summary {
            solved: 1,
            failed: 1,
            skipped: 2
        }
    );
    assert!(summary.has_failures());
}

struct ProjectDir {
    _tmp: TempDir,
    original_dir: PathBuf,
    original_home: Option<std::ffi::OsString>,
}

impl ProjectDir {
    fn enter(config: &str) -> (Self, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_path_buf();
        fs::create_dir_all(root.join(".advent")).unwrap();
        fs::create_dir_all(root.join("home")).unwrap();
        fs::write(root.join(".advent/config.md"), config).unwrap();

        let original_dir = std::env::current_dir().unwrap();
        let original_home = std::env::var_os("HOME");
        std::env::set_current_dir(&root).unwrap();
        std::env::set_var("HOME", root.join("home"));
        std::env::remove_var(INPUTS_ENV);

        (
            Self {
                _tmp: tmp,
                original_dir,
                original_home,
            },
            root,
        )
    }
}

impl Drop for ProjectDir {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
        match &self.original_home {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
    }
}

#[test]
#[serial]
fn test_config_load_from_project_dir() {
    let (_project, root) = ProjectDir::enter(
        "---\ninputs:\n  dir: data\ndefaults:\n  year: 2016\n  format: json\n---\n# Advent\n",
    );

    let config = Config::load().unwrap();
    assert_eq!(config.defaults.year, Some(2016));
    assert_eq!(config.defaults.format, OutputFormat::Json);

    let actual = config.inputs_dir().unwrap();
    assert!(actual.is_absolute());
    assert!(actual.ends_with("data"));
    assert_eq!(
        actual.parent().unwrap().canonicalize().unwrap(),
        root.canonicalize().unwrap()
    );
}

#[test]
#[serial]
fn test_config_load_env_beats_project() {
    let (_project, _root) = ProjectDir::enter("---\ninputs:\n  dir: data\n---\n");
    std::env::set_var(INPUTS_ENV, "/srv/inputs");
    let config = Config::load();
    std::env::remove_var(INPUTS_ENV);

    assert_eq!(config.unwrap().inputs.dir, PathBuf::from("/srv/inputs"));
}
