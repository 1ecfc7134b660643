//! Runs puzzle parts, measures them and collects reports.

use serde::{Serialize, Serializer};
use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;
use tracing::{info, info_span, warn};

use crate::puzzle::{Answer, Part, PuzzleId};
use crate::registry::Entry;

/// Result of running (or skipping) one part of one puzzle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartReport {
    #[serde(serialize_with = "as_display")]
    pub puzzle: PuzzleId,
    pub title: &'static str,
    #[serde(serialize_with = "part_number")]
    pub part: Part,
    pub answer: Option<Answer>,
    pub elapsed_ms: f64,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,
}

fn as_display<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn part_number<S: Serializer>(part: &Part, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(part.number())
}

impl PartReport {
    pub fn succeeded(&self) -> bool {
        self.answer.is_some()
    }

    pub fn failed(&self) -> bool {
        !self.skipped && self.error.is_some()
    }
}

/// Solve one part, capturing any error in the report.
pub fn run_part(entry: &Entry, part: Part, input: &str) -> PartReport {
    let span = info_span!("part", puzzle = %entry.id, part = part.number());
    let _guard = span.enter();

    let started = Instant::now();
    let result = panic::catch_unwind(AssertUnwindSafe(|| entry.solution.solve(part, input)))
        .unwrap_or_else(|payload| {
            Err(anyhow::anyhow!(
                "Solver panicked: {}",
                panic_message(&*payload)
            ))
        });
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    let (answer, error) = match result {
        Ok(answer) => {
            info!(elapsed_ms, "solved");
            (Some(answer), None)
        }
        Err(e) => {
            warn!(elapsed_ms, error = %format!("{:#}", e), "failed");
            (None, Some(format!("{:#}", e)))
        }
    };

    PartReport {
        puzzle: entry.id,
        title: entry.title(),
        part,
        answer,
        elapsed_ms,
        error,
        skipped: false,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown cause"
    }
}

/// Solve the requested parts of one puzzle in order.
pub fn run_puzzle(entry: &Entry, parts: &[Part], input: &str) -> Vec<PartReport> {
    parts
        .iter()
        .map(|&part| run_part(entry, part, input))
        .collect()
}

/// Reports for parts that could not run, e.g. because the input is missing.
pub fn skip_puzzle(entry: &Entry, parts: &[Part], reason: &str) -> Vec<PartReport> {
    info!(puzzle = %entry.id, reason, "skipped");
    parts
        .iter()
        .map(|&part| PartReport {
            puzzle: entry.id,
            title: entry.title(),
            part,
            answer: None,
            elapsed_ms: 0.0,
            error: Some(reason.to_string()),
            skipped: true,
        })
        .collect()
}

/// Counts over a batch of reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub solved: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn of(reports: &[PartReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            if report.skipped {
                summary.skipped += 1;
            } else if report.succeeded() {
                summary.solved += 1;
            } else {
                summary.failed += 1;
            }
        }
        summary
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    fn entry(year: u16, day: u8) -> &'static Entry {
        registry::get(PuzzleId::new(year, day).unwrap()).unwrap()
    }

    #[test]
    fn test_run_part_success() {
        let report = run_part(entry(2015, 1), Part::One, "(()(()(");
        assert_eq!(report.answer, Some(Answer::Number(3)));
        assert!(report.error.is_none());
        assert!(report.succeeded());
        assert!(report.elapsed_ms >= 0.0);
    }

    #[test]
    fn test_run_part_failure_is_captured() {
        let report = run_part(entry(2015, 3), Part::One, "^^x");
        assert!(report.answer.is_none());
        assert!(report.failed());
        assert!(report.error.unwrap().contains('x'));
    }

    struct Faulty;

    impl crate::puzzle::Solution for Faulty {
        fn title(&self) -> &'static str {
            "Faulty"
        }

        fn part_one(&self, input: &str) -> anyhow::Result<Answer> {
            let value: u32 = input.trim().parse()?;
            Ok((value * 2).into())
        }

        fn part_two(&self, _input: &str) -> anyhow::Result<Answer> {
            panic!("index out of range")
        }
    }

    #[test]
    fn test_run_part_panic_is_captured() {
        let faulty = Entry {
            id: PuzzleId::new(2015, 1).unwrap(),
            solution: &Faulty,
        };
        let report = run_part(&faulty, Part::Two, "");
        assert!(report.failed());
        assert_eq!(
            report.error.as_deref(),
            Some("Solver panicked: index out of range")
        );

        let reports = run_puzzle(&faulty, &Part::BOTH, "21");
        assert_eq!(reports[0].answer, Some(Answer::Number(42)));
        assert!(reports[1].failed());
    }

    #[test]
    fn test_run_puzzle_both_parts() {
        let reports = run_puzzle(entry(2015, 1), &Part::BOTH, "()())");
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].answer, Some(Answer::Number(-1)));
        assert_eq!(reports[1].answer, Some(Answer::Number(5)));
        assert_eq!(
            Summary::of(&reports),
            Summary {
                solved: 2,
                failed: 0,
                skipped: 0
            }
        );
    }

    #[test]
    fn test_skip_puzzle() {
        let reports = skip_puzzle(entry(2016, 1), &Part::BOTH, "no input");
        assert!(reports.iter().all(|r| r.skipped && !r.failed()));
        let summary = Summary::of(&reports);
        assert_eq!(summary.skipped, 2);
        assert!(!summary.has_failures());
    }

    #[test]
    fn test_report_json_shape() {
        let report = run_part(entry(2015, 1), Part::Two, ")");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["puzzle"], "2015-01");
        assert_eq!(json["title"], "Not Quite Lisp");
        assert_eq!(json["part"], 2);
        assert_eq!(json["answer"], 1);
        assert!(json["error"].is_null());
        assert!(json.get("skipped").is_none());
    }
}
