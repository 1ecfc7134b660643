//! Centralized UI formatting and color utilities
//!
//! Status icons, colors and text formatting shared by the advent commands.

use colored::{ColoredString, Colorize};

use crate::runner::PartReport;

/// Environment variable that enables quiet mode.
pub const QUIET_ENV: &str = "ADVENT_QUIET";

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var(QUIET_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored status icon for a part report.
///
/// Icons:
/// - Solved: ✓ (green)
/// - Failed: ✗ (red)
/// - Skipped: ○ (dimmed)
pub fn status_icon(report: &PartReport) -> ColoredString {
    if report.skipped {
        "○".dimmed()
    } else if report.succeeded() {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (puzzle IDs, etc.)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings and answers
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Truncate a title to fit terminal width
    pub fn truncate_title(title: &str, max_len: usize) -> String {
        if title.chars().count() <= max_len {
            title.to_string()
        } else {
            let kept: String = title.chars().take(max_len.saturating_sub(3)).collect();
            format!("{}...", kept)
        }
    }

    /// Format a part's run time in milliseconds
    pub fn elapsed(ms: f64) -> String {
        if ms < 1.0 {
            format!("{:.0}µs", ms * 1000.0)
        } else if ms < 1000.0 {
            format!("{:.1}ms", ms)
        } else {
            format!("{:.2}s", ms / 1000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Answer, Part, PuzzleId};
    use serial_test::serial;

    fn report(answer: Option<Answer>, skipped: bool) -> PartReport {
        PartReport {
            puzzle: PuzzleId::new(2015, 1).unwrap(),
            title: "Not Quite Lisp",
            part: Part::One,
            error: if answer.is_none() {
                Some("boom".to_string())
            } else {
                None
            },
            answer,
            elapsed_ms: 0.5,
            skipped,
        }
    }

    #[test]
    fn test_status_icon() {
        colored::control::set_override(false);
        assert_eq!(status_icon(&report(Some(Answer::Number(1)), false)).to_string(), "✓");
        assert_eq!(status_icon(&report(None, false)).to_string(), "✗");
        assert_eq!(status_icon(&report(None, true)).to_string(), "○");
    }

    #[test]
    #[serial]
    fn test_is_quiet() {
        std::env::set_var(QUIET_ENV, "true");
        assert!(is_quiet());
        std::env::set_var(QUIET_ENV, "0");
        assert!(!is_quiet());
        std::env::remove_var(QUIET_ENV);
        assert!(!is_quiet());
    }

    #[test]
    fn test_truncate_title() {
        assert_eq!(format::truncate_title("short", 10), "short");
        assert_eq!(format::truncate_title("exactly ten", 11), "exactly ten");
        assert_eq!(
            format::truncate_title("Some Assembly Required", 10),
            "Some As..."
        );
    }

    #[test]
    fn test_elapsed() {
        assert_eq!(format::elapsed(0.25), "250µs");
        assert_eq!(format::elapsed(12.34), "12.3ms");
        assert_eq!(format::elapsed(2500.0), "2.50s");
    }
}
