//! Structured output abstraction for advent.
//!
//! Provides a unified interface for printing results in different modes:
//! - Human: Colored, icon-prefixed lines for terminal display
//! - Json: One JSON document per command for programmatic consumption
//! - Quiet: Bare answers and errors only
//!
//! The Output struct auto-detects TTY for color support and can be injected
//! with a custom writer for test capture.

use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use advent::runner::{PartReport, Summary};
use advent::ui::{self, colors, format};

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable colored output
    Human,
    /// JSON-formatted structured output
    Json,
    /// Answers and errors only
    Quiet,
}

impl OutputMode {
    /// JSON beats quiet: a script asking for JSON wants the full document.
    pub fn select(json: bool, quiet: bool) -> Self {
        if json {
            OutputMode::Json
        } else if quiet || ui::is_quiet() {
            OutputMode::Quiet
        } else {
            OutputMode::Human
        }
    }
}

/// Output abstraction with mode-aware formatting
#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    is_tty: bool,
}

impl Output {
    /// Create a new Output writing to stdout
    pub fn new(mode: OutputMode) -> Self {
        let is_tty = atty::is(atty::Stream::Stdout);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            is_tty,
        }
    }

    /// Create an Output with a custom writer (for testing)
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            is_tty: false, // Assume non-TTY for custom writers
        }
    }

    /// Print a batch of part reports followed by a summary line.
    ///
    /// JSON mode emits the whole batch as a single array.
    pub fn reports(&self, reports: &[PartReport]) {
        match self.mode {
            OutputMode::Human => {
                for report in reports {
                    self.write_line(&self.report_line(report));
                }
                if reports.len() > 1 {
                    self.write_line(&self.summary_line(&Summary::of(reports)));
                }
            }
            OutputMode::Json => self.json(reports),
            OutputMode::Quiet => {
                for report in reports {
                    match (&report.answer, &report.error) {
                        (Some(answer), _) => self.write_line(&answer.to_string()),
                        (None, Some(error)) if !report.skipped => self.write_line(&format!(
                            "✗ {} part {}: {}",
                            report.puzzle, report.part, error
                        )),
                        _ => {}
                    }
                }
            }
        }
    }

    fn report_line(&self, report: &PartReport) -> String {
        let icon = if self.is_tty {
            ui::status_icon(report).to_string()
        } else {
            ui::status_icon(report).clear().to_string()
        };
        let head = format!(
            "{} {} part {}",
            icon,
            self.paint(&report.puzzle.to_string(), colors::identifier),
            report.part
        );

        if report.skipped {
            let reason = report.error.as_deref().unwrap_or("skipped");
            return format!("{}: {}", head, self.paint(reason, colors::secondary));
        }

        let elapsed = self.paint(
            &format!("({})", format::elapsed(report.elapsed_ms)),
            colors::secondary,
        );
        match (&report.answer, &report.error) {
            (Some(answer), _) => {
                let text = answer.to_string();
                if text.contains('\n') {
                    format!("{} {}:\n{}", head, elapsed, text)
                } else {
                    format!("{} {}: {}", head, elapsed, self.paint(&text, colors::heading))
                }
            }
            (None, error) => format!(
                "{} {}: {}",
                head,
                elapsed,
                self.paint(error.as_deref().unwrap_or("no answer"), colors::error)
            ),
        }
    }

    fn summary_line(&self, summary: &Summary) -> String {
        let failed = format!("{} failed", summary.failed);
        format!(
            "{} solved, {}, {} skipped",
            summary.solved,
            if summary.failed > 0 {
                self.paint(&failed, colors::error)
            } else {
                failed
            },
            summary.skipped
        )
    }

    /// Output a warning message: "⚠ {msg}" in yellow
    pub fn warn(&self, msg: &str) {
        if self.mode == OutputMode::Human {
            let prefix = self.paint("⚠", colors::warning);
            self.write_line(&format!("{} {}", prefix, msg));
        }
    }

    /// Output plain info text (no prefix)
    pub fn info(&self, msg: &str) {
        if self.mode != OutputMode::Json {
            self.write_line(msg);
        }
    }

    /// Output detail text (indented, for subordinate info)
    pub fn detail(&self, msg: &str) {
        if self.mode == OutputMode::Human {
            self.write_line(&format!("  {}", msg));
        }
    }

    /// Output a value as a pretty JSON document
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(text) => self.write_line(&text),
            Err(e) => tracing::error!(error = %e, "failed to serialize JSON output"),
        }
    }

    /// Apply a color only when writing to a terminal
    pub fn paint(&self, text: &str, color: fn(&str) -> colored::ColoredString) -> String {
        if self.is_tty {
            color(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Write a line to the output
    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    /// Get the current output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent::puzzle::{Answer, Part, PuzzleId};
    use serial_test::serial;

    // Test-specific writer that wraps Arc<Mutex<Vec<u8>>>
    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.buffer.lock().unwrap().flush()
        }
    }

    fn capture(mode: OutputMode, reports: &[PartReport]) -> String {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(mode, Box::new(writer));
        output.reports(reports);
        let data = buffer.lock().unwrap();
        String::from_utf8(data.clone()).unwrap()
    }

    fn sample() -> Vec<PartReport> {
        let id = PuzzleId::new(2015, 1).unwrap();
        vec![
            PartReport {
                puzzle: id,
                title: "Not Quite Lisp",
                part: Part::One,
                answer: Some(Answer::Number(74)),
                elapsed_ms: 0.2,
                error: None,
                skipped: false,
            },
            PartReport {
                puzzle: id,
                title: "Not Quite Lisp",
                part: Part::Two,
                answer: None,
                elapsed_ms: 0.1,
                error: Some("Santa never enters the basement".to_string()),
                skipped: false,
            },
        ]
    }

    #[test]
    fn test_human_mode_reports() {
        let result = capture(OutputMode::Human, &sample());
        assert!(result.contains("✓ 2015-01 part 1"));
        assert!(result.contains(": 74"));
        assert!(result.contains("✗ 2015-01 part 2"));
        assert!(result.contains("Santa never enters the basement"));
        assert!(result.contains("1 solved, 1 failed, 0 skipped"));
    }

    #[test]
    fn test_json_mode_single_array() {
        let result = capture(OutputMode::Json, &sample());
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        let reports = value.as_array().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0]["answer"], 74);
        assert!(reports[1]["answer"].is_null());
    }

    #[test]
    fn test_quiet_mode_bare_answers() {
        let result = capture(OutputMode::Quiet, &sample());
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines[0], "74");
        assert!(lines[1].starts_with("✗ 2015-01 part 2"));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_multiline_answer_starts_on_new_line() {
        let mut reports = sample();
        reports[0].answer = Some(Answer::Text("#.\n.#".to_string()));
        reports.truncate(1);
        let result = capture(OutputMode::Human, &reports);
        assert!(result.contains(":\n#.\n.#"));
    }

    #[test]
    fn test_messages_respect_mode() {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Quiet, Box::new(writer));
        output.warn("Careful");
        output.detail("Detail");
        output.info("Info");
        let data = buffer.lock().unwrap();
        let result = String::from_utf8(data.clone()).unwrap();
        assert_eq!(result, "Info\n");
    }

    #[test]
    fn test_human_messages() {
        let (writer, buffer) = TestWriter::new();
        let output = Output::with_writer(OutputMode::Human, Box::new(writer));
        output.warn("Careful");
        output.detail("Detail");
        output.info("Info");
        let data = buffer.lock().unwrap();
        let result = String::from_utf8(data.clone()).unwrap();
        assert_eq!(result, "⚠ Careful\n  Detail\nInfo\n");
    }

    #[test]
    #[serial]
    fn test_select_mode() {
        std::env::remove_var(ui::QUIET_ENV);
        assert_eq!(OutputMode::select(false, false), OutputMode::Human);
        assert_eq!(OutputMode::select(false, true), OutputMode::Quiet);
        assert_eq!(OutputMode::select(true, true), OutputMode::Json);
        std::env::set_var(ui::QUIET_ENV, "1");
        assert_eq!(OutputMode::select(false, false), OutputMode::Quiet);
        std::env::remove_var(ui::QUIET_ENV);
    }
}
