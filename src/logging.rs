//! Tracing subscriber setup for the `advent` binary.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbosity: u8, quiet: bool) -> &'static str {
    match (quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for answers and `--json` reports.
pub fn init(verbosity: u8, quiet: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity, quiet)));

    let span_events = if verbosity > 1 {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    // try_init: a subscriber may already be set (tests, embedding)
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_span_events(span_events)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0, false), "warn");
        assert_eq!(default_directive(1, false), "debug");
        assert_eq!(default_directive(2, false), "trace");
        assert_eq!(default_directive(5, false), "trace");
        assert_eq!(default_directive(2, true), "error");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0, false);
        init(1, false);
    }
}
