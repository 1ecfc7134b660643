//! Small helpers for turning puzzle input lines into typed values.

use anyhow::{anyhow, Context, Result};
use regex::{Captures, Regex};
use std::str::FromStr;

/// Compile a regex literal once and reuse it.
#[macro_export]
macro_rules! static_regex {
    ($pattern:expr) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($pattern).expect("invalid regex literal"))
    }};
}

/// Match a whole line against `re`, failing with the offending line.
pub fn capture<'a>(re: &Regex, line: &'a str) -> Result<Captures<'a>> {
    re.captures(line)
        .ok_or_else(|| anyhow!("Unrecognized line: '{}'", line))
}

/// Parse a named capture group.
pub fn field<T>(caps: &Captures, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let text = caps
        .name(name)
        .ok_or_else(|| anyhow!("Missing field '{}'", name))?
        .as_str();
    text.parse::<T>()
        .with_context(|| format!("Invalid value '{}' for {}", text, name))
}

/// Parse a whitespace- or comma-separated list of numbers.
pub fn numbers<T>(text: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<T>()
                .with_context(|| format!("Invalid number '{}'", s))
        })
        .collect()
}

/// The first non-blank line of `input`, trimmed.
pub fn single_line(input: &str) -> Result<&str> {
    input
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| anyhow!("Puzzle input is empty"))
}
