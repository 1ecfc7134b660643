//! Puzzle identifiers, parts, answers and the `Solution` trait.

use anyhow::{anyhow, bail, Result};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// First year Advent of Code ran.
pub const FIRST_YEAR: u16 = 2015;
const LAST_YEAR: u16 = 2099;
const LAST_DAY: u8 = 25;

/// Identifies one puzzle by year and day.
///
/// Accepted input formats:
/// - `2015/4`, `2015-04`, `2015:4` (year and day)
/// - `y2015d04` (compact form)
/// - `4` (day only, requires a default year)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    pub year: u16,
    pub day: u8,
}

impl PuzzleId {
    pub fn new(year: u16, day: u8) -> Result<Self> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            bail!(
                "Invalid year {}: must be between {} and {}",
                year,
                FIRST_YEAR,
                LAST_YEAR
            );
        }
        if !(1..=LAST_DAY).contains(&day) {
            bail!("Invalid day {}: must be between 1 and {}", day, LAST_DAY);
        }
        Ok(Self { year, day })
    }

    /// Parse a puzzle id, falling back to `default_year` when only a day is given.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input is empty
    /// - Year or day are not numbers or out of range
    /// - Only a day is given and there is no default year
    pub fn parse(input: &str, default_year: Option<u16>) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(anyhow!("Puzzle id cannot be empty"));
        }

        if let Some(compact) = input.strip_prefix('y') {
            return Self::parse_compact(compact);
        }

        match input.find(['/', '-', ':']) {
            Some(pos) => {
                let year = parse_number::<u16>(&input[..pos], "year")?;
                let day = parse_number::<u8>(&input[pos + 1..], "day")?;
                Self::new(year, day)
            }
            None => {
                let day = parse_number::<u8>(input, "day")?;
                let year = default_year.ok_or_else(|| {
                    anyhow!(
                        "Puzzle id '{}' has no year and no default year is configured",
                        input
                    )
                })?;
                Self::new(year, day)
            }
        }
    }

    /// Parse the `2015d04` part of `y2015d04`.
    fn parse_compact(rest: &str) -> Result<Self> {
        let (year, day) = rest
            .split_once('d')
            .ok_or_else(|| anyhow!("Invalid compact puzzle id 'y{}': expected yYYYYdDD", rest))?;
        Self::new(
            parse_number::<u16>(year, "year")?,
            parse_number::<u8>(day, "day")?,
        )
    }
}

fn parse_number<T: FromStr>(text: &str, what: &str) -> Result<T> {
    let text = text.trim();
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        bail!("Invalid {} '{}': expected a number", what, text);
    }
    text.parse::<T>()
        .map_err(|_| anyhow!("Invalid {} '{}': out of range", what, text))
}

impl Display for PuzzleId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.day)
    }
}

impl FromStr for PuzzleId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, None)
    }
}

/// Every puzzle has two parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub const BOTH: [Part; 2] = [Part::One, Part::Two];

    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl Display for Part {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for Part {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" | "one" => Ok(Part::One),
            "2" | "two" => Ok(Part::Two),
            other => Err(anyhow!("Invalid part '{}': expected 1 or 2", other)),
        }
    }
}

/// The answer to one puzzle part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Number(i64),
    Text(String),
}

impl Display for Answer {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{}", n),
            Answer::Text(s) => write!(f, "{}", s),
        }
    }
}

macro_rules! answer_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Answer {
                fn from(value: $t) -> Self {
                    Answer::Number(value as i64)
                }
            }
        )*
    };
}

answer_from_int!(i64, i32, u32, u16, u8, usize, u64);

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

/// A solver for both parts of one puzzle.
pub trait Solution: Send + Sync {
    /// Puzzle title as shown on the calendar.
    fn title(&self) -> &'static str;

    fn part_one(&self, input: &str) -> Result<Answer>;

    fn part_two(&self, input: &str) -> Result<Answer>;

    fn solve(&self, part: Part, input: &str) -> Result<Answer> {
        match part {
            Part::One => self.part_one(input),
            Part::Two => self.part_two(input),
        }
    }
}

/// Non-blank lines of a puzzle input with trailing whitespace removed.
pub fn lines(input: &str) -> impl Iterator<Item = &str> {
    input
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
}
