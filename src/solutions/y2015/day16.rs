//! Day 16: Aunt Sue
//!
//! Things missing from a Sue's list aren't zero; they are simply unknown.

use anyhow::{anyhow, bail, Context, Result};
use std::collections::HashMap;
use tracing::debug;

use crate::parse::capture;
use crate::puzzle::{lines, Answer, Solution};

/// What the My First Crime Scene Analysis Machine printed.
pub const TICKER_TAPE: [(&str, u32); 10] = [
    ("children", 3),
    ("cats", 7),
    ("samoyeds", 2),
    ("pomeranians", 3),
    ("akitas", 0),
    ("vizslas", 0),
    ("goldfish", 5),
    ("trees", 3),
    ("cars", 2),
    ("perfumes", 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sue {
    pub number: u32,
    pub things: HashMap<String, u32>,
}

impl Sue {
    /// Parse `Sue 469: children: 2, perfumes: 2, pomeranians: 4`.
    pub fn parse(line: &str) -> Result<Self> {
        let re = crate::static_regex!(r"^Sue (?P<number>\d+): (?P<things>.*)$");
        let caps = capture(re, line.trim())?;
        let number = caps["number"].parse()?;

        let mut things = HashMap::new();
        for item in caps["things"].split(',').map(str::trim) {
            let (name, count) = item
                .split_once(':')
                .ok_or_else(|| anyhow!("Sue {} has a strange belonging: '{}'", number, item))?;
            let count = count
                .trim()
                .parse()
                .with_context(|| format!("Invalid count in '{}'", item))?;
            things.insert(name.trim().to_string(), count);
        }
        Ok(Self { number, things })
    }

    pub fn get(&self, thing: &str) -> Option<u32> {
        self.things.get(thing).copied()
    }
}

/// How a remembered count is compared with the tape reading.
pub type Reading = fn(thing: &str, tape: u32, remembered: u32) -> bool;

pub fn exact(_thing: &str, tape: u32, remembered: u32) -> bool {
    tape == remembered
}

/// Cats and trees read below, pomeranians and goldfish above the true value.
pub fn outdated_retroencabulator(thing: &str, tape: u32, remembered: u32) -> bool {
    match thing {
        "cats" | "trees" => remembered > tape,
        "pomeranians" | "goldfish" => remembered < tape,
        _ => remembered == tape,
    }
}

pub fn matches(sue: &Sue, reading: Reading) -> bool {
    TICKER_TAPE.iter().all(|&(thing, tape)| match sue.get(thing) {
        Some(remembered) => reading(thing, tape, remembered),
        None => true,
    })
}

pub fn find_sue(input: &str, reading: Reading) -> Result<u32> {
    let sues = lines(input).map(Sue::parse).collect::<Result<Vec<_>>>()?;
    let candidates: Vec<u32> = sues
        .iter()
        .filter(|sue| matches(sue, reading))
        .map(|sue| sue.number)
        .collect();
    debug!(?candidates, "matching aunts");
    match candidates.as_slice() {
        [] => bail!("No Aunt Sue matches the ticker tape"),
        [number, ..] => Ok(*number),
    }
}

pub struct AuntSue;

impl Solution for AuntSue {
    fn title(&self) -> &'static str {
        "Aunt Sue"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(find_sue(input, exact)?.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(find_sue(input, outdated_retroencabulator)?.into())
    }
}
