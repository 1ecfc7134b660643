//! Day 6: Signals and Noise

use anyhow::{bail, Result};
use std::collections::BTreeMap;

use crate::puzzle::{lines, Answer, Solution};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    MostCommon,
    LeastCommon,
}

/// Per-column letter frequencies of the repeated message.
pub fn column_counts(input: &str) -> Result<Vec<BTreeMap<char, usize>>> {
    let mut columns: Vec<BTreeMap<char, usize>> = Vec::new();
    for (n, line) in lines(input).map(str::trim).enumerate() {
        let width = line.chars().count();
        if columns.is_empty() {
            columns = vec![BTreeMap::new(); width];
        } else if width != columns.len() {
            bail!(
                "Message {} has {} characters, expected {}",
                n + 1,
                width,
                columns.len()
            );
        }
        for (column, c) in columns.iter_mut().zip(line.chars()) {
            *column.entry(c).or_default() += 1;
        }
    }
    if columns.is_empty() {
        bail!("No messages were recorded");
    }
    Ok(columns)
}

/// Pick one letter per column; ties go to the alphabetically first letter.
pub fn correct(input: &str, correction: Correction) -> Result<String> {
    let message = column_counts(input)?
        .iter()
        .filter_map(|column| {
            // iteration is alphabetical, so keep the first best seen
            column
                .iter()
                .fold(None, |best: Option<(char, usize)>, (&c, &n)| match best {
                    Some((_, m))
                        if (correction == Correction::MostCommon && n <= m)
                            || (correction == Correction::LeastCommon && n >= m) =>
                    {
                        best
                    }
                    _ => Some((c, n)),
                })
                .map(|(c, _)| c)
        })
        .collect();
    Ok(message)
}

pub struct SignalsAndNoise;

impl Solution for SignalsAndNoise {
    fn title(&self) -> &'static str {
        "Signals and Noise"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(correct(input, Correction::MostCommon)?.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(correct(input, Correction::LeastCommon)?.into())
    }
}
