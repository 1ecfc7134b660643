//! Day 10: Elves Look, Elves Say

use anyhow::{bail, Result};

use crate::parse::single_line;
use crate::puzzle::{Answer, Solution};

/// One round of look-and-say over a digit sequence.
pub fn look_and_say(digits: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(digits.len() * 2);
    let mut i = 0;
    while i < digits.len() {
        let digit = digits[i];
        let run = digits[i..].iter().take_while(|&&d| d == digit).count();
        out.push(run as u8);
        out.push(digit);
        i += run;
    }
    out
}

fn digits(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => Ok(d as u8),
            None => bail!("Only digits can be looked at and said: '{}'", c),
        })
        .collect()
}

/// Length of the sequence after `rounds` of look-and-say.
pub fn length_after(seed: &str, rounds: usize) -> Result<usize> {
    let mut sequence = digits(seed)?;
    for _ in 0..rounds {
        sequence = look_and_say(&sequence);
    }
    Ok(sequence.len())
}

pub struct LookAndSay;

impl Solution for LookAndSay {
    fn title(&self) -> &'static str {
        "Elves Look, Elves Say"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(length_after(single_line(input)?, 40)?.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(length_after(single_line(input)?, 50)?.into())
    }
}
