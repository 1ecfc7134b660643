//! Day 8: Matchsticks

use anyhow::{bail, Result};

use crate::puzzle::{lines, Answer, Solution};

/// Characters in memory for a quoted string literal.
pub fn memory_len(literal: &str) -> Result<usize> {
    let bytes = literal.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'"' || bytes[bytes.len() - 1] != b'"' {
        bail!("Not a quoted string: {}", literal);
    }

    let body = &bytes[1..bytes.len() - 1];
    let mut count = 0;
    let mut i = 0;
    while i < body.len() {
        i += match body[i] {
            b'\\' => match body.get(i + 1) {
                Some(b'\\') | Some(b'"') => 2,
                Some(b'x')
                    if body.len() > i + 3
                        && body[i + 2].is_ascii_hexdigit()
                        && body[i + 3].is_ascii_hexdigit() =>
                {
                    4
                }
                _ => bail!("Invalid escape sequence in {}", literal),
            },
            b'"' => bail!("Unescaped quote inside {}", literal),
            _ => 1,
        };
        count += 1;
    }
    Ok(count)
}

/// Length of the literal after quoting and escaping it once more.
pub fn encoded_len(literal: &str) -> usize {
    2 + literal
        .chars()
        .map(|c| if c == '"' || c == '\\' { 2 } else { 1 })
        .sum::<usize>()
}

fn literals(input: &str) -> impl Iterator<Item = &str> {
    lines(input).map(str::trim)
}

pub struct Matchsticks;

impl Solution for Matchsticks {
    fn title(&self) -> &'static str {
        "Matchsticks"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        let mut code = 0;
        let mut memory = 0;
        for literal in literals(input) {
            code += literal.len();
            memory += memory_len(literal)?;
        }
        Ok((code - memory).into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let (code, encoded) = literals(input).fold((0, 0), |(code, encoded), literal| {
            (code + literal.len(), encoded + encoded_len(literal))
        });
        Ok((encoded - code).into())
    }
}
