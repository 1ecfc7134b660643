//! Day 1: Not Quite Lisp

use anyhow::{anyhow, Result};

use crate::puzzle::{Answer, Solution};

/// Final floor after following every parenthesis; other characters are ignored.
pub fn floor(instructions: &str) -> i64 {
    instructions.chars().map(step).sum()
}

/// 1-based position of the first instruction that enters the basement (floor -1).
pub fn basement_position(instructions: &str) -> Option<usize> {
    let mut floor = 0;
    for (index, c) in instructions.chars().enumerate() {
        floor += step(c);
        if floor == -1 {
            return Some(index + 1);
        }
    }
    None
}

fn step(c: char) -> i64 {
    match c {
        '(' => 1,
        ')' => -1,
        _ => 0,
    }
}

pub struct NotQuiteLisp;

impl Solution for NotQuiteLisp {
    fn title(&self) -> &'static str {
        "Not Quite Lisp"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(floor(input.trim()).into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        basement_position(input.trim())
            .map(Answer::from)
            .ok_or_else(|| anyhow!("Santa never enters the basement"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_examples() {
        assert_eq!(floor("(())"), 0);
        assert_eq!(floor("()()"), 0);
        assert_eq!(floor("((("), 3);
        assert_eq!(floor("(()(()("), 3);
        assert_eq!(floor("))((((("), 3);
        assert_eq!(floor("())"), -1);
        assert_eq!(floor("))("), -1);
        assert_eq!(floor(")))"), -3);
        assert_eq!(floor(")())())"), -3);
    }

    #[test]
    fn test_basement_position() {
        assert_eq!(basement_position(")"), Some(1));
        assert_eq!(basement_position("()())"), Some(5));
        assert_eq!(basement_position("((("), None);
    }

    #[test]
    fn test_part_two_errors_without_basement() {
        assert!(NotQuiteLisp.part_two("(()").is_err());
    }
}
