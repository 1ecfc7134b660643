//! Day 1: No Time for a Taxicab

use anyhow::{anyhow, bail, Context, Result};
use std::collections::HashSet;

use crate::geometry::{Heading, Point};
use crate::puzzle::{Answer, Solution};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub turn: Turn,
    pub blocks: i32,
}

/// Parse a comma separated sequence like `R2, L3`.
pub fn parse_instructions(input: &str) -> Result<Vec<Instruction>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let turn = match s.chars().next() {
                Some('R') => Turn::Right,
                Some('L') => Turn::Left,
                _ => bail!("Don't know how to turn with '{}'", s),
            };
            let blocks = s[1..]
                .parse()
                .with_context(|| format!("Invalid block count in '{}'", s))?;
            Ok(Instruction { turn, blocks })
        })
        .collect()
}

/// Every intersection passed, starting at the origin facing north.
pub fn walk(instructions: &[Instruction]) -> Vec<Point> {
    let mut heading = Heading::North;
    let mut position = Point::ORIGIN;
    let mut path = vec![position];
    for instruction in instructions {
        heading = match instruction.turn {
            Turn::Left => heading.turn_left(),
            Turn::Right => heading.turn_right(),
        };
        for _ in 0..instruction.blocks {
            position = position.step(heading, 1);
            path.push(position);
        }
    }
    path
}

/// First location visited twice, counting every block walked through.
pub fn first_revisit(instructions: &[Instruction]) -> Option<Point> {
    let mut visited = HashSet::new();
    walk(instructions).into_iter().find(|&p| !visited.insert(p))
}

pub struct Taxicab;

impl Solution for Taxicab {
    fn title(&self) -> &'static str {
        "No Time for a Taxicab"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        let path = walk(&parse_instructions(input)?);
        let end = path.last().copied().unwrap_or(Point::ORIGIN);
        Ok(end.manhattan().into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let revisit = first_revisit(&parse_instructions(input)?)
            .ok_or_else(|| anyhow!("No location is visited twice"))?;
        Ok(revisit.manhattan().into())
    }
}
