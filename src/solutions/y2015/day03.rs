//! Day 3: Perfectly Spherical Houses in a Vacuum

use anyhow::{bail, Result};
use std::collections::HashSet;

use crate::geometry::{Heading, Point};
use crate::puzzle::{Answer, Solution};

fn heading(c: char) -> Result<Heading> {
    Ok(match c {
        '^' => Heading::North,
        'v' => Heading::South,
        '>' => Heading::East,
        '<' => Heading::West,
        other => bail!("Character is not allowed for directions: '{}'", other),
    })
}

/// Number of distinct houses visited when `couriers` take turns following the moves.
pub fn houses_visited(moves: &str, couriers: usize) -> Result<usize> {
    let mut positions = vec![Point::ORIGIN; couriers.max(1)];
    let mut visited = HashSet::from([Point::ORIGIN]);

    for (turn, c) in moves.chars().filter(|c| !c.is_whitespace()).enumerate() {
        let who = turn % positions.len();
        positions[who] = positions[who].step(heading(c)?, 1);
        visited.insert(positions[who]);
    }
    Ok(visited.len())
}

pub struct SphericalHouses;

impl Solution for SphericalHouses {
    fn title(&self) -> &'static str {
        "Perfectly Spherical Houses in a Vacuum"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(houses_visited(input, 1)?.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(houses_visited(input, 2)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_santa_alone() {
        assert_eq!(houses_visited(">", 1).unwrap(), 2);
        assert_eq!(houses_visited("^>v<", 1).unwrap(), 4);
        assert_eq!(houses_visited("^v^v^v^v^v", 1).unwrap(), 2);
    }

    #[test]
    fn test_with_robo_santa() {
        assert_eq!(houses_visited("^v", 2).unwrap(), 3);
        assert_eq!(houses_visited("^>v<", 2).unwrap(), 3);
        assert_eq!(houses_visited("^v^v^v^v^v", 2).unwrap(), 11);
    }

    #[test]
    fn test_invalid_character() {
        let err = houses_visited("^x", 1).unwrap_err();
        assert!(err.to_string().contains('x'));
    }
}
