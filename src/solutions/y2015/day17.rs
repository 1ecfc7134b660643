//! Day 17: No Such Thing as Too Much

use anyhow::{bail, Result};

use crate::parse::numbers;
use crate::puzzle::{Answer, Solution};

pub const EGGNOG_LITRES: u32 = 150;

/// Number of containers used by every combination that holds exactly `litres`.
///
/// Containers of equal size are still distinct containers.
pub fn combinations(containers: &[u32], litres: u32) -> Vec<usize> {
    let mut found = Vec::new();
    fill(containers, litres, 0, &mut found);
    found
}

fn fill(containers: &[u32], remaining: u32, used: usize, found: &mut Vec<usize>) {
    if remaining == 0 {
        found.push(used);
        return;
    }
    for (i, &size) in containers.iter().enumerate() {
        if size > 0 && size <= remaining {
            fill(&containers[i + 1..], remaining - size, used + 1, found);
        }
    }
}

/// How many combinations use the fewest containers.
pub fn fewest_container_ways(containers: &[u32], litres: u32) -> usize {
    let used = combinations(containers, litres);
    match used.iter().min() {
        Some(&min) => used.iter().filter(|&&n| n == min).count(),
        None => 0,
    }
}

fn containers(input: &str) -> Result<Vec<u32>> {
    let sizes = numbers(input)?;
    if sizes.is_empty() {
        bail!("No containers in the fridge");
    }
    Ok(sizes)
}

pub struct TooMuch;

impl Solution for TooMuch {
    fn title(&self) -> &'static str {
        "No Such Thing as Too Much"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(combinations(&containers(input)?, EGGNOG_LITRES).len().into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(fewest_container_ways(&containers(input)?, EGGNOG_LITRES).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: [u32; 5] = [20, 15, 10, 5, 5];

    #[test]
    fn test_combinations() {
        let used = combinations(&EXAMPLE, 25);
        assert_eq!(used.len(), 4);
        assert_eq!(used.iter().min(), Some(&2));
    }

    #[test]
    fn test_fewest_containers() {
        assert_eq!(fewest_container_ways(&EXAMPLE, 25), 3);
    }

    #[test]
    fn test_nothing_fits() {
        assert!(combinations(&EXAMPLE, 1).is_empty());
        assert_eq!(fewest_container_ways(&EXAMPLE, 1), 0);
    }

    #[test]
    fn test_input_parsing() {
        assert_eq!(containers("20\n15\n10\n").unwrap(), vec![20, 15, 10]);
        assert!(containers("").is_err());
        assert!(containers("20\nbig\n").is_err());
    }
}
