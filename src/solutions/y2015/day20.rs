//! Day 20: Infinite Elves and Infinite Houses

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::parse::single_line;
use crate::puzzle::{Answer, Solution};

/// How the elves deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// Presents per house, times the elf number.
    pub presents_per_elf: u64,
    /// Houses an elf visits before stopping; `None` means forever.
    pub houses_per_elf: Option<usize>,
}

pub const ENDLESS: Delivery = Delivery {
    presents_per_elf: 10,
    houses_per_elf: None,
};

pub const LAZY: Delivery = Delivery {
    presents_per_elf: 11,
    houses_per_elf: Some(50),
};

/// Presents delivered to houses `1..=last`, index 0 unused.
pub fn presents(last: usize, delivery: Delivery) -> Vec<u64> {
    let mut houses = vec![0u64; last + 1];
    for elf in 1..=last {
        let gift = elf as u64 * delivery.presents_per_elf;
        let visits = (elf..=last).step_by(elf);
        match delivery.houses_per_elf {
            Some(limit) => visits.take(limit).for_each(|h| houses[h] += gift),
            None => visits.for_each(|h| houses[h] += gift),
        }
    }
    houses
}

/// Lowest house number receiving at least `target` presents.
pub fn lowest_house(target: u64, delivery: Delivery) -> Result<usize> {
    if target == 0 {
        return Ok(1);
    }
    if delivery.presents_per_elf == 0 {
        bail!("Elves without presents never reach {}", target);
    }
    // elf n alone brings n * presents_per_elf to house n
    let last = target.div_ceil(delivery.presents_per_elf) as usize;
    let houses = presents(last, delivery);
    let found = houses
        .iter()
        .skip(1)
        .position(|&p| p >= target)
        .map(|i| i + 1)
        .context("No house reached the target")?;
    debug!(target, searched = last, found, "house found");
    Ok(found)
}

fn target(input: &str) -> Result<u64> {
    let line = single_line(input)?;
    line.parse()
        .with_context(|| format!("Expected a number of presents, got '{}'", line))
}

pub struct InfiniteElves;

impl Solution for InfiniteElves {
    fn title(&self) -> &'static str {
        "Infinite Elves and Infinite Houses"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(lowest_house(target(input)?, ENDLESS)?.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(lowest_house(target(input)?, LAZY)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presents_per_house() {
        let houses = presents(9, ENDLESS);
        assert_eq!(&houses[1..], &[10, 30, 40, 70, 60, 120, 80, 150, 130]);
    }

    #[test]
    fn test_lowest_house() {
        let cases = [
            (10, 1),
            (30, 2),
            (40, 3),
            (70, 4),
            (60, 4),
            (120, 6),
            (80, 6),
            (150, 8),
            (130, 8),
        ];
        for (target, house) in cases {
            assert_eq!(lowest_house(target, ENDLESS).unwrap(), house, "target {}", target);
        }
    }

    #[test]
    fn test_lazy_elves_stop() {
        let houses = presents(100, LAZY);
        // elf 1 skips house 51 onwards
        assert_eq!(houses[1], 11);
        assert_eq!(houses[50], 11 * (1 + 2 + 5 + 10 + 25 + 50));
        assert_eq!(houses[51], 11 * (3 + 17 + 51));
    }

    #[test]
    fn test_bad_input() {
        assert!(InfiniteElves.part_one("lots\n").is_err());
        assert_eq!(InfiniteElves.part_one("0\n").unwrap(), Answer::Number(1));
    }
}
