//! Day 14: Reindeer Olympics

use anyhow::{bail, Result};

use crate::parse::{capture, field};
use crate::puzzle::{lines, Answer, Solution};

pub const RACE_SECONDS: u32 = 2503;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reindeer {
    pub name: String,
    pub speed: u32,
    pub fly: u32,
    pub rest: u32,
}

impl Reindeer {
    /// Parse `Comet can fly 14 km/s for 10 seconds, but then must rest for 127 seconds.`
    pub fn parse(line: &str) -> Result<Self> {
        let re = crate::static_regex!(
            r"^(?P<name>\w+) can fly (?P<speed>\d+) km/s for (?P<fly>\d+) seconds?, but then must rest for (?P<rest>\d+) seconds?\.$"
        );
        let caps = capture(re, line.trim())?;
        let reindeer = Self {
            name: field(&caps, "name")?,
            speed: field(&caps, "speed")?,
            fly: field(&caps, "fly")?,
            rest: field(&caps, "rest")?,
        };
        if reindeer.fly == 0 {
            bail!("{} never flies", reindeer.name);
        }
        Ok(reindeer)
    }

    /// Kilometres covered after `seconds`.
    pub fn distance_after(&self, seconds: u32) -> u64 {
        let (fly, seconds) = (u64::from(self.fly), u64::from(seconds));
        let cycle = fly + u64::from(self.rest);
        let flown = seconds / cycle * fly + (seconds % cycle).min(fly);
        flown * u64::from(self.speed)
    }
}

pub fn parse_herd(input: &str) -> Result<Vec<Reindeer>> {
    let herd = lines(input)
        .map(Reindeer::parse)
        .collect::<Result<Vec<_>>>()?;
    if herd.is_empty() {
        bail!("No reindeer entered the race");
    }
    Ok(herd)
}

pub fn winning_distance(herd: &[Reindeer], seconds: u32) -> u64 {
    herd.iter()
        .map(|r| r.distance_after(seconds))
        .max()
        .unwrap_or(0)
}

/// Points per reindeer when every second the leaders (ties included) score one.
pub fn points_after(herd: &[Reindeer], seconds: u32) -> Vec<u32> {
    let mut points = vec![0; herd.len()];
    for second in 1..=seconds {
        let distances: Vec<u64> = herd.iter().map(|r| r.distance_after(second)).collect();
        let lead = distances.iter().copied().max().unwrap_or(0);
        for (score, distance) in points.iter_mut().zip(&distances) {
            if *distance == lead {
                *score += 1;
            }
        }
    }
    points
}

pub struct ReindeerOlympics;

impl Solution for ReindeerOlympics {
    fn title(&self) -> &'static str {
        "Reindeer Olympics"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        let herd = parse_herd(input)?;
        Ok(winning_distance(&herd, RACE_SECONDS).into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let herd = parse_herd(input)?;
        let best = points_after(&herd, RACE_SECONDS)
            .into_iter()
            .max()
            .unwrap_or(0);
        Ok(best.into())
    }
}
