//! Day 9: All in a Single Night

use anyhow::{anyhow, bail, Result};
use std::collections::{BTreeSet, HashMap};

use crate::combinatorics::permutations;
use crate::parse::{capture, field};
use crate::puzzle::{lines, Answer, Solution};

/// Undirected distances between named locations.
#[derive(Debug, Default)]
pub struct Atlas {
    locations: Vec<String>,
    distances: HashMap<(usize, usize), u32>,
}

impl Atlas {
    /// Parse lines like `London to Dublin = 464`.
    pub fn parse(input: &str) -> Result<Self> {
        let re = crate::static_regex!(r"^(?P<from>\w+) to (?P<to>\w+) = (?P<distance>\d+)$");

        let mut edges = Vec::new();
        let mut names = BTreeSet::new();
        for line in lines(input) {
            let caps = capture(re, line.trim())?;
            let from: String = field(&caps, "from")?;
            let to: String = field(&caps, "to")?;
            if from == to {
                bail!("Route from {} to itself", from);
            }
            names.insert(from.clone());
            names.insert(to.clone());
            edges.push((from, to, field::<u32>(&caps, "distance")?));
        }

        let locations: Vec<String> = names.into_iter().collect();
        let index = |name: &str| locations.iter().position(|l| l == name).unwrap_or(0);
        let mut distances = HashMap::new();
        for (from, to, distance) in &edges {
            let (a, b) = (index(from), index(to));
            distances.insert((a.min(b), a.max(b)), *distance);
        }
        Ok(Self {
            locations,
            distances,
        })
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn distance(&self, a: usize, b: usize) -> Result<u32> {
        self.distances
            .get(&(a.min(b), a.max(b)))
            .copied()
            .ok_or_else(|| {
                anyhow!(
                    "No distance known between {} and {}",
                    self.locations[a],
                    self.locations[b]
                )
            })
    }

    /// Lengths of every route visiting each location exactly once.
    pub fn route_lengths(&self) -> Result<Vec<u32>> {
        if self.locations.is_empty() {
            bail!("No locations to visit");
        }
        permutations(self.locations.len())
            .iter()
            .map(|route| {
                route
                    .windows(2)
                    .map(|leg| self.distance(leg[0], leg[1]))
                    .sum::<Result<u32>>()
            })
            .collect()
    }
}

fn route_lengths(input: &str) -> Result<Vec<u32>> {
    Atlas::parse(input)?.route_lengths()
}

pub struct SingleNight;

impl Solution for SingleNight {
    fn title(&self) -> &'static str {
        "All in a Single Night"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        let shortest = route_lengths(input)?.into_iter().min().unwrap_or(0);
        Ok(shortest.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let longest = route_lengths(input)?.into_iter().max().unwrap_or(0);
        Ok(longest.into())
    }
}
