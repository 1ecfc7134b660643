//! Day 13: Knights of the Dinner Table

use anyhow::{anyhow, bail, Result};
use std::collections::{BTreeSet, HashMap};

use crate::combinatorics::permutations;
use crate::parse::{capture, field};
use crate::puzzle::{lines, Answer, Solution};

pub const MYSELF: &str = "me";

/// Happiness each guest gains or loses next to each other guest.
#[derive(Debug, Default, Clone)]
pub struct Guests {
    names: Vec<String>,
    happiness: HashMap<(String, String), i32>,
}

impl Guests {
    /// Parse `Alice would gain 54 happiness units by sitting next to Bob.`
    pub fn parse(input: &str) -> Result<Self> {
        let re = crate::static_regex!(
            r"^(?P<who>\w+) would (?P<change>gain|lose) (?P<value>\d+) happiness units? by sitting next to (?P<neighbor>\w+)\.$"
        );
        let mut names = BTreeSet::new();
        let mut happiness = HashMap::new();
        for line in lines(input) {
            let caps = capture(re, line.trim())?;
            let who: String = field(&caps, "who")?;
            let neighbor: String = field(&caps, "neighbor")?;
            let mut value: i32 = field(&caps, "value")?;
            if &caps["change"] == "lose" {
                value = -value;
            }
            names.insert(who.clone());
            names.insert(neighbor.clone());
            happiness.insert((who, neighbor), value);
        }
        Ok(Self {
            names: names.into_iter().collect(),
            happiness,
        })
    }

    /// Add an apathetic guest who neither gains nor loses next to anyone.
    pub fn with_guest(mut self, name: &str) -> Self {
        for other in &self.names {
            self.happiness.insert((name.to_string(), other.clone()), 0);
            self.happiness.insert((other.clone(), name.to_string()), 0);
        }
        self.names.push(name.to_string());
        self
    }

    fn pair(&self, a: usize, b: usize) -> Result<i32> {
        let (left, right) = (&self.names[a], &self.names[b]);
        let lookup = |x: &String, y: &String| {
            self.happiness
                .get(&(x.clone(), y.clone()))
                .copied()
                .ok_or_else(|| anyhow!("No happiness known for {} next to {}", x, y))
        };
        Ok(lookup(left, right)? + lookup(right, left)?)
    }

    /// Total happiness of the best circular seating.
    pub fn best_seating(&self) -> Result<i32> {
        let n = self.names.len();
        if n < 2 {
            bail!("A table needs at least two guests");
        }

        // rotations are equivalent, so the first guest keeps seat zero
        let mut best = None;
        for rest in permutations(n - 1) {
            let mut table = vec![0];
            table.extend(rest.into_iter().map(|i| i + 1));
            let mut total = 0;
            for seat in 0..n {
                total += self.pair(table[seat], table[(seat + 1) % n])?;
            }
            best = best.max(Some(total));
        }
        best.ok_or_else(|| anyhow!("No seating found"))
    }
}

pub struct DinnerTable;

impl Solution for DinnerTable {
    fn title(&self) -> &'static str {
        "Knights of the Dinner Table"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(Guests::parse(input)?.best_seating()?.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let guests = Guests::parse(input)?.with_guest(MYSELF);
        Ok(guests.best_seating()?.into())
    }
}
