//! Day 19: Medicine for Rudolph

use anyhow::{anyhow, bail, Result};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use tracing::debug;

use crate::parse::capture;
use crate::puzzle::{lines, Answer, Solution};

pub const START_MOLECULE: &str = "e";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    pub replacements: Vec<Replacement>,
    pub molecule: String,
}

impl Machine {
    /// Replacement lines like `H => HO`, then the medicine molecule.
    pub fn parse(input: &str) -> Result<Self> {
        let re = crate::static_regex!(r"^(?P<from>\w+) => (?P<to>\w+)$");
        let mut replacements = Vec::new();
        let mut molecule = None;
        for line in lines(input).map(str::trim) {
            if line.contains("=>") {
                let caps = capture(re, line)?;
                replacements.push(Replacement {
                    from: caps["from"].to_string(),
                    to: caps["to"].to_string(),
                });
            } else if molecule.replace(line.to_string()).is_some() {
                bail!("More than one medicine molecule given");
            }
        }
        let molecule = molecule.ok_or_else(|| anyhow!("No medicine molecule given"))?;
        Ok(Self {
            replacements,
            molecule,
        })
    }
}

/// Every distinct molecule reachable from `molecule` by exactly one replacement.
pub fn single_replacements(molecule: &str, replacements: &[Replacement]) -> HashSet<String> {
    let mut result = HashSet::new();
    for r in replacements {
        for (pos, _) in molecule.match_indices(r.from.as_str()) {
            let mut next = String::with_capacity(molecule.len() + r.to.len());
            next.push_str(&molecule[..pos]);
            next.push_str(&r.to);
            next.push_str(&molecule[pos + r.from.len()..]);
            result.insert(next);
        }
    }
    result
}

/// Fewest replacements to build `target` from a single electron.
///
/// Works backwards as an A* search over molecules, ordered by steps taken plus
/// a lower bound on the steps left; molecule length only breaks ties. Electron
/// rules only apply to the whole molecule.
pub fn fabrication_steps(target: &str, replacements: &[Replacement]) -> Result<usize> {
    let (electron, other): (Vec<&Replacement>, Vec<&Replacement>) = replacements
        .iter()
        .partition(|r| r.from == START_MOLECULE);
    let Some(longest) = electron.iter().map(|r| r.to.len()).max() else {
        bail!("No replacement starts from '{}'", START_MOLECULE);
    };

    // Each reverse step shrinks the molecule by at most this much.
    let max_shrink = other
        .iter()
        .map(|r| r.to.len().saturating_sub(r.from.len()))
        .max()
        .unwrap_or(0)
        .max(1);
    let remaining = |molecule: &str| {
        if molecule == START_MOLECULE {
            0
        } else {
            1 + (molecule.len().saturating_sub(longest) + max_shrink - 1) / max_shrink
        }
    };

    let mut best = HashMap::from([(target.to_string(), 0usize)]);
    let mut queue = BinaryHeap::from([Reverse((
        remaining(target),
        target.len(),
        0usize,
        target.to_string(),
    ))]);
    while let Some(Reverse((_, _, steps, molecule))) = queue.pop() {
        if molecule == START_MOLECULE {
            debug!(steps, explored = best.len(), "molecule fabricated");
            return Ok(steps);
        }
        if best.get(&molecule).is_some_and(|&known| known < steps) {
            continue;
        }

        let mut previous = Vec::new();
        if electron.iter().any(|r| r.to == molecule) {
            previous.push(START_MOLECULE.to_string());
        }
        for r in &other {
            for pos in 0..molecule.len() {
                if !molecule
                    .get(pos..)
                    .is_some_and(|rest| rest.starts_with(r.to.as_str()))
                {
                    continue;
                }
                let mut prev = String::with_capacity(molecule.len());
                prev.push_str(&molecule[..pos]);
                prev.push_str(&r.from);
                prev.push_str(&molecule[pos + r.to.len()..]);
                previous.push(prev);
            }
        }

        let next = steps + 1;
        for prev in previous {
            if best.get(&prev).map_or(true, |&known| next < known) {
                best.insert(prev.clone(), next);
                queue.push(Reverse((next + remaining(&prev), prev.len(), next, prev)));
            }
        }
    }
    bail!("'{}' cannot be fabricated from '{}'", target, START_MOLECULE)
}

pub struct MedicineForRudolph;

impl Solution for MedicineForRudolph {
    fn title(&self) -> &'static str {
        "Medicine for Rudolph"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        let machine = Machine::parse(input)?;
        Ok(single_replacements(&machine.molecule, &machine.replacements)
            .len()
            .into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let machine = Machine::parse(input)?;
        Ok(fabrication_steps(&machine.molecule, &machine.replacements)?.into())
    }
}
