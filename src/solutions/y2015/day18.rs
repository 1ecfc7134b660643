//! Day 18: Like a GIF For Your Yard

use anyhow::{bail, Result};
use std::fmt;

use crate::puzzle::{lines, Answer, Solution};

pub const STEPS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Yard {
    width: usize,
    height: usize,
    lights: Vec<bool>,
    stuck_corners: bool,
}

impl Yard {
    pub fn parse(input: &str) -> Result<Self> {
        let rows: Vec<&str> = lines(input).map(str::trim).collect();
        let width = rows.first().map_or(0, |r| r.len());
        if width == 0 {
            bail!("The yard has no lights");
        }

        let mut lights = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                bail!("Row {} has {} lights, expected {}", y + 1, row.len(), width);
            }
            for c in row.chars() {
                lights.push(match c {
                    '#' => true,
                    '.' => false,
                    other => bail!("Unknown light state '{}' in row {}", other, y + 1),
                });
            }
        }
        Ok(Self {
            width,
            height: rows.len(),
            lights,
            stuck_corners: false,
        })
    }

    /// The four corner lights are stuck on from now on.
    pub fn with_stuck_corners(mut self) -> Self {
        self.stuck_corners = true;
        self.force_corners();
        self
    }

    fn force_corners(&mut self) {
        if !self.stuck_corners {
            return;
        }
        let (w, h) = (self.width, self.height);
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            self.lights[y * w + x] = true;
        }
    }

    fn neighbours_on(&self, x: usize, y: usize) -> usize {
        let mut count = 0;
        for ny in y.saturating_sub(1)..=(y + 1).min(self.height - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(self.width - 1) {
                if (nx, ny) != (x, y) && self.lights[ny * self.width + nx] {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn step(&mut self) {
        let mut next = Vec::with_capacity(self.lights.len());
        for y in 0..self.height {
            for x in 0..self.width {
                let on = self.lights[y * self.width + x];
                next.push(matches!((on, self.neighbours_on(x, y)), (true, 2) | (_, 3)));
            }
        }
        self.lights = next;
        self.force_corners();
    }

    pub fn animate(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    pub fn lit(&self) -> usize {
        self.lights.iter().filter(|&&on| on).count()
    }
}

impl fmt::Display for Yard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.lights.chunks(self.width) {
            let line: String = row.iter().map(|&on| if on { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

pub struct GifYard;

impl Solution for GifYard {
    fn title(&self) -> &'static str {
        "Like a GIF For Your Yard"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        let mut yard = Yard::parse(input)?;
        yard.animate(STEPS);
        Ok(yard.lit().into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let mut yard = Yard::parse(input)?.with_stuck_corners();
        yard.animate(STEPS);
        Ok(yard.lit().into())
    }
}
