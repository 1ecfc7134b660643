//! Day 6: Probably a Fire Hazard

use anyhow::{bail, Result};

use crate::parse::{capture, field};
use crate::puzzle::{lines, Answer, Solution};

pub const GRID_SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TurnOn,
    TurnOff,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub action: Action,
    pub from: (usize, usize),
    pub to: (usize, usize),
}

impl Instruction {
    /// Parse `turn on 0,0 through 999,999` and friends.
    pub fn parse(line: &str) -> Result<Self> {
        let re = crate::static_regex!(
            r"^(?P<action>turn on|turn off|toggle) (?P<x1>\d+),(?P<y1>\d+) through (?P<x2>\d+),(?P<y2>\d+)$"
        );
        let caps = capture(re, line.trim())?;
        let action = match &caps["action"] {
            "turn on" => Action::TurnOn,
            "turn off" => Action::TurnOff,
            _ => Action::Toggle,
        };
        let from = (field(&caps, "x1")?, field(&caps, "y1")?);
        let to = (field(&caps, "x2")?, field(&caps, "y2")?);
        if from.0 > to.0 || from.1 > to.1 {
            bail!("Rectangle corners out of order in '{}'", line);
        }
        Ok(Self { action, from, to })
    }
}

/// A rectangular grid of lights that reacts to instructions.
pub trait LightGrid {
    fn change(&mut self, action: Action, index: usize);

    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn apply(&mut self, instruction: &Instruction) -> Result<()> {
        let (x2, y2) = instruction.to;
        if x2 >= self.width() || y2 >= self.height() {
            bail!(
                "Instruction reaches {},{} outside a {}x{} grid",
                x2,
                y2,
                self.width(),
                self.height()
            );
        }
        for y in instruction.from.1..=y2 {
            for x in instruction.from.0..=x2 {
                let index = y * self.width() + x;
                self.change(instruction.action, index);
            }
        }
        Ok(())
    }
}

/// Lights that are either on or off.
pub struct SwitchGrid {
    lights: Vec<bool>,
    width: usize,
}

impl SwitchGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            lights: vec![false; width * height],
            width,
        }
    }

    pub fn lit(&self) -> usize {
        self.lights.iter().filter(|&&on| on).count()
    }
}

impl LightGrid for SwitchGrid {
    fn change(&mut self, action: Action, index: usize) {
        let light = &mut self.lights[index];
        *light = match action {
            Action::TurnOn => true,
            Action::TurnOff => false,
            Action::Toggle => !*light,
        };
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.lights.len() / self.width
    }
}

/// Lights with a brightness that never drops below zero.
pub struct DimmerGrid {
    lights: Vec<u32>,
    width: usize,
}

impl DimmerGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            lights: vec![0; width * height],
            width,
        }
    }

    pub fn brightness(&self) -> u64 {
        self.lights.iter().map(|&b| b as u64).sum()
    }
}

impl LightGrid for DimmerGrid {
    fn change(&mut self, action: Action, index: usize) {
        let light = &mut self.lights[index];
        *light = match action {
            Action::TurnOn => *light + 1,
            Action::TurnOff => light.saturating_sub(1),
            Action::Toggle => *light + 2,
        };
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.lights.len() / self.width
    }
}

fn run<G: LightGrid>(grid: &mut G, input: &str) -> Result<()> {
    for line in lines(input) {
        grid.apply(&Instruction::parse(line)?)?;
    }
    Ok(())
}

pub struct FireHazard;

impl Solution for FireHazard {
    fn title(&self) -> &'static str {
        "Probably a Fire Hazard"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        let mut grid = SwitchGrid::new(GRID_SIZE, GRID_SIZE);
        run(&mut grid, input)?;
        Ok(grid.lit().into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let mut grid = DimmerGrid::new(GRID_SIZE, GRID_SIZE);
        run(&mut grid, input)?;
        Ok(grid.brightness().into())
    }
}
