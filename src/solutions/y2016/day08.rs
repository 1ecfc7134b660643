//! Day 8: Two-Factor Authentication

use anyhow::{bail, Result};
use std::fmt;

use crate::parse::{capture, field};
use crate::puzzle::{lines, Answer, Solution};

pub const SCREEN_WIDTH: usize = 50;
pub const SCREEN_HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Rect { width: usize, height: usize },
    RotateRow { y: usize, by: usize },
    RotateColumn { x: usize, by: usize },
}

impl Operation {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let rect = crate::static_regex!(r"^rect (?P<a>\d+)x(?P<b>\d+)$");
        let rotate = crate::static_regex!(
            r"^rotate (?P<what>row y|column x)=(?P<a>\d+) by (?P<b>\d+)$"
        );
        if line.starts_with("rect") {
            let caps = capture(rect, line)?;
            return Ok(Operation::Rect {
                width: field(&caps, "a")?,
                height: field(&caps, "b")?,
            });
        }
        let caps = capture(rotate, line)?;
        let (a, b) = (field(&caps, "a")?, field(&caps, "b")?);
        Ok(match &caps["what"] {
            "row y" => Operation::RotateRow { y: a, by: b },
            _ => Operation::RotateColumn { x: a, by: b },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Screen {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    pub fn apply(&mut self, operation: Operation) -> Result<()> {
        match operation {
            Operation::Rect { width, height } => {
                if width > self.width || height > self.height {
                    bail!("rect {}x{} does not fit the screen", width, height);
                }
                for y in 0..height {
                    self.pixels[y * self.width..y * self.width + width].fill(true);
                }
            }
            Operation::RotateRow { y, by } => {
                if y >= self.height {
                    bail!("There is no row {}", y);
                }
                self.pixels[y * self.width..(y + 1) * self.width].rotate_right(by % self.width);
            }
            Operation::RotateColumn { x, by } => {
                if x >= self.width {
                    bail!("There is no column {}", x);
                }
                let mut column: Vec<bool> = (0..self.height)
                    .map(|y| self.pixels[y * self.width + x])
                    .collect();
                column.rotate_right(by % self.height);
                for (y, on) in column.into_iter().enumerate() {
                    self.pixels[y * self.width + x] = on;
                }
            }
        }
        Ok(())
    }

    pub fn lit(&self) -> usize {
        self.pixels.iter().filter(|&&on| on).count()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .pixels
            .chunks(self.width)
            .map(|row| row.iter().map(|&on| if on { '#' } else { '.' }).collect())
            .collect();
        write!(f, "{}", rows.join("\n"))
    }
}

pub fn swipe(input: &str, width: usize, height: usize) -> Result<Screen> {
    let mut screen = Screen::new(width, height);
    for line in lines(input) {
        screen.apply(Operation::parse(line)?)?;
    }
    Ok(screen)
}

pub struct TwoFactor;

impl Solution for TwoFactor {
    fn title(&self) -> &'static str {
        "Two-Factor Authentication"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(swipe(input, SCREEN_WIDTH, SCREEN_HEIGHT)?.lit().into())
    }

    /// The rendered screen; reading the letters is left to the human.
    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(swipe(input, SCREEN_WIDTH, SCREEN_HEIGHT)?.to_string().into())
    }
}
