//! Day 2: I Was Told There Would Be No Math

use anyhow::{anyhow, Context, Result};

use crate::puzzle::{lines, Answer, Solution};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Present {
    pub length: u32,
    pub width: u32,
    pub height: u32,
}

impl Present {
    /// Parse `LxWxH` notation.
    pub fn parse(text: &str) -> Result<Self> {
        let dims = text
            .trim()
            .split('x')
            .map(|d| {
                d.parse::<u32>()
                    .with_context(|| format!("Invalid dimension '{}' in '{}'", d, text))
            })
            .collect::<Result<Vec<_>>>()?;

        match dims.as_slice() {
            &[length, width, height] => Ok(Self {
                length,
                width,
                height,
            }),
            _ => Err(anyhow!("Expected LxWxH but got '{}'", text)),
        }
    }

    fn dims(&self) -> [u64; 3] {
        [self.length, self.width, self.height].map(u64::from)
    }

    fn sorted(&self) -> [u64; 3] {
        let mut dims = self.dims();
        dims.sort_unstable();
        dims
    }

    fn too_large(&self) -> anyhow::Error {
        anyhow!(
            "Present {}x{}x{} is too large to measure",
            self.length,
            self.width,
            self.height
        )
    }

    pub fn surface_area(&self) -> Result<u64> {
        let [l, w, h] = self.dims();
        (l * w)
            .checked_add(w * h)
            .and_then(|sum| sum.checked_add(h * l))
            .and_then(|sum| sum.checked_mul(2))
            .ok_or_else(|| self.too_large())
    }

    /// Surface area plus slack equal to the smallest side.
    pub fn wrapping_paper(&self) -> Result<u64> {
        let [a, b, _] = self.sorted();
        self.surface_area()?
            .checked_add(a * b)
            .ok_or_else(|| self.too_large())
    }

    /// Smallest perimeter plus a bow as long as the volume.
    pub fn ribbon(&self) -> Result<u64> {
        let [a, b, c] = self.sorted();
        (a * b)
            .checked_mul(c)
            .and_then(|volume| volume.checked_add(2 * (a + b)))
            .ok_or_else(|| self.too_large())
    }
}

fn presents(input: &str) -> Result<Vec<Present>> {
    lines(input).map(Present::parse).collect()
}

fn total(amounts: impl Iterator<Item = Result<u64>>) -> Result<Answer> {
    let mut total: u64 = 0;
    for amount in amounts {
        total = total
            .checked_add(amount?)
            .ok_or_else(|| anyhow!("Order total is too large"))?;
    }
    Ok(total.into())
}

pub struct NoMath;

impl Solution for NoMath {
    fn title(&self) -> &'static str {
        "I Was Told There Would Be No Math"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        total(presents(input)?.iter().map(Present::wrapping_paper))
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        total(presents(input)?.iter().map(Present::ribbon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_paper() {
        assert_eq!(Present::parse("2x3x4").unwrap().wrapping_paper().unwrap(), 58);
        assert_eq!(Present::parse("1x1x10").unwrap().wrapping_paper().unwrap(), 43);
    }

    #[test]
    fn test_ribbon() {
        assert_eq!(Present::parse("2x3x4").unwrap().ribbon().unwrap(), 34);
        assert_eq!(Present::parse("1x1x10").unwrap().ribbon().unwrap(), 14);
    }

    #[test]
    fn test_totals() {
        let input = "2x3x4\n1x1x10\n";
        assert_eq!(NoMath.part_one(input).unwrap(), Answer::Number(101));
        assert_eq!(NoMath.part_two(input).unwrap(), Answer::Number(48));
    }

    #[test]
    fn test_large_presents() {
        let big = Present::parse("100000x100000x100000").unwrap();
        assert_eq!(big.wrapping_paper().unwrap(), 70_000_000_000);
        assert_eq!(big.ribbon().unwrap(), 1_000_000_000_400_000);

        let huge = Present::parse("4000000000x4000000000x4000000000").unwrap();
        assert!(huge.ribbon().is_err());
        assert!(NoMath.part_two("4000000000x4000000000x4000000000\n").is_err());
        assert!(NoMath.part_one("4000000000x4000000000x1\n").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_notation() {
        assert!(Present::parse("2x3").is_err());
        assert!(Present::parse("2xax4").is_err());
    }
}
