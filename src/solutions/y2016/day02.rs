//! Day 2: Bathroom Security

use anyhow::{bail, Result};

use crate::puzzle::{lines, Answer, Solution};

/// A keypad layout; `None` cells have no button.
pub struct Keypad {
    rows: &'static [&'static [Option<char>]],
    start: (usize, usize),
}

pub const SQUARE: Keypad = Keypad {
    rows: &[
        &[Some('1'), Some('2'), Some('3')],
        &[Some('4'), Some('5'), Some('6')],
        &[Some('7'), Some('8'), Some('9')],
    ],
    start: (1, 1),
};

pub const DIAMOND: Keypad = Keypad {
    rows: &[
        &[None, None, Some('1'), None, None],
        &[None, Some('2'), Some('3'), Some('4'), None],
        &[Some('5'), Some('6'), Some('7'), Some('8'), Some('9')],
        &[None, Some('A'), Some('B'), Some('C'), None],
        &[None, None, Some('D'), None, None],
    ],
    start: (0, 2),
};

impl Keypad {
    fn button(&self, (x, y): (usize, usize)) -> Option<char> {
        self.rows.get(y)?.get(x).copied().flatten()
    }

    /// Move one step, staying put when no button lies in that direction.
    fn step(&self, (x, y): (usize, usize), direction: char) -> Result<(usize, usize)> {
        let next = match direction {
            'U' => (x, y.wrapping_sub(1)),
            'D' => (x, y + 1),
            'L' => (x.wrapping_sub(1), y),
            'R' => (x + 1, y),
            other => bail!("Unknown direction '{}'", other),
        };
        Ok(if self.button(next).is_some() { next } else { (x, y) })
    }

    /// The code produced by following one line of moves per button.
    pub fn code(&self, input: &str) -> Result<String> {
        let mut position = self.start;
        let mut code = String::new();
        for line in lines(input) {
            for direction in line.trim().chars() {
                position = self.step(position, direction)?;
            }
            if let Some(button) = self.button(position) {
                code.push(button);
            }
        }
        Ok(code)
    }
}

pub struct BathroomSecurity;

impl Solution for BathroomSecurity {
    fn title(&self) -> &'static str {
        "Bathroom Security"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(SQUARE.code(input)?.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(DIAMOND.code(input)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "ULL\nRRDDD\nLURDL\nUUUUD\n";

    #[test]
    fn test_square_keypad() {
        assert_eq!(SQUARE.code(EXAMPLE).unwrap(), "1985");
    }

    #[test]
    fn test_diamond_keypad() {
        assert_eq!(DIAMOND.code(EXAMPLE).unwrap(), "5DB3");
    }

    #[test]
    fn test_edges_are_ignored() {
        assert_eq!(SQUARE.code("UUUUUUU\nLLLLL\n").unwrap(), "21");
        assert_eq!(DIAMOND.code("UUUU\n").unwrap(), "5");
    }

    #[test]
    fn test_unknown_direction() {
        assert!(BathroomSecurity.part_one("UX\n").is_err());
    }
}
