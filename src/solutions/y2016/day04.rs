//! Day 4: Security Through Obscurity

use anyhow::{anyhow, Result};
use std::collections::BTreeMap;

use crate::parse::{capture, field};
use crate::puzzle::{lines, Answer, Solution};

pub const NORTH_POLE_STORAGE: &str = "northpole";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub sector: u32,
    pub checksum: String,
}

impl Room {
    /// Parse `aaaaa-bbb-z-y-x-123[abxyz]`.
    pub fn parse(line: &str) -> Result<Self> {
        let re = crate::static_regex!(
            r"^(?P<name>[a-z]+(?:-[a-z]+)*)-(?P<sector>\d+)\[(?P<checksum>[a-z]{5})\]$"
        );
        let caps = capture(re, line.trim())?;
        Ok(Self {
            name: field(&caps, "name")?,
            sector: field(&caps, "sector")?,
            checksum: field(&caps, "checksum")?,
        })
    }

    /// The five most common letters of the name, ties broken alphabetically.
    pub fn expected_checksum(&self) -> String {
        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        for c in self.name.chars().filter(|&c| c != '-') {
            *counts.entry(c).or_default() += 1;
        }
        let mut letters: Vec<(char, usize)> = counts.into_iter().collect();
        // stable sort keeps the alphabetical order among equal counts
        letters.sort_by(|a, b| b.1.cmp(&a.1));
        letters.iter().take(5).map(|&(c, _)| c).collect()
    }

    pub fn is_real(&self) -> bool {
        self.checksum == self.expected_checksum()
    }

    /// Shift every letter forward by the sector id; dashes become spaces.
    pub fn decrypt(&self) -> String {
        let shift = (self.sector % 26) as u8;
        self.name
            .bytes()
            .map(|b| match b {
                b'-' => ' ',
                letter => char::from((letter - b'a' + shift) % 26 + b'a'),
            })
            .collect()
    }
}

fn rooms(input: &str) -> Result<Vec<Room>> {
    lines(input).map(Room::parse).collect()
}

pub struct ObscureRooms;

impl Solution for ObscureRooms {
    fn title(&self) -> &'static str {
        "Security Through Obscurity"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        let sum: u32 = rooms(input)?
            .iter()
            .filter(|room| room.is_real())
            .map(|room| room.sector)
            .sum();
        Ok(sum.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let sector = rooms(input)?
            .iter()
            .filter(|room| room.is_real())
            .find(|room| room.decrypt().contains(NORTH_POLE_STORAGE))
            .map(|room| room.sector)
            .ok_or_else(|| anyhow!("No real room stores North Pole objects"))?;
        Ok(sector.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
aaaaa-bbb-z-y-x-123[abxyz]
a-b-c-d-e-f-g-h-987[abcde]
not-a-real-room-404[oarel]
totally-real-room-200[decoy]
";

    #[test]
    fn test_parse() {
        let room = Room::parse("aaaaa-bbb-z-y-x-123[abxyz]").unwrap();
        assert_eq!(room.name, "aaaaa-bbb-z-y-x");
        assert_eq!(room.sector, 123);
        assert_eq!(room.checksum, "abxyz");
        assert!(Room::parse("aaaaa-bbb-123").is_err());
        assert!(Room::parse("-123[abcde]").is_err());
    }

    #[test]
    fn test_real_rooms() {
        let real: Vec<bool> = rooms(EXAMPLE).unwrap().iter().map(Room::is_real).collect();
        assert_eq!(real, vec![true, true, true, false]);
        assert_eq!(ObscureRooms.part_one(EXAMPLE).unwrap(), Answer::Number(1514));
    }

    #[test]
    fn test_decrypt() {
        let room = Room {
            name: "qzmt-zixmtkozy-ivhz".into(),
            sector: 343,
            checksum: String::new(),
        };
        assert_eq!(room.decrypt(), "very encrypted name");
    }

    #[test]
    fn test_find_north_pole() {
        let mut room = Room {
            name: "northpole-object-storage".into(),
            sector: 26,
            checksum: String::new(),
        };
        room.checksum = room.expected_checksum();
        let input = format!("{}\n{}-26[{}]\n", EXAMPLE, room.name, room.checksum);
        assert_eq!(ObscureRooms.part_two(&input).unwrap(), Answer::Number(26));
        assert!(ObscureRooms.part_two(EXAMPLE).is_err());
    }
}
