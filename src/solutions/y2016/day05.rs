//! Day 5: How About a Nice Game of Chess?

use anyhow::{bail, Result};
use tracing::{debug, trace};

use crate::digest::{leading_zero_nibbles, SaltedHasher};
use crate::parse::single_line;
use crate::puzzle::{Answer, Solution};

pub const PASSWORD_LEN: usize = 8;
const ZEROS: usize = 5;

/// Hex digests of `door || index` that start with five zeros, in index order.
pub struct InterestingHashes {
    hasher: SaltedHasher,
    index: u64,
}

impl InterestingHashes {
    pub fn new(door: &str) -> Self {
        Self {
            hasher: SaltedHasher::new(door),
            index: 0,
        }
    }
}

impl Iterator for InterestingHashes {
    type Item = (u64, String);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < u64::MAX {
            let index = self.index;
            self.index += 1;
            if leading_zero_nibbles(&self.hasher.digest(index)) >= ZEROS {
                let hex = self.hasher.hex(index);
                trace!(index, %hex, "interesting hash");
                return Some((index, hex));
            }
        }
        None
    }
}

fn sixth_and_seventh(hex: &str) -> Option<(char, char)> {
    let mut chars = hex.chars().skip(ZEROS);
    Some((chars.next()?, chars.next()?))
}

/// The sixth character of each interesting hash, in order.
pub fn simple_password(door: &str) -> Result<String> {
    if door.is_empty() {
        bail!("No door id given");
    }
    let password: String = InterestingHashes::new(door)
        .filter_map(|(_, hex)| sixth_and_seventh(&hex).map(|(sixth, _)| sixth))
        .take(PASSWORD_LEN)
        .collect();
    debug!(door, %password, "first door opened");
    Ok(password)
}

/// The sixth character names a position, the seventh fills it; first one wins.
pub fn positional_password(door: &str) -> Result<String> {
    if door.is_empty() {
        bail!("No door id given");
    }
    let mut slots = [None; PASSWORD_LEN];
    for (_, hex) in InterestingHashes::new(door) {
        let Some((position, c)) = sixth_and_seventh(&hex) else {
            continue;
        };
        let Some(position) = position.to_digit(10).map(|p| p as usize) else {
            continue;
        };
        if position < PASSWORD_LEN && slots[position].is_none() {
            slots[position] = Some(c);
            if slots.iter().all(Option::is_some) {
                break;
            }
        }
    }
    let password: String = slots.iter().flatten().collect();
    debug!(door, %password, "second door opened");
    Ok(password)
}

pub struct NiceGameOfChess;

impl Solution for NiceGameOfChess {
    fn title(&self) -> &'static str {
        "How About a Nice Game of Chess?"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(simple_password(single_line(input)?)?.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(positional_password(single_line(input)?)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_interesting_hash() {
        let hex = SaltedHasher::new("abc").hex(3231929);
        assert!(hex.starts_with("00000"));
        assert_eq!(sixth_and_seventh(&hex), Some(('1', '5')));
    }

    #[test]
    fn test_iterator_starts_at_known_index() {
        let mut hashes = InterestingHashes::new("abc");
        hashes.index = 3231929;
        let (index, hex) = hashes.next().unwrap();
        assert_eq!(index, 3231929);
        assert!(hex.starts_with("000001"));
    }

    #[test]
    #[ignore = "hashes several million candidates"]
    fn test_example_passwords() {
        assert_eq!(simple_password("abc").unwrap(), "18f47a30");
        assert_eq!(positional_password("abc").unwrap(), "05ace8e3");
    }

    #[test]
    fn test_empty_door() {
        assert!(simple_password("").is_err());
        assert!(positional_password("").is_err());
    }
}
