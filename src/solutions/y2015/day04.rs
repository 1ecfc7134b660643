//! Day 4: The Ideal Stocking Stuffer
//!
//! AdventCoin mining: find the lowest positive number which, appended to the
//! secret key, produces an MD5 hash starting with enough zeros.

use anyhow::{bail, Result};
use tracing::debug;

use crate::digest::{leading_zero_nibbles, SaltedHasher};
use crate::parse::single_line;
use crate::puzzle::{Answer, Solution};

/// Lowest positive number whose hash with `key` starts with `zeros` zeros.
pub fn mine(key: &str, zeros: usize) -> Result<u64> {
    if key.trim().is_empty() {
        bail!("No secret key given");
    }
    if zeros < 1 {
        bail!("Too low number of leading zeros: {}", zeros);
    }
    if zeros >= 32 {
        bail!("An MD5 hex digest has only 32 characters");
    }

    let hasher = SaltedHasher::new(key);
    let found = (1..u64::MAX)
        .find(|&n| leading_zero_nibbles(&hasher.digest(n)) >= zeros)
        .unwrap_or(u64::MAX);
    debug!(key, zeros, found, "mined AdventCoin");
    Ok(found)
}

pub struct StockingStuffer;

impl Solution for StockingStuffer {
    fn title(&self) -> &'static str {
        "The Ideal Stocking Stuffer"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(mine(single_line(input)?, 5)?.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(mine(single_line(input)?, 6)?.into())
    }
}
