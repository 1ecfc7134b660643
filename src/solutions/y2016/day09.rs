//! Day 9: Explosives in Cyberspace
//!
//! Lengths are computed without building the decompressed text.

use anyhow::{anyhow, bail, Result};

use crate::puzzle::{Answer, Solution};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Markers inside repeated data are plain text.
    V1,
    /// Markers inside repeated data are expanded too.
    V2,
}

/// Parse a `(AxB)` marker at the start of `data`; returns length, times and marker size.
fn marker(data: &[u8]) -> Result<Option<(usize, u64, usize)>> {
    if data.first() != Some(&b'(') {
        return Ok(None);
    }
    let close = data
        .iter()
        .position(|&b| b == b')')
        .ok_or_else(|| anyhow!("Unterminated marker"))?;
    let inner = std::str::from_utf8(&data[1..close])?;
    let (length, times) = inner
        .split_once('x')
        .ok_or_else(|| anyhow!("Malformed marker '({})'", inner))?;
    let length = length
        .parse()
        .map_err(|_| anyhow!("Malformed marker '({})'", inner))?;
    let times = times
        .parse()
        .map_err(|_| anyhow!("Malformed marker '({})'", inner))?;
    Ok(Some((length, times, close + 1)))
}

pub fn decompressed_len(data: &str, format: Format) -> Result<u64> {
    let bytes: Vec<u8> = data.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    expand(&bytes, format)
}

fn expand(data: &[u8], format: Format) -> Result<u64> {
    let mut total: u64 = 0;
    let mut i = 0;
    while i < data.len() {
        match marker(&data[i..])? {
            Some((length, times, size)) => {
                let start = i + size;
                let end = match start.checked_add(length) {
                    Some(end) if end <= data.len() => end,
                    _ => bail!("Marker repeats {} characters past the end", length),
                };
                let section = match format {
                    Format::V1 => length as u64,
                    Format::V2 => expand(&data[start..end], format)?,
                };
                total = section
                    .checked_mul(times)
                    .and_then(|repeated| total.checked_add(repeated))
                    .ok_or_else(|| anyhow!("Decompressed length does not fit in 64 bits"))?;
                i = end;
            }
            None => {
                total = total
                    .checked_add(1)
                    .ok_or_else(|| anyhow!("Decompressed length does not fit in 64 bits"))?;
                i += 1;
            }
        }
    }
    Ok(total)
}

pub struct Explosives;

impl Solution for Explosives {
    fn title(&self) -> &'static str {
        "Explosives in Cyberspace"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(decompressed_len(input, Format::V1)?.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(decompressed_len(input, Format::V2)?.into())
    }
}
