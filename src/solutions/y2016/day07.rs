//! Day 7: Internet Protocol Version 7

use anyhow::{bail, Result};

use crate::puzzle::{lines, Answer, Solution};

/// An address split into its supernet and hypernet (bracketed) sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address<'a> {
    pub supernets: Vec<&'a str>,
    pub hypernets: Vec<&'a str>,
}

impl<'a> Address<'a> {
    pub fn parse(line: &'a str) -> Result<Self> {
        let mut address = Address::default();
        let mut rest = line.trim();
        while !rest.is_empty() {
            match rest.find('[') {
                Some(open) => {
                    let close = match rest[open..].find(']') {
                        Some(offset) => open + offset,
                        None => bail!("Unclosed bracket in '{}'", line),
                    };
                    address.supernets.push(&rest[..open]);
                    let inner = &rest[open + 1..close];
                    if inner.contains('[') {
                        bail!("Nested brackets in '{}'", line);
                    }
                    address.hypernets.push(inner);
                    rest = &rest[close + 1..];
                }
                None => {
                    if rest.contains(']') {
                        bail!("Unopened bracket in '{}'", line);
                    }
                    address.supernets.push(rest);
                    rest = "";
                }
            }
        }
        Ok(address)
    }

    pub fn supports_tls(&self) -> bool {
        self.supernets.iter().any(|s| has_abba(s)) && !self.hypernets.iter().any(|h| has_abba(h))
    }

    pub fn supports_ssl(&self) -> bool {
        self.supernets.iter().any(|s| {
            s.as_bytes().windows(3).any(|w| {
                w[0] == w[2] && w[0] != w[1] && {
                    let bab = [w[1], w[0], w[1]];
                    self.hypernets
                        .iter()
                        .any(|h| h.as_bytes().windows(3).any(|x| x == bab))
                }
            })
        })
    }
}

/// An `xyyx` pattern with two different characters.
pub fn has_abba(s: &str) -> bool {
    s.as_bytes()
        .windows(4)
        .any(|w| w[0] == w[3] && w[1] == w[2] && w[0] != w[1])
}

fn count(input: &str, rule: fn(&Address) -> bool) -> Result<usize> {
    let mut supported = 0;
    for line in lines(input) {
        if rule(&Address::parse(line)?) {
            supported += 1;
        }
    }
    Ok(supported)
}

pub struct Ipv7;

impl Solution for Ipv7 {
    fn title(&self) -> &'static str {
        "Internet Protocol Version 7"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(count(input, |address| address.supports_tls())?.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        Ok(count(input, |address| address.supports_ssl())?.into())
    }
}
