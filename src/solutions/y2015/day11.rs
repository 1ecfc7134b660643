//! Day 11: Corporate Policy

use anyhow::{bail, Result};

use crate::parse::single_line;
use crate::puzzle::{Answer, Solution};

pub const PASSWORD_LEN: usize = 8;

/// Count up like `xx, xy, xz, ya`. A blank password becomes `a`; `zzz` grows to `aaaa`.
pub fn increment(password: &str) -> String {
    let mut letters = password.as_bytes().to_vec();
    let mut i = letters.len();
    loop {
        if i == 0 {
            letters.insert(0, b'a');
            break;
        }
        i -= 1;
        if letters[i] == b'z' {
            letters[i] = b'a';
        } else {
            letters[i] += 1;
            break;
        }
    }
    String::from_utf8_lossy(&letters).into_owned()
}

/// An increasing straight of at least three letters, like `abc` or `xyz`.
pub fn has_straight(password: &str) -> bool {
    password
        .as_bytes()
        .windows(3)
        .any(|w| w[0] + 1 == w[1] && w[1] + 1 == w[2])
}

pub fn has_no_confusing_letters(password: &str) -> bool {
    !password.contains(['i', 'o', 'l'])
}

/// At least two different, non-overlapping pairs like `aa` and `bb`.
pub fn has_two_pairs(password: &str) -> bool {
    let mut first: Option<u8> = None;
    for w in password.as_bytes().windows(2) {
        if w[0] != w[1] {
            continue;
        }
        match first {
            None => first = Some(w[0]),
            Some(letter) if letter != w[0] => return true,
            Some(_) => {}
        }
    }
    false
}

pub fn is_valid(password: &str) -> bool {
    password.len() == PASSWORD_LEN
        && password.bytes().all(|b| b.is_ascii_lowercase())
        && has_straight(password)
        && has_no_confusing_letters(password)
        && has_two_pairs(password)
}

/// The next valid password after `current`.
pub fn next(current: &str) -> Result<String> {
    if current.len() != PASSWORD_LEN || !current.bytes().all(|b| b.is_ascii_lowercase()) {
        bail!(
            "Passwords are exactly {} lowercase letters: '{}'",
            PASSWORD_LEN,
            current
        );
    }
    let mut candidate = increment(current);
    while !is_valid(&candidate) {
        if candidate.len() > PASSWORD_LEN {
            bail!("No valid password follows '{}'", current);
        }
        candidate = increment(&candidate);
    }
    Ok(candidate)
}

pub struct CorporatePolicy;

impl Solution for CorporatePolicy {
    fn title(&self) -> &'static str {
        "Corporate Policy"
    }

    fn part_one(&self, input: &str) -> Result<Answer> {
        Ok(next(single_line(input)?)?.into())
    }

    fn part_two(&self, input: &str) -> Result<Answer> {
        let expired = next(single_line(input)?)?;
        Ok(next(&expired)?.into())
    }
}
