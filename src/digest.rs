//! MD5 helpers shared by the hash-mining puzzles.

use md5::{Digest, Md5};

/// Lowercase hex MD5 of `data`.
pub fn md5_hex(data: &[u8]) -> String {
    format!("{:x}", Md5::digest(data))
}

/// True when `hex` starts with `zeros` zeros and has at least one more character.
pub fn begins_with_zeros(hex: &str, zeros: usize) -> bool {
    hex.len() > zeros && hex.bytes().take(zeros).all(|b| b == b'0')
}

/// Hashes `key` followed by a decimal counter, reusing the key's hasher state.
pub struct SaltedHasher {
    prefix: Md5,
}

impl SaltedHasher {
    pub fn new(key: &str) -> Self {
        let mut prefix = Md5::new();
        prefix.update(key.as_bytes());
        Self { prefix }
    }

    /// Raw 16-byte digest of `key || counter`.
    pub fn digest(&self, counter: u64) -> [u8; 16] {
        let mut hasher = self.prefix.clone();
        hasher.update(counter.to_string().as_bytes());
        hasher.finalize().into()
    }

    pub fn hex(&self, counter: u64) -> String {
        to_hex(&self.digest(counter))
    }
}

/// Counts leading zero nibbles of a digest without formatting it.
pub fn leading_zero_nibbles(digest: &[u8]) -> usize {
    let mut count = 0;
    for byte in digest {
        if *byte == 0 {
            count += 2;
            continue;
        }
        if byte >> 4 == 0 {
            count += 1;
        }
        break;
    }
    count
}

pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
