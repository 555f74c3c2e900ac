//! Milestone id generation.
//!
//! Ids hash the draft content with a probing nonce and base36-encode the
//! digest. No clock or RNG is involved; the same inputs always produce
//! the same id.

use sha2::{Digest, Sha256};

const ID_PREFIX: &str = "ms";
const BASE_LENGTH: usize = 6;
const MAX_LENGTH: usize = 12;

/// Generate a unique milestone id.
///
/// `seq` is the current list length, folded into the seed so identical
/// drafts entered twice still diverge. The `exists` closure reports
/// collisions against the live list; on repeated collisions the hash is
/// widened.
pub fn generate_id<F>(title: &str, timeline: &str, seq: usize, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut length = BASE_LENGTH;
    let mut nonce = 0u32;
    loop {
        let seed = format!("{title}|{timeline}|{seq}|{nonce}");
        let id = format!("{ID_PREFIX}-{}", hash_base36(&seed, length));
        if !exists(&id) {
            return id;
        }
        nonce += 1;
        if nonce % 16 == 0 && length < MAX_LENGTH {
            length += 1;
        }
    }
}

fn hash_base36(input: &str, length: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();

    let num = digest
        .iter()
        .take(8)
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));

    let mut encoded = base36_encode(num);
    while encoded.len() < length {
        encoded.insert(0, '0');
    }
    encoded.truncate(length);
    encoded
}

fn base36_encode(mut num: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    // u64::MAX is 13 base36 digits.
    let mut buf = [0u8; 13];
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = DIGITS[(num % 36) as usize];
        num /= 36;
        if num == 0 {
            break;
        }
    }
    String::from_utf8_lossy(&buf[i..]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_format() {
        let id = generate_id("Promotion", "Career", 0, |_| false);
        assert!(id.starts_with("ms-"));
        assert_eq!(id.len(), "ms-".len() + BASE_LENGTH);
    }

    #[test]
    fn test_deterministic_without_collisions() {
        let a = generate_id("Promotion", "Career", 0, |_| false);
        let b = generate_id("Promotion", "Career", 0, |_| false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_seq_diverges_identical_drafts() {
        let a = generate_id("Promotion", "Career", 0, |_| false);
        let b = generate_id("Promotion", "Career", 1, |_| false);
        assert_ne!(a, b);
    }

    #[test]
    fn test_collision_probing() {
        let mut taken = std::collections::HashSet::new();
        let first = generate_id("Same", "Same", 0, |id| taken.contains(id));
        taken.insert(first.clone());
        let second = generate_id("Same", "Same", 0, |id| taken.contains(id));
        assert_ne!(first, second);
    }

    #[test]
    fn test_base36_zero() {
        assert_eq!(base36_encode(0), "0");
        assert_eq!(base36_encode(35), "z");
        assert_eq!(base36_encode(36), "10");
    }
}
