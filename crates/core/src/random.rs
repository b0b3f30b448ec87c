//! Random number and string hashing helpers.

use chrono::Utc;
use rand::Rng;

/// A large pseudo-random number, never below the current epoch millisecond.
pub fn random_number() -> u64 {
    let now = Utc::now().timestamp_millis().max(0) as u64;
    let scale: f64 = rand::rng().random();
    (scale * now as f64).floor() as u64 + now
}

/// Fast, non-cryptographic 32-bit string hash (`hash * 31 + code unit`).
///
/// Works on UTF-16 code units with wrapping arithmetic, so values match the
/// classic JavaScript and Java string hashes.
///
/// # Examples
///
/// ```
/// use nice_utils_core::random::quick_hash;
///
/// assert_eq!(quick_hash("abc"), 96354);
/// assert_eq!(quick_hash(""), 0);
/// ```
pub fn quick_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_number_is_large() {
        let before = Utc::now().timestamp_millis() as u64;
        let value = random_number();
        assert!(value > 10);
        assert!(value >= before);
    }

    #[test]
    fn random_numbers_vary() {
        let values: Vec<u64> = (0..8).map(|_| random_number()).collect();
        assert!(values.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn quick_hash_is_deterministic() {
        assert_eq!(quick_hash("abc"), quick_hash("abc"));
        assert_ne!(quick_hash("abc"), quick_hash("abd"));
    }

    #[test]
    fn quick_hash_wraps() {
        let long = "z".repeat(64);
        assert_eq!(quick_hash(&long), quick_hash(&long));
        assert_eq!(quick_hash("polygenelubricants"), i32::MIN);
    }
}
