//! Record id generation.
//!
//! Ids are `{prefix-}millis-suffix` where the suffix is 9 random lowercase
//! base-36 characters. Uniqueness is best-effort, not cryptographic.

use chrono::Utc;
use rand::Rng;

const SUFFIX_LEN: usize = 9;
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn generate(prefix: Option<&str>) -> String {
    let millis = Utc::now().timestamp_millis();
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();

    match prefix {
        Some(prefix) => format!("{prefix}-{millis}-{suffix}"),
        None => format!("{millis}-{suffix}"),
    }
}
