//! Random short-code generation.
//!
//! Codes are uniform random draws from the 62-character alphanumeric
//! alphabet. Generation alone does not guarantee uniqueness — the caller
//! arranges that (see `LinkService::generate_unique_code` and the UNIQUE
//! constraint on `links.code`).

use rand::Rng;

/// Code alphabet: lowercase, uppercase, digits.
const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random code of `length` alphanumeric characters.
///
/// Each character is an independent uniform sample, so the call is safe
/// from any number of threads (the RNG is thread-local). `length == 0`
/// yields an empty string.
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
