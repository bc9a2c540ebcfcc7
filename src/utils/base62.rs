//! Reversible base-62 codec over positive link ids.
//!
//! Digits are 1-indexed into the alphabet (digit value = alphabet position
//! + 1), which makes the representation a bijective numeration: every
//! positive integer has exactly one encoding and `decode(encode(n)) == n`
//! for all `n >= 1`.
//!
//! This codec is a deterministic addressing scheme, independent of the
//! random generator in [`crate::utils::code_generator`]. The two are not
//! interchangeable: this one is a bijection, the generator is uniform noise.

use crate::error::AppError;
use serde_json::json;

/// Digit alphabet, least value first.
const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const BASE: i64 = 62;

/// Encodes a positive id as a compact base-62 string.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when `id < 1`.
///
/// # Examples
///
/// ```
/// use linkcut::utils::base62::encode;
///
/// assert_eq!(encode(1).unwrap(), "a");
/// assert_eq!(encode(12312).unwrap(), "clJ");
/// ```
pub fn encode(id: i64) -> Result<String, AppError> {
    if id < 1 {
        return Err(AppError::bad_request(
            "Id must be greater than 0",
            json!({ "id": id }),
        ));
    }

    let mut n = id;
    let mut digits = Vec::new();

    while n > 0 {
        let mut rem = n % BASE;
        n /= BASE;

        // Digit values run 1..=62, so a zero remainder is the highest digit
        // with a borrow from the quotient.
        if rem == 0 {
            rem = BASE;
            n -= 1;
        }

        digits.push(ALPHABET[(rem - 1) as usize]);
    }

    Ok(digits.iter().rev().map(|&b| b as char).collect())
}

/// Decodes a base-62 string back into the id it encodes.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the input is empty, contains a
/// character outside the alphabet, or overflows `i64`.
pub fn decode(code: &str) -> Result<i64, AppError> {
    if code.is_empty() {
        return Err(AppError::bad_request(
            "Code must not be empty",
            json!({ "code": code }),
        ));
    }

    let mut result: i64 = 0;

    for ch in code.chars() {
        let index = ALPHABET
            .iter()
            .position(|&b| b as char == ch)
            .ok_or_else(|| {
                AppError::bad_request(
                    "Code contains a character outside the base-62 alphabet",
                    json!({ "code": code, "character": ch.to_string() }),
                )
            })?;

        result = result
            .checked_mul(BASE)
            .and_then(|r| r.checked_add(index as i64 + 1))
            .ok_or_else(|| {
                AppError::bad_request("Code is too long to decode", json!({ "code": code }))
            })?;
    }

    Ok(result)
}
