//! Black-box tests for the short-code utilities exposed by the crate.
//!
//! The base-62 codec and the random generator are deliberately separate
//! tools: the codec is a deterministic bijection over positive ids, the
//! generator is uniform noise. These tests pin down both contracts through
//! the public API.

use std::collections::HashSet;

use linkcut::AppError;
use linkcut::utils::base62::{decode, encode};
use linkcut::utils::code_generator::generate_code;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[test]
fn encode_matches_known_vectors() {
    assert_eq!(encode(1).unwrap(), "a");
    assert_eq!(encode(12312).unwrap(), "clJ");
    assert_eq!(encode(13878455).unwrap(), "5nzc");
}

#[test]
fn decode_matches_known_vectors() {
    assert_eq!(decode("a").unwrap(), 1);
    assert_eq!(decode("clJ").unwrap(), 12312);
    assert_eq!(decode("5nzc").unwrap(), 13878455);
}

#[test]
fn encode_rejects_zero_and_negative_ids() {
    for id in [0, -1, i64::MIN] {
        assert!(
            matches!(encode(id), Err(AppError::Validation { .. })),
            "encode({id}) should fail"
        );
    }
}

#[test]
fn round_trip_holds_for_every_small_id() {
    for id in 1..=10_000 {
        let code = encode(id).unwrap();
        assert_eq!(decode(&code).unwrap(), id, "round trip broke at {id}");
    }
}

#[test]
fn round_trip_holds_across_power_boundaries() {
    // Powers of 62 and their neighbours, where digit borrows happen.
    let mut ids = vec![i64::MAX, i64::MAX - 1];
    let mut power: i64 = 1;
    for _ in 0..10 {
        power *= 62;
        ids.extend([power - 1, power, power + 1]);
    }

    for id in ids {
        let code = encode(id).unwrap();
        assert_eq!(decode(&code).unwrap(), id, "round trip broke at {id}");
    }
}

#[test]
fn distinct_ids_encode_to_distinct_codes() {
    let mut seen = HashSet::new();
    for id in 1..=10_000 {
        assert!(seen.insert(encode(id).unwrap()), "duplicate code for {id}");
    }
}

#[test]
fn encoded_output_stays_in_alphabet() {
    for id in [1, 61, 62, 4096, 1_000_000, i64::MAX] {
        let code = encode(id).unwrap();
        assert!(
            code.chars().all(|c| ALPHABET.contains(c)),
            "{code} leaks outside the alphabet"
        );
    }
}

#[test]
fn decode_rejects_bad_input() {
    for input in ["", "abc$", "a b", "naïve", "=="] {
        assert!(
            matches!(decode(input), Err(AppError::Validation { .. })),
            "decode({input:?}) should fail"
        );
    }
}

#[test]
fn generated_codes_have_exact_length_and_alphabet() {
    for length in [0, 1, 5, 16] {
        let code = generate_code(length);
        assert_eq!(code.len(), length);
        assert!(code.chars().all(|c| ALPHABET.contains(c)));
    }
}

#[test]
fn generated_codes_are_effectively_unique() {
    let codes: HashSet<String> = (0..1_000).map(|_| generate_code(12)).collect();
    assert_eq!(codes.len(), 1_000);
}

#[test]
fn generated_codes_are_not_decodable_guarantees() {
    // A generated code is still alphabet-only, so the codec can decode it —
    // but the decoded number has no relationship to any stored id. The two
    // schemes only share an alphabet.
    let code = generate_code(5);
    let id = decode(&code).unwrap();
    assert!(id >= 1);
}
