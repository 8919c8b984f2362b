// src/crypto.rs
use std::collections::HashSet;

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_core::{CryptoRng, RngCore};

/// Marker for random sources allowed to produce credentials
pub trait SecureRandom: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng + ?Sized> SecureRandom for T {}

// Operating system CSPRNG. Zero-sized, so taking one per call is free.
pub fn secure_rng() -> OsRng {
    OsRng
}

/// Draw one element uniformly from `alphabet`.
///
/// `gen_range` samples through `Uniform`, which rejects values outside the
/// largest multiple of the range, so there is no modulo bias for any length.
pub fn pick<R: SecureRandom + ?Sized>(rng: &mut R, alphabet: &[char]) -> Option<char> {
    if alphabet.is_empty() {
        return None;
    }
    Some(alphabet[rng.gen_range(0..alphabet.len())])
}

/// Uniform random permutation (Fisher-Yates over bias-free index draws)
pub fn shuffle<R: SecureRandom + ?Sized>(rng: &mut R, chars: &mut [char]) {
    chars.shuffle(rng);
}

// Bits of entropy for a password drawn uniformly from a pool
pub fn estimate_entropy_bits(length: usize, pool_size: usize) -> f64 {
    if length == 0 || pool_size < 2 {
        return 0.0;
    }
    let bits = length as f64 * (pool_size as f64).log2();
    (bits * 10.0).round() / 10.0
}

// Analyze password strength, 0-100
pub fn analyze_password_strength(password: &str) -> u8 {
    let length = password.chars().count();

    // Length contribution (up to 40 points)
    let mut score = length.min(40) as u8;

    // Character variety (10 points each)
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 10;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        score += 10;
    }

    // Repeated characters
    if password.chars().collect::<HashSet<_>>().len() < length / 2 {
        score = score.saturating_sub(10);
    }

    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn pick_from_empty_alphabet_is_none() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(pick(&mut rng, &[]), None);
    }

    #[test]
    fn pick_covers_whole_alphabet() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let alphabet: Vec<char> = "0123456789".chars().collect();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            seen.insert(pick(&mut rng, &alphabet).unwrap());
        }
        assert_eq!(seen.len(), alphabet.len());
    }

    #[test]
    fn shuffle_keeps_the_multiset() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut chars: Vec<char> = "aabbccddeeff".chars().collect();
        let mut before = chars.clone();
        shuffle(&mut rng, &mut chars);
        before.sort_unstable();
        chars.sort_unstable();
        assert_eq!(before, chars);
    }

    #[test]
    fn shuffle_of_three_hits_every_ordering() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let mut counts = std::collections::HashMap::new();
        for _ in 0..6000 {
            let mut chars = ['a', 'b', 'c'];
            shuffle(&mut rng, &mut chars);
            *counts.entry(chars).or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            // expected 1000 each
            assert!((800..=1200).contains(count), "ordering count {}", count);
        }
    }

    #[test]
    fn os_rng_works_through_the_trait() {
        let mut rng = secure_rng();
        let alphabet = ['x', 'y'];
        assert!(pick(&mut rng, &alphabet).is_some());
    }

    #[test]
    fn entropy_estimate() {
        assert_eq!(estimate_entropy_bits(12, 26), 56.4);
        assert_eq!(estimate_entropy_bits(10, 2), 10.0);
        assert_eq!(estimate_entropy_bits(0, 62), 0.0);
        assert_eq!(estimate_entropy_bits(8, 1), 0.0);
    }

    #[test]
    fn strength_scores() {
        assert_eq!(analyze_password_strength("aaaaaa"), 6);
        assert_eq!(analyze_password_strength("aB3$xY9!qW"), 50);
        assert!(analyze_password_strength("aB3$xY9!qWe5Rt7^uI0*pO2&") > analyze_password_strength("aB3$xY"));
    }
}
