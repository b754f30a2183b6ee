//! Utilities for generating passwords.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

pub use crate::strength::MIN_LENGTH;

pub const DEFAULT_LENGTH: usize = 12;
/// Longest password the CLI will offer to generate.
pub const MAX_LENGTH: usize = 32;

static LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
static NUMBERS: &str = "0123456789";

/// Letters, digits, and the symbols the strength checker looks for.
pub fn default_alphabet() -> Vec<char> {
    let mut abc = Vec::new();
    abc.extend(LETTERS.chars());
    abc.extend(NUMBERS.chars());
    abc.extend(crate::strength::SYMBOLS.chars());
    abc
}

/// Generate a password by sampling the given alphabet uniformly, with replacement.
///
/// `rand`'s uniform sampler re-samples rather than reducing modulo the alphabet size, so there is
/// no bias toward the start of the alphabet. An empty alphabet gives an empty password.
pub fn generate_random_password<R>(rng: &mut R, alphabet: &[char], len: usize) -> crate::Secret
where
    R: Rng + CryptoRng,
{
    let mut secret = String::with_capacity(len);
    for _ in 0..len {
        match alphabet.choose(rng) {
            Some(ch) => secret.push(*ch),
            None => break,
        }
    }
    crate::Secret::from(secret)
}

/// Generate a password from [`default_alphabet`]. Lengths under [`MIN_LENGTH`] are raised to it.
///
/// Nothing guarantees every character class shows up, so short results can still score below 4.
pub fn generate_strong_password<R>(rng: &mut R, len: usize) -> crate::Secret
where
    R: Rng + CryptoRng,
{
    generate_random_password(rng, &default_alphabet(), len.max(MIN_LENGTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn short_lengths_are_clamped() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for len in 0..MIN_LENGTH {
            let password = generate_strong_password(&mut rng, len);
            assert_eq!(password.as_str().chars().count(), MIN_LENGTH);
        }
    }

    #[test]
    fn requested_length_is_honoured() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        for len in [MIN_LENGTH, DEFAULT_LENGTH, MAX_LENGTH, 100] {
            let password = generate_strong_password(&mut rng, len);
            assert_eq!(password.as_str().chars().count(), len);
        }
    }

    #[test]
    fn characters_come_from_the_alphabet() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let alphabet = default_alphabet();
        for _ in 0..200 {
            let password = generate_strong_password(&mut rng, MAX_LENGTH);
            assert!(password.as_str().chars().all(|c| alphabet.contains(&c)));
        }
    }

    #[test]
    fn every_character_eventually_appears() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let alphabet = default_alphabet();
        let password = generate_random_password(&mut rng, &alphabet, 10_000);
        for ch in alphabet {
            assert!(password.as_str().contains(ch), "{ch} never sampled");
        }
    }

    #[test]
    fn custom_alphabet() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let password = generate_random_password(&mut rng, &['x'], 5);
        assert_eq!(password.as_str(), "xxxxx");
        let password = generate_random_password(&mut rng, &[], 5);
        assert_eq!(password.as_str(), "");
    }

    #[test]
    fn alphabet_has_no_duplicates() {
        let mut alphabet = default_alphabet();
        let len = alphabet.len();
        alphabet.sort_unstable();
        alphabet.dedup();
        assert_eq!(alphabet.len(), len);
        assert_eq!(len, 26 * 2 + 10 + 8);
    }
}
