//! Secret generation
//!
//! A secret is drawn without replacement from the ten digit symbols, so every
//! K-permutation of the alphabet is equally likely.

use super::config::{ConfigError, check_digit_count};
use super::digit::{ALPHABET_SIZE, Digit, digits_to_string};
use super::guess::{GuessError, parse_unique_digits};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The hidden target of a game: K pairwise-distinct digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Secret {
    digits: Vec<Digit>,
}

/// Error type for secrets given as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseSecretError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Secret must only contain digits, found {0:?}.")]
    NonDigitCharacter(char),
    #[error("Digits in the secret must be unique, {0} repeats.")]
    DuplicateDigit(Digit),
}

impl From<GuessError> for ParseSecretError {
    fn from(err: GuessError) -> Self {
        match err {
            GuessError::LengthMismatch { actual, .. } => {
                Self::Config(ConfigError::DigitCountOutOfRange(actual))
            }
            GuessError::NonDigitCharacter(c) => Self::NonDigitCharacter(c),
            GuessError::DuplicateDigit(d) => Self::DuplicateDigit(d),
        }
    }
}

impl Secret {
    /// Parse a secret from text such as `"1234"`
    ///
    /// The length must be a supported digit count and the digits must be unique.
    ///
    /// # Errors
    /// Returns `ParseSecretError::Config` for unsupported lengths, otherwise
    /// the first non-digit or repeated character.
    pub fn parse(text: &str) -> Result<Self, ParseSecretError> {
        let k = check_digit_count(text.chars().count())?;
        let digits = parse_unique_digits(text, k)?;
        Ok(Self { digits })
    }

    /// The digits in secret order
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Number of digits (K)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false for a constructed secret
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&digits_to_string(&self.digits))
    }
}

impl FromStr for Secret {
    type Err = ParseSecretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Generate a random secret of `k` unique digits using the thread RNG
///
/// # Errors
/// Returns `ConfigError::DigitCountOutOfRange` if `k` is outside
/// `MIN_DIGITS..=MAX_DIGITS`.
///
/// # Examples
/// ```
/// use pico_fermi::core::generate_secret;
///
/// let secret = generate_secret(4).unwrap();
/// assert_eq!(secret.len(), 4);
/// assert!(generate_secret(9).is_err());
/// ```
pub fn generate_secret(k: usize) -> Result<Secret, ConfigError> {
    generate_secret_with(k, &mut rand::rng())
}

/// Generate a random secret of `k` unique digits from `rng`
///
/// Runs a partial Fisher-Yates shuffle over the alphabet: position `i` swaps
/// with a uniformly chosen slot in `i..10`, and the first `k` slots are the
/// draw order.
///
/// # Errors
/// Returns `ConfigError::DigitCountOutOfRange` if `k` is outside
/// `MIN_DIGITS..=MAX_DIGITS`.
pub fn generate_secret_with<R: Rng + ?Sized>(
    k: usize,
    rng: &mut R,
) -> Result<Secret, ConfigError> {
    let k = check_digit_count(k)?;

    let mut pool = Digit::ALL;
    for i in 0..k {
        let j = rng.random_range(i..ALPHABET_SIZE);
        pool.swap(i, j);
    }

    Ok(Secret {
        digits: pool[..k].to_vec(),
    })
}
