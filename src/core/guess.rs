//! Guess validation
//!
//! A guess is accepted only if it has exactly K characters, every character is
//! a digit symbol, and no digit repeats. Checks run in that order and the first
//! failure is reported.

use super::digit::{ALPHABET_SIZE, Digit, digits_to_string};
use std::fmt;
use thiserror::Error;

/// Reasons a guess is rejected
///
/// These are recoverable: the player fixes the guess and submits again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Guess must be {expected} digits long.")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Guess must only contain digits.")]
    NonDigitCharacter(char),
    #[error("Digits in the guess must be unique.")]
    DuplicateDigit(Digit),
}

/// Outcome of `validate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub reason: Option<GuessError>,
}

impl ValidationResult {
    /// Human-readable reason, empty when the guess is valid
    #[must_use]
    pub fn message(&self) -> String {
        self.reason.map(|e| e.to_string()).unwrap_or_default()
    }
}

impl From<Result<Guess, GuessError>> for ValidationResult {
    fn from(result: Result<Guess, GuessError>) -> Self {
        match result {
            Ok(_) => Self {
                valid: true,
                reason: None,
            },
            Err(e) => Self {
                valid: false,
                reason: Some(e),
            },
        }
    }
}

/// A validated guess of K unique digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    digits: Vec<Digit>,
}

impl Guess {
    /// Validate `text` as a guess of `k` digits
    ///
    /// # Errors
    /// Returns the first failing check: `LengthMismatch`, then
    /// `NonDigitCharacter`, then `DuplicateDigit`.
    ///
    /// # Examples
    /// ```
    /// use pico_fermi::core::{Guess, GuessError};
    ///
    /// assert_eq!(Guess::parse("5071", 4).unwrap().to_string(), "5071");
    /// assert!(matches!(Guess::parse("507", 4), Err(GuessError::LengthMismatch { .. })));
    /// ```
    pub fn parse(text: &str, k: usize) -> Result<Self, GuessError> {
        parse_unique_digits(text, k).map(|digits| Self { digits })
    }

    /// Build a guess from digits already known to be unique
    pub(crate) fn from_unique_digits(digits: Vec<Digit>) -> Self {
        debug_assert!(
            parse_unique_digits(&digits_to_string(&digits), digits.len()).is_ok(),
            "digits must be unique"
        );
        Self { digits }
    }

    /// The digits in guess order
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&digits_to_string(&self.digits))
    }
}

/// Check `guess` against the length, charset and uniqueness rules
///
/// # Examples
/// ```
/// use pico_fermi::core::{GuessError, validate};
///
/// let result = validate("12a3", 4);
/// assert!(!result.valid);
/// assert_eq!(result.reason, Some(GuessError::NonDigitCharacter('a')));
/// assert_eq!(result.message(), "Guess must only contain digits.");
///
/// assert!(validate("0123", 4).valid);
/// ```
#[must_use]
pub fn validate(guess: &str, k: usize) -> ValidationResult {
    Guess::parse(guess, k).into()
}

/// Shared by guesses and secrets: exactly `k` unique digit symbols
pub(crate) fn parse_unique_digits(text: &str, k: usize) -> Result<Vec<Digit>, GuessError> {
    let actual = text.chars().count();
    if actual != k {
        return Err(GuessError::LengthMismatch {
            expected: k,
            actual,
        });
    }

    let digits = text
        .chars()
        .map(|c| Digit::from_char(c).ok_or(GuessError::NonDigitCharacter(c)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = [false; ALPHABET_SIZE];
    for &digit in &digits {
        let slot = &mut seen[usize::from(digit.value())];
        if *slot {
            return Err(GuessError::DuplicateDigit(digit));
        }
        *slot = true;
    }

    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(c: char) -> Digit {
        Digit::from_char(c).unwrap()
    }

    #[test]
    fn valid_guess_passes() {
        let result = validate("1234", 4);
        assert!(result.valid);
        assert_eq!(result.reason, None);
        assert_eq!(result.message(), "");
    }

    #[test]
    fn rejects_non_digits() {
        let result = validate("12a3", 4);
        assert!(!result.valid);
        assert_eq!(result.reason, Some(GuessError::NonDigitCharacter('a')));
    }

    #[test]
    fn rejects_duplicates() {
        let result = validate("1123", 4);
        assert!(!result.valid);
        assert_eq!(result.reason, Some(GuessError::DuplicateDigit(digit('1'))));
        assert_eq!(result.message(), "Digits in the guess must be unique.");
    }

    #[test]
    fn rejects_wrong_length() {
        let result = validate("123", 4);
        assert!(!result.valid);
        assert_eq!(
            result.reason,
            Some(GuessError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(result.message(), "Guess must be 4 digits long.");
        assert!(!validate("12345", 4).valid);
        assert!(!validate("", 4).valid);
    }

    #[test]
    fn length_is_checked_before_charset_and_uniqueness() {
        // Too short, non-digit and duplicated all at once
        assert!(matches!(
            validate("aa", 4).reason,
            Some(GuessError::LengthMismatch { .. })
        ));
        // Right length with both a letter and a repeat: charset wins
        assert_eq!(
            validate("11a2", 4).reason,
            Some(GuessError::NonDigitCharacter('a'))
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Four characters, one of them multi-byte
        assert_eq!(
            validate("12é4", 4).reason,
            Some(GuessError::NonDigitCharacter('é'))
        );
    }

    #[test]
    fn rejects_signs_and_whitespace() {
        assert_eq!(
            validate("-123", 4).reason,
            Some(GuessError::NonDigitCharacter('-'))
        );
        assert_eq!(
            validate("12 4", 4).reason,
            Some(GuessError::NonDigitCharacter(' '))
        );
    }

    #[test]
    fn guess_parse_keeps_order() {
        let guess = Guess::parse("90817", 5).unwrap();
        assert_eq!(guess.len(), 5);
        assert_eq!(guess.to_string(), "90817");
        assert_eq!(guess.digits()[0], digit('9'));
    }
}
