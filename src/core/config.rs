//! Game configuration constants and validated settings

use thiserror::Error;

/// Smallest supported secret length
pub const MIN_DIGITS: usize = 3;

/// Largest supported secret length
pub const MAX_DIGITS: usize = 8;

/// Secret length used when none is chosen
pub const DEFAULT_DIGITS: usize = 4;

/// Number of guesses a player gets per game
pub const MAX_ATTEMPTS: usize = 6;

/// Configuration errors, raised before a game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(
        "Number of digits must be between {min} and {max}, got {0}.",
        min = MIN_DIGITS,
        max = MAX_DIGITS
    )]
    DigitCountOutOfRange(usize),
    #[error("A game needs at least one attempt.")]
    NoAttempts,
    #[error("You cannot change digit length during an active game.")]
    GameInProgress,
}

/// Check that `digits` is a supported secret length
///
/// # Errors
/// Returns `ConfigError::DigitCountOutOfRange` outside `MIN_DIGITS..=MAX_DIGITS`.
pub const fn check_digit_count(digits: usize) -> Result<usize, ConfigError> {
    if digits < MIN_DIGITS || digits > MAX_DIGITS {
        return Err(ConfigError::DigitCountOutOfRange(digits));
    }
    Ok(digits)
}

/// Validated per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    digits: usize,
    max_attempts: usize,
}

impl GameConfig {
    /// Settings for a `digits`-long secret with the default attempt budget
    ///
    /// # Errors
    /// Returns `ConfigError::DigitCountOutOfRange` for unsupported lengths.
    pub const fn new(digits: usize) -> Result<Self, ConfigError> {
        match check_digit_count(digits) {
            Ok(digits) => Ok(Self {
                digits,
                max_attempts: MAX_ATTEMPTS,
            }),
            Err(e) => Err(e),
        }
    }

    /// Override the attempt budget
    ///
    /// # Errors
    /// Returns `ConfigError::NoAttempts` if `max_attempts` is zero.
    pub const fn with_max_attempts(self, max_attempts: usize) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(Self {
            max_attempts,
            ..self
        })
    }

    #[inline]
    #[must_use]
    pub const fn digits(&self) -> usize {
        self.digits
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}
