//! Core game logic
//!
//! Pure functions over explicit inputs: secret generation, guess validation,
//! feedback scoring and keypad status aggregation. Only the generator touches
//! a random source.

pub mod config;
mod digit;
mod feedback;
mod guess;
mod keys;
mod record;
mod secret;

pub use config::{
    ConfigError, DEFAULT_DIGITS, GameConfig, MAX_ATTEMPTS, MAX_DIGITS, MIN_DIGITS,
};
pub use digit::{ALPHABET_SIZE, Digit};
pub use feedback::{Feedback, Status, score};
pub use guess::{Guess, GuessError, ValidationResult, validate};
pub use keys::{KeyStatusMap, aggregate_key_statuses};
pub use record::AttemptRecord;
pub use secret::{ParseSecretError, Secret, generate_secret, generate_secret_with};
