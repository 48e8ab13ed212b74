//! Score command
//!
//! Scores a single guess against a given secret.

use crate::core::{Feedback, Guess, GuessError, ParseSecretError, Secret, score};
use thiserror::Error;

/// Why a guess/secret pair could not be scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreCommandError {
    #[error("Invalid secret: {0}")]
    Secret(#[from] ParseSecretError),
    #[error("Invalid guess: {0}")]
    Guess(#[from] GuessError),
}

/// A scored pair
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Guess,
    pub secret: Secret,
    pub feedback: Feedback,
}

/// Validate both inputs and score the guess
///
/// The guess must have as many digits as the secret.
///
/// # Errors
/// Returns `ScoreCommandError` if either input is invalid.
pub fn score_pair(guess: &str, secret: &str) -> Result<ScoreResult, ScoreCommandError> {
    let secret = Secret::parse(secret)?;
    let guess = Guess::parse(guess, secret.len())?;
    let feedback = score(&guess, &secret);
    Ok(ScoreResult {
        guess,
        secret,
        feedback,
    })
}
