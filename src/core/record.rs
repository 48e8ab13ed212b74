//! A scored guess

use super::digit::Digit;
use super::feedback::{Feedback, Status, score};
use super::guess::Guess;
use super::secret::Secret;

/// One accepted guess paired with the feedback it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    guess: Guess,
    feedback: Feedback,
}

impl AttemptRecord {
    /// Pair a guess with already computed feedback
    ///
    /// # Panics
    /// Panics in debug mode if the lengths differ
    #[cfg(test)]
    #[must_use]
    pub(crate) fn new(guess: Guess, feedback: Feedback) -> Self {
        debug_assert_eq!(
            guess.len(),
            feedback.len(),
            "feedback must cover every guess position"
        );
        Self { guess, feedback }
    }

    /// Score `guess` against `secret` and keep both
    #[must_use]
    pub fn scored(guess: Guess, secret: &Secret) -> Self {
        let feedback = score(&guess, secret);
        Self { guess, feedback }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Guess {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// `(digit, status)` for each position
    pub fn marks(&self) -> impl Iterator<Item = (Digit, Status)> + '_ {
        self.guess
            .digits()
            .iter()
            .copied()
            .zip(self.feedback.statuses().iter().copied())
    }
}
