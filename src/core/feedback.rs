//! Feedback scoring
//!
//! Each guess position gets one status:
//! - Correct: same digit at the same position
//! - Present: digit appears at another, not yet matched, secret position
//! - Absent: digit is not (or no longer) available in the secret

use super::digit::Digit;
use super::guess::Guess;
use super::secret::Secret;
use std::fmt;

/// Per-position feedback value
///
/// Ordered `Absent < Present < Correct`, which is also the precedence used
/// when merging statuses for the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Absent,
    Present,
    Correct,
}

impl Status {
    /// Combine a newly observed status with the best one seen so far
    ///
    /// Correct always wins, Present replaces Absent, and Absent never
    /// downgrades anything.
    #[inline]
    #[must_use]
    pub fn merge(self, observed: Self) -> Self {
        self.max(observed)
    }

    /// Single-letter code: `C`, `P` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'C',
            Self::Present => 'P',
            Self::Absent => '-',
        }
    }

    /// Emoji square used in shareable rows
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Ordered feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Status>);

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: equal digits at the same index are Correct and their
    ///    secret slot is consumed
    /// 2. Second pass: every other guess digit takes the first unconsumed
    ///    secret slot holding the same digit, becoming Present; with no such
    ///    slot it stays Absent
    ///
    /// A secret slot is consumed at most once, so no secret digit is counted
    /// twice.
    ///
    /// Both slices must have the same length.
    #[must_use]
    pub fn calculate(guess: &[Digit], secret: &[Digit]) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");

        let mut result = vec![Status::Absent; guess.len()];
        let mut available: Vec<Option<Digit>> = secret.iter().copied().map(Some).collect();

        for (i, (g, s)) in guess.iter().zip(secret).enumerate() {
            if g == s {
                result[i] = Status::Correct;
                available[i] = None;
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if result[i] == Status::Correct {
                continue;
            }
            if let Some(slot) = available.iter_mut().find(|slot| **slot == Some(g)) {
                *slot = None;
                result[i] = Status::Present;
            }
        }

        Self(result)
    }

    /// Parse feedback codes such as `"CP-C"` or `"🟩🟨⬜🟩"`
    ///
    /// Accepts `C`/`c`/🟩 for Correct, `P`/`p`/🟨 for Present and
    /// `-`/`_`/⬜ for Absent.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn from_codes(s: &str) -> Option<Self> {
        s.chars()
            .map(|c| match c {
                'C' | 'c' | '🟩' => Some(Status::Correct),
                'P' | 'p' | '🟨' => Some(Status::Present),
                '-' | '_' | '⬜' => Some(Status::Absent),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .filter(|statuses| !statuses.is_empty())
            .map(Self)
    }

    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[Status] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == Status::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Status::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Status::Present)
    }

    fn count(&self, status: Status) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Emoji row like "🟩🟨⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|s| write!(f, "{}", s.code()))
    }
}

/// Score a validated guess against the secret
///
/// # Examples
/// ```
/// use pico_fermi::core::{Guess, Secret, score};
///
/// let secret = Secret::parse("1324").unwrap();
/// let guess = Guess::parse("1234", 4).unwrap();
/// assert_eq!(score(&guess, &secret).to_string(), "CPPC");
/// ```
#[must_use]
pub fn score(guess: &Guess, secret: &Secret) -> Feedback {
    Feedback::calculate(guess.digits(), secret.digits())
}
