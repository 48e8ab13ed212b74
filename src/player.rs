//! Baseline self-play
//!
//! Guesses a random code that is still consistent with every feedback row
//! seen so far. Used by the benchmark command to exercise full games.

use crate::core::{ALPHABET_SIZE, AttemptRecord, Digit, Feedback, Guess};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Every ordered code of `k` distinct digits
///
/// There are `10! / (10 - k)!` of them (5,040 for k = 4).
#[must_use]
pub fn all_codes(k: usize) -> Vec<Vec<Digit>> {
    fn extend(
        prefix: &mut Vec<Digit>,
        used: &mut [bool; ALPHABET_SIZE],
        k: usize,
        out: &mut Vec<Vec<Digit>>,
    ) {
        if prefix.len() == k {
            out.push(prefix.clone());
            return;
        }
        for digit in Digit::ALL {
            let idx = usize::from(digit.value());
            if used[idx] {
                continue;
            }
            used[idx] = true;
            prefix.push(digit);
            extend(prefix, used, k, out);
            prefix.pop();
            used[idx] = false;
        }
    }

    let mut out = Vec::new();
    if k <= ALPHABET_SIZE {
        extend(&mut Vec::with_capacity(k), &mut [false; ALPHABET_SIZE], k, &mut out);
    }
    out
}

/// Picks uniformly among codes consistent with the history
pub struct ConsistentPlayer<'a> {
    candidates: Vec<&'a [Digit]>,
}

impl<'a> ConsistentPlayer<'a> {
    /// Start with every code in `codes` as a candidate
    #[must_use]
    pub fn new(codes: &'a [Vec<Digit>]) -> Self {
        Self {
            candidates: codes.iter().map(Vec::as_slice).collect(),
        }
    }

    /// Candidates still consistent with the observed feedback
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Random consistent guess, `None` once nothing is consistent
    pub fn next_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Guess> {
        self.candidates
            .choose(rng)
            .map(|code| Guess::from_unique_digits(code.to_vec()))
    }

    /// Drop every candidate that would not have produced this feedback
    pub fn observe(&mut self, record: &AttemptRecord) {
        let guess = record.guess().digits();
        let feedback = record.feedback();
        self.candidates
            .retain(|code| Feedback::calculate(guess, code) == *feedback);
    }
}
