//! Fixed-size attempt board

use crate::core::{AttemptRecord, KeyStatusMap, aggregate_key_statuses};

/// `max_attempts` slots filled strictly in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    slots: Vec<Option<AttemptRecord>>,
    filled: usize,
}

impl Board {
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            slots: vec![None; max_attempts],
            filled: 0,
        }
    }

    /// Store `record` in the next free slot
    ///
    /// Returns the slot index, or `None` if the board is full.
    pub fn push(&mut self, record: AttemptRecord) -> Option<usize> {
        let index = self.filled;
        let slot = self.slots.get_mut(index)?;
        *slot = Some(record);
        self.filled += 1;
        Some(index)
    }

    /// All slots, empty ones included
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<AttemptRecord>] {
        &self.slots
    }

    /// Filled slots in attempt order
    pub fn records(&self) -> impl Iterator<Item = &AttemptRecord> {
        self.slots.iter().flatten()
    }

    #[must_use]
    pub fn last(&self) -> Option<&AttemptRecord> {
        self.filled
            .checked_sub(1)
            .and_then(|i| self.slots[i].as_ref())
    }

    #[inline]
    #[must_use]
    pub const fn filled(&self) -> usize {
        self.filled
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled == self.slots.len()
    }

    /// Keypad statuses recomputed from every filled slot
    #[must_use]
    pub fn key_statuses(&self) -> KeyStatusMap {
        aggregate_key_statuses(&self.slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Guess, Secret};

    fn record(guess: &str, secret: &Secret) -> AttemptRecord {
        AttemptRecord::scored(Guess::parse(guess, secret.len()).unwrap(), secret)
    }

    #[test]
    fn slots_fill_in_order_without_gaps() {
        let secret = Secret::parse("123").unwrap();
        let mut board = Board::new(3);
        assert_eq!(board.push(record("456", &secret)), Some(0));
        assert_eq!(board.push(record("312", &secret)), Some(1));

        assert_eq!(board.filled(), 2);
        assert!(board.slots()[0].is_some());
        assert!(board.slots()[1].is_some());
        assert!(board.slots()[2].is_none());
        assert_eq!(board.last().unwrap().guess().to_string(), "312");
    }

    #[test]
    fn full_board_rejects_push() {
        let secret = Secret::parse("123").unwrap();
        let mut board = Board::new(1);
        assert_eq!(board.push(record("456", &secret)), Some(0));
        assert!(board.is_full());
        assert_eq!(board.push(record("789", &secret)), None);
        assert_eq!(board.records().count(), 1);
    }

    #[test]
    fn records_skip_empty_slots_in_attempt_order() {
        let secret = Secret::parse("123").unwrap();
        let mut board = Board::new(4);
        board.push(record("456", &secret));
        board.push(record("312", &secret));

        let guesses: Vec<String> = board.records().map(|r| r.guess().to_string()).collect();
        assert_eq!(guesses, vec!["456", "312"]);
        assert_eq!(board.records().count() + 2, board.capacity());
    }

    #[test]
    fn empty_board() {
        let board = Board::new(6);
        assert_eq!(board.capacity(), 6);
        assert!(board.last().is_none());
        assert!(board.key_statuses().is_empty());
    }
}
