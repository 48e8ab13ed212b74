//! Keypad status aggregation
//!
//! Folds the whole guess history into the best status ever observed for each
//! digit. The map is rebuilt from scratch on every call.

use super::digit::Digit;
use super::feedback::Status;
use super::record::AttemptRecord;
use rustc_hash::FxHashMap;

/// Best observed status per digit
///
/// Digits that were never guessed have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStatusMap(FxHashMap<Digit, Status>);

impl KeyStatusMap {
    /// Status for `digit`, `None` if it has not been guessed
    #[inline]
    #[must_use]
    pub fn get(&self, digit: Digit) -> Option<Status> {
        self.0.get(&digit).copied()
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

    /// Entries in keypad order
    pub fn iter(&self) -> impl Iterator<Item = (Digit, Status)> + '_ {
        Digit::ALL
            .into_iter()
            .filter_map(|d| self.get(d).map(|s| (d, s)))
    }

    fn observe(&mut self, digit: Digit, status: Status) {
        self.0
            .entry(digit)
            .and_modify(|best| *best = best.merge(status))
            .or_insert(status);
    }
}

/// Aggregate keypad statuses over every recorded attempt
///
/// Empty slots are skipped. Correct overrides everything, Present overrides
/// Absent, and Absent is only recorded for a digit with no entry yet.
///
/// # Examples
/// ```
/// use pico_fermi::core::{AttemptRecord, Digit, Guess, Secret, Status, aggregate_key_statuses};
///
/// let secret = Secret::parse("1234").unwrap();
/// let slots = vec![
///     Some(AttemptRecord::scored(Guess::parse("5671", 4).unwrap(), &secret)),
///     None,
/// ];
/// let keys = aggregate_key_statuses(&slots);
/// assert_eq!(keys.get(Digit::ALL[1]), Some(Status::Present));
/// assert_eq!(keys.get(Digit::ALL[5]), Some(Status::Absent));
/// assert_eq!(keys.get(Digit::ALL[0]), None);
/// ```
#[must_use]
pub fn aggregate_key_statuses(records: &[Option<AttemptRecord>]) -> KeyStatusMap {
    let mut keys = KeyStatusMap::default();
    for record in records.iter().flatten() {
        for (digit, status) in record.marks() {
            keys.observe(digit, status);
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Guess};

    fn record(guess: &str, codes: &str) -> Option<AttemptRecord> {
        let guess = Guess::parse(guess, codes.chars().count()).unwrap();
        Some(AttemptRecord::new(guess, Feedback::from_codes(codes).unwrap()))
    }

    fn digit(c: char) -> Digit {
        Digit::from_char(c).unwrap()
    }

    #[test]
    fn empty_history_has_no_entries() {
        assert!(aggregate_key_statuses(&[]).is_empty());
        assert!(aggregate_key_statuses(&[None, None, None]).is_empty());
    }

    #[test]
    fn statuses_upgrade_across_attempts() {
        // 7 goes Absent -> Present -> Correct
        let mut history = vec![record("7012", "----")];
        assert_eq!(aggregate_key_statuses(&history).get(digit('7')), Some(Status::Absent));

        history.push(record("3745", "-P--"));
        assert_eq!(aggregate_key_statuses(&history).get(digit('7')), Some(Status::Present));

        history.push(record("7689", "C---"));
        assert_eq!(aggregate_key_statuses(&history).get(digit('7')), Some(Status::Correct));
    }

    #[test]
    fn later_absent_never_downgrades() {
        let history = vec![
            record("1234", "CP--"),
            record("5612", "--P-"),
            record("2178", "----"),
        ];
        let keys = aggregate_key_statuses(&history);
        assert_eq!(keys.get(digit('1')), Some(Status::Correct));
        assert_eq!(keys.get(digit('2')), Some(Status::Present));
        assert_eq!(keys.get(digit('7')), Some(Status::Absent));
    }

    #[test]
    fn present_never_downgrades_correct() {
        let history = vec![record("1234", "C---"), record("5167", "-P--")];
        assert_eq!(aggregate_key_statuses(&history).get(digit('1')), Some(Status::Correct));
    }

    #[test]
    fn unseen_digits_have_no_entry() {
        let keys = aggregate_key_statuses(&[record("123", "---")]);
        assert_eq!(keys.len(), 3);
        for c in ['0', '4', '5', '6', '7', '8', '9'] {
            assert_eq!(keys.get(digit(c)), None);
        }
    }

    #[test]
    fn empty_slots_are_skipped() {
        let history = vec![record("123", "C--"), None, record("456", "-P-"), None];
        let keys = aggregate_key_statuses(&history);
        assert_eq!(keys.len(), 6);
        assert_eq!(keys.get(digit('5')), Some(Status::Present));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let history = vec![record("1234", "CP--"), record("5678", "-PP-"), None];
        let first = aggregate_key_statuses(&history);
        let second = aggregate_key_statuses(&history);
        assert_eq!(first, second);
    }

    #[test]
    fn iter_is_in_keypad_order() {
        let keys = aggregate_key_statuses(&[record("9510", "PC--")]);
        let order: Vec<char> = keys.iter().map(|(d, _)| d.to_char()).collect();
        assert_eq!(order, vec!['0', '1', '5', '9']);
    }
}
