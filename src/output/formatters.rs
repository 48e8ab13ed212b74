//! Formatting utilities for terminal output

use crate::core::{AttemptRecord, Digit, KeyStatusMap, Status};

/// Guess digits spaced out next to their emoji feedback, e.g. "1 2 3 4  🟩🟨⬜🟩"
#[must_use]
pub fn record_row(record: &AttemptRecord) -> String {
    format!(
        "{}  {}",
        spaced_digits(record.guess().digits()),
        record.feedback().to_emoji()
    )
}

/// Digits separated by single spaces
#[must_use]
pub fn spaced_digits(digits: &[Digit]) -> String {
    let mut out = String::with_capacity(digits.len() * 2);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(digit.to_char());
    }
    out
}

/// Placeholder row for an unused attempt slot
#[must_use]
pub fn empty_row(digits: usize) -> String {
    vec!["·"; digits].join(" ")
}

/// Keypad marker for a digit's best status
#[must_use]
pub const fn key_marker(status: Option<Status>) -> char {
    match status {
        Some(status) => status.code(),
        None => ' ',
    }
}

/// Plain keypad line: each digit followed by its status code
#[must_use]
pub fn keypad_line(keys: &KeyStatusMap) -> String {
    Digit::ALL
        .iter()
        .map(|&d| format!("{d}{}", key_marker(keys.get(d))))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Guess, Secret, aggregate_key_statuses};

    #[test]
    fn record_row_shows_digits_and_feedback() {
        let secret = Secret::parse("1324").unwrap();
        let record = AttemptRecord::scored(Guess::parse("1234", 4).unwrap(), &secret);
        assert_eq!(record_row(&record), "1 2 3 4  🟩🟨🟨🟩");
    }

    #[test]
    fn empty_row_width() {
        assert_eq!(empty_row(3), "· · ·");
    }

    #[test]
    fn keypad_line_marks_seen_digits() {
        let secret = Secret::parse("123").unwrap();
        let slots = vec![Some(AttemptRecord::scored(
            Guess::parse("135", 3).unwrap(),
            &secret,
        ))];
        let line = keypad_line(&aggregate_key_statuses(&slots));
        assert_eq!(line, "0  1C 2  3P 4  5- 6  7  8  9 ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
