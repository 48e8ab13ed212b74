//! Digit symbols
//!
//! The game alphabet is the ten characters `'0'..='9'`.

use std::fmt;

/// Size of the digit alphabet
pub const ALPHABET_SIZE: usize = 10;

/// A single digit symbol (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Every digit in keypad order
    pub const ALL: [Self; ALPHABET_SIZE] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Create a digit from its numeric value
    ///
    /// Returns `None` if `value > 9`.
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value < 10 { Some(Self(value)) } else { None }
    }

    /// Parse a digit symbol
    ///
    /// Only the ASCII characters `'0'..='9'` are accepted.
    ///
    /// # Examples
    /// ```
    /// use pico_fermi::core::Digit;
    ///
    /// assert_eq!(Digit::from_char('7').map(Digit::value), Some(7));
    /// assert!(Digit::from_char('a').is_none());
    /// assert!(Digit::from_char('٣').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self(c as u8 - b'0')),
            _ => None,
        }
    }

    /// Numeric value (0-9)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The symbol for this digit
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Render a digit sequence as a string
pub(crate) fn digits_to_string(digits: &[Digit]) -> String {
    digits.iter().map(|d| d.to_char()).collect()
}
