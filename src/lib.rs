//! Pico Fermi Bagel
//!
//! A digit-guessing puzzle in the style of Mastermind and Wordle: find the
//! hidden number of K distinct digits within a fixed number of attempts.
//!
//! # Quick Start
//!
//! ```rust
//! use pico_fermi::core::{Guess, Secret, Status, score, validate};
//!
//! let secret = Secret::parse("1324").unwrap();
//! assert!(validate("1234", 4).valid);
//!
//! let guess = Guess::parse("1234", 4).unwrap();
//! let feedback = score(&guess, &secret);
//! assert_eq!(feedback.statuses()[1], Status::Present);
//! println!("{}", feedback.to_emoji());
//! ```

// Core game logic
pub mod core;

// Turn-by-turn game state
pub mod game;

// Baseline self-play
pub mod player;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
