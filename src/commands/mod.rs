//! Command implementations

pub mod benchmark;
pub mod score;
pub mod simple;

pub use benchmark::{BenchmarkResult, GameResult, run_benchmark};
pub use score::{ScoreCommandError, ScoreResult, score_pair};
pub use simple::run_simple;
