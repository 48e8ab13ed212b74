//! Turn-by-turn game state

mod board;
mod session;

pub use board::Board;
pub use session::{Game, GameStatus, Key, TurnOutcome};
