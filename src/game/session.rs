//! Game session state
//!
//! A `Game` owns everything that changes from turn to turn: the secret, the
//! board, the guess being typed and the win/lose status. The core functions
//! stay pure; this is the one mutable state instance per session.

use super::board::Board;
use crate::core::{
    AttemptRecord, ConfigError, Digit, GameConfig, Guess, GuessError, KeyStatusMap, Secret,
    generate_secret_with,
};
use rand::Rng;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Keep guessing
    Continue { remaining: usize },
    /// Solved on attempt `attempts` (1-based)
    Won { attempts: usize },
    /// Budget exhausted; the secret is revealed
    Lost { secret: Secret },
}

/// Normalized input token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(Digit),
    Enter,
    Backspace,
}

impl Key {
    /// Map a typed character to a digit key
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        Digit::from_char(c).map(Self::Digit)
    }
}

/// One game session
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    secret: Secret,
    board: Board,
    current: Vec<Digit>,
    status: GameStatus,
    keys: KeyStatusMap,
}

impl Game {
    /// Start a game with a secret from the thread RNG
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, &mut rand::rng())
    }

    /// Start a game with a secret drawn from `rng`
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        // GameConfig only holds validated digit counts
        let secret = generate_secret_with(config.digits(), rng)
            .expect("GameConfig digit count is always in range");
        Self::with_secret(config, secret)
    }

    /// Start a game against a known secret
    ///
    /// # Panics
    /// Panics in debug mode if the secret length differs from the config.
    #[must_use]
    pub fn with_secret(config: GameConfig, secret: Secret) -> Self {
        debug_assert_eq!(secret.len(), config.digits(), "secret length must match config");
        Self {
            config,
            secret,
            board: Board::new(config.max_attempts()),
            current: Vec::with_capacity(config.digits()),
            status: GameStatus::Playing,
            keys: KeyStatusMap::default(),
        }
    }

    /// Append a digit to the guess in progress
    ///
    /// Ignored when the game is over, the guess is full, or the digit is
    /// already typed. Returns whether the digit was taken.
    pub fn push_digit(&mut self, digit: Digit) -> bool {
        if self.status != GameStatus::Playing
            || self.current.len() >= self.config.digits()
            || self.current.contains(&digit)
        {
            return false;
        }
        self.current.push(digit);
        true
    }

    /// Remove the last typed digit
    pub fn pop_digit(&mut self) -> Option<Digit> {
        if self.status != GameStatus::Playing {
            return None;
        }
        self.current.pop()
    }

    /// Submit the guess in progress
    ///
    /// On a rejected guess nothing changes: the attempt is not consumed and
    /// the typed digits stay in place. Once the game is over this returns the
    /// final outcome again without touching state.
    ///
    /// # Errors
    /// Returns the validation failure for an incomplete or invalid guess.
    pub fn submit(&mut self) -> Result<TurnOutcome, GuessError> {
        if self.status != GameStatus::Playing {
            return Ok(self.outcome());
        }

        let text: String = self.current.iter().map(|d| d.to_char()).collect();
        let guess = Guess::parse(&text, self.config.digits())?;
        let record = AttemptRecord::scored(guess, &self.secret);
        let solved = record.feedback().is_solved();

        // Playing implies a free slot
        if self.board.push(record).is_none() {
            return Ok(self.outcome());
        }
        self.keys = self.board.key_statuses();
        self.current.clear();

        self.status = if solved {
            GameStatus::Won
        } else if self.board.is_full() {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };

        Ok(self.outcome())
    }

    /// Replace the guess in progress with `text` and submit it
    ///
    /// # Errors
    /// Returns the validation failure; the previous typed guess is restored.
    pub fn submit_guess(&mut self, text: &str) -> Result<TurnOutcome, GuessError> {
        if self.status != GameStatus::Playing {
            return Ok(self.outcome());
        }

        let guess = Guess::parse(text, self.config.digits())?;
        let typed = std::mem::replace(&mut self.current, guess.digits().to_vec());
        let result = self.submit();
        if result.is_err() {
            self.current = typed;
        }
        result
    }

    /// Dispatch a normalized key
    ///
    /// Only Enter produces an outcome.
    ///
    /// # Errors
    /// Returns the validation failure when Enter submits an invalid guess.
    pub fn handle_key(&mut self, key: Key) -> Result<Option<TurnOutcome>, GuessError> {
        match key {
            Key::Digit(digit) => {
                self.push_digit(digit);
                Ok(None)
            }
            Key::Backspace => {
                self.pop_digit();
                Ok(None)
            }
            Key::Enter => self.submit().map(Some),
        }
    }

    /// Start over with a fresh secret and the same settings
    pub fn restart(&mut self) {
        self.restart_with(&mut rand::rng());
    }

    /// Start over with a secret drawn from `rng`
    pub fn restart_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::with_rng(self.config, rng);
    }

    /// True once a digit has been typed or a guess submitted in a live game
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.status == GameStatus::Playing && (!self.current.is_empty() || self.board.filled() > 0)
    }

    /// Change the secret length and start a new game
    ///
    /// # Errors
    /// Returns `ConfigError::GameInProgress` while a game is underway and
    /// `ConfigError::DigitCountOutOfRange` for unsupported lengths.
    pub fn set_digits(&mut self, digits: usize) -> Result<(), ConfigError> {
        self.set_digits_with(digits, &mut rand::rng())
    }

    /// `set_digits` with an explicit random source
    ///
    /// # Errors
    /// See `set_digits`.
    pub fn set_digits_with<R: Rng + ?Sized>(
        &mut self,
        digits: usize,
        rng: &mut R,
    ) -> Result<(), ConfigError> {
        if self.in_progress() {
            return Err(ConfigError::GameInProgress);
        }
        let config = GameConfig::new(digits)?.with_max_attempts(self.config.max_attempts())?;
        *self = Self::with_rng(config, rng);
        Ok(())
    }

    fn outcome(&self) -> TurnOutcome {
        match self.status {
            GameStatus::Playing => TurnOutcome::Continue {
                remaining: self.remaining(),
            },
            GameStatus::Won => TurnOutcome::Won {
                attempts: self.board.filled(),
            },
            GameStatus::Lost => TurnOutcome::Lost {
                secret: self.secret.clone(),
            },
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Digits typed for the next guess
    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &[Digit] {
        &self.current
    }

    /// Zero-based index of the row being typed
    #[inline]
    #[must_use]
    pub const fn current_attempt(&self) -> usize {
        self.board.filled()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.board.capacity() - self.board.filled()
    }

    /// Keypad statuses after the last accepted guess
    #[inline]
    #[must_use]
    pub const fn key_statuses(&self) -> &KeyStatusMap {
        &self.keys
    }

    /// The secret, only once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Secret> {
        (self.status != GameStatus::Playing).then_some(&self.secret)
    }

    /// The secret regardless of state, for explicit debug output
    #[must_use]
    pub const fn secret_for_debug(&self) -> &Secret {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_ATTEMPTS, Status};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game(secret: &str) -> Game {
        let secret = Secret::parse(secret).unwrap();
        Game::with_secret(GameConfig::new(secret.len()).unwrap(), secret)
    }

    fn digit(c: char) -> Digit {
        Digit::from_char(c).unwrap()
    }

    #[test]
    fn end_to_end_win_on_second_attempt() {
        let mut game = game("1234");

        let outcome = game.submit_guess("4321").unwrap();
        assert_eq!(outcome, TurnOutcome::Continue { remaining: 5 });
        assert_eq!(game.board().last().unwrap().feedback().to_string(), "PPPP");
        assert_eq!(game.status(), GameStatus::Playing);

        let outcome = game.submit_guess("1234").unwrap();
        assert_eq!(outcome, TurnOutcome::Won { attempts: 2 });
        assert!(game.board().last().unwrap().feedback().is_solved());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.revealed_secret().unwrap().to_string(), "1234");
    }

    #[test]
    fn losing_after_budget_reveals_secret() {
        let mut game = game("1234");
        let guesses = ["5678", "5679", "5689", "5789", "6789", "0567"];
        assert_eq!(guesses.len(), MAX_ATTEMPTS);

        for guess in &guesses[..MAX_ATTEMPTS - 1] {
            assert!(matches!(
                game.submit_guess(guess).unwrap(),
                TurnOutcome::Continue { .. }
            ));
        }
        assert!(game.revealed_secret().is_none());

        let outcome = game.submit_guess(guesses[MAX_ATTEMPTS - 1]).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Lost {
                secret: Secret::parse("1234").unwrap()
            }
        );
        assert_eq!(game.status(), GameStatus::Lost);
        assert!(game.board().is_full());
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let secret = Secret::parse("123").unwrap();
        let config = GameConfig::new(3).unwrap().with_max_attempts(2).unwrap();
        let mut game = Game::with_secret(config, secret);
        game.submit_guess("456").unwrap();
        assert_eq!(game.submit_guess("123").unwrap(), TurnOutcome::Won { attempts: 2 });
    }

    #[test]
    fn rejected_guess_is_a_no_op() {
        let mut game = game("1234");
        game.submit_guess("5678").unwrap();
        let before = game.clone();

        assert!(matches!(
            game.submit_guess("123"),
            Err(GuessError::LengthMismatch { .. })
        ));
        assert_eq!(
            game.submit_guess("1123"),
            Err(GuessError::DuplicateDigit(digit('1')))
        );
        assert_eq!(
            game.submit_guess("12a3"),
            Err(GuessError::NonDigitCharacter('a'))
        );

        assert_eq!(game.board(), before.board());
        assert_eq!(game.current_attempt(), 1);
        assert_eq!(game.key_statuses(), before.key_statuses());
    }

    #[test]
    fn typing_rules() {
        let mut game = game("1234");
        assert!(game.push_digit(digit('1')));
        assert!(!game.push_digit(digit('1')), "repeated digit is ignored");
        assert!(game.push_digit(digit('2')));
        assert!(game.push_digit(digit('3')));
        assert!(game.push_digit(digit('5')));
        assert!(!game.push_digit(digit('6')), "row is full");
        assert_eq!(game.pop_digit(), Some(digit('5')));
        assert_eq!(game.current_guess().len(), 3);
    }

    #[test]
    fn enter_on_short_guess_keeps_typed_digits() {
        let mut game = game("1234");
        game.handle_key(Key::Digit(digit('9'))).unwrap();
        game.handle_key(Key::Digit(digit('8'))).unwrap();

        let result = game.handle_key(Key::Enter);
        assert_eq!(
            result,
            Err(GuessError::LengthMismatch {
                expected: 4,
                actual: 2
            })
        );
        assert_eq!(game.current_guess(), &[digit('9'), digit('8')]);
        assert_eq!(game.current_attempt(), 0);
    }

    #[test]
    fn keyboard_driven_turn() {
        let mut game = game("1234");
        for c in "1249".chars() {
            assert_eq!(game.handle_key(Key::from_char(c).unwrap()), Ok(None));
        }
        assert_eq!(game.handle_key(Key::Backspace), Ok(None));
        assert_eq!(game.current_guess().len(), 3);
        assert_eq!(game.handle_key(Key::Digit(digit('3'))), Ok(None));
        let outcome = game.handle_key(Key::Enter).unwrap();
        assert_eq!(outcome, Some(TurnOutcome::Continue { remaining: 5 }));
        assert!(game.current_guess().is_empty());

        let keys = game.key_statuses();
        assert_eq!(keys.get(digit('1')), Some(Status::Correct));
        assert_eq!(keys.get(digit('4')), Some(Status::Present));
        assert_eq!(keys.get(digit('5')), None);
    }

    #[test]
    fn key_statuses_follow_history() {
        let mut game = game("1234");
        game.submit_guess("5671").unwrap();
        assert_eq!(game.key_statuses().get(digit('1')), Some(Status::Present));
        game.submit_guess("1890").unwrap();
        assert_eq!(game.key_statuses().get(digit('1')), Some(Status::Correct));
        assert_eq!(game.key_statuses(), &game.board().key_statuses());
    }

    #[test]
    fn input_is_ignored_after_game_over() {
        let mut game = game("1234");
        game.submit_guess("1234").unwrap();
        assert!(!game.push_digit(digit('5')));
        assert_eq!(game.pop_digit(), None);
        assert_eq!(game.submit(), Ok(TurnOutcome::Won { attempts: 1 }));
        assert_eq!(game.board().filled(), 1);
    }

    #[test]
    fn digit_length_changes_only_before_play() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = Game::with_rng(GameConfig::default(), &mut rng);

        game.set_digits_with(6, &mut rng).unwrap();
        assert_eq!(game.config().digits(), 6);
        assert_eq!(game.secret_for_debug().len(), 6);

        game.push_digit(digit('1'));
        assert_eq!(game.set_digits_with(5, &mut rng), Err(ConfigError::GameInProgress));
        assert_eq!(game.config().digits(), 6);

        game.pop_digit();
        assert_eq!(
            game.set_digits_with(9, &mut rng),
            Err(ConfigError::DigitCountOutOfRange(9))
        );
        game.set_digits_with(3, &mut rng).unwrap();
        assert_eq!(game.config().digits(), 3);
    }

    #[test]
    fn digit_length_changes_after_game_over() {
        let mut game = game("123");
        game.submit_guess("123").unwrap();
        assert!(!game.in_progress());
        game.set_digits(8).unwrap();
        assert_eq!(game.config().digits(), 8);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn restart_clears_state() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = Game::with_rng(GameConfig::new(5).unwrap(), &mut rng);
        game.push_digit(digit('0'));
        game.restart_with(&mut rng);
        assert!(game.current_guess().is_empty());
        assert_eq!(game.board().filled(), 0);
        assert_eq!(game.config().digits(), 5);
        assert!(game.key_statuses().is_empty());
    }
}
