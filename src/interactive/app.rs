//! TUI application state and logic

use crate::core::{ConfigError, Digit, GameConfig, MAX_DIGITS, MIN_DIGITS};
use crate::game::{Game, GameStatus, Key, TurnOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: Game,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub reveal: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session statistics across games
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts wins on attempt `n`
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, won_on: Option<usize>) {
        self.total_games += 1;
        if let Some(attempts) = won_on {
            self.games_won += 1;
            if self.guess_distribution.len() <= attempts {
                self.guess_distribution.resize(attempts + 1, 0);
            }
            self.guess_distribution[attempts] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig, reveal: bool) -> Self {
        let mut app = Self {
            game: Game::new(config),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            reveal,
        };
        app.add_message(
            &format!(
                "Guess the {}-digit number. Digits never repeat.",
                config.digits()
            ),
            MessageStyle::Info,
        );
        app.announce_secret();
        app
    }

    /// Feed one normalized key to the game and report the result
    pub fn handle_key(&mut self, key: Key) {
        if self.game.status() != GameStatus::Playing {
            return;
        }

        match self.game.handle_key(key) {
            Ok(Some(outcome)) => self.report(outcome),
            Ok(None) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn report(&mut self, outcome: TurnOutcome) {
        match outcome {
            TurnOutcome::Continue { remaining } => {
                self.add_message(
                    &format!(
                        "{remaining} {} left",
                        if remaining == 1 { "attempt" } else { "attempts" }
                    ),
                    MessageStyle::Info,
                );
            }
            TurnOutcome::Won { attempts } => {
                self.stats.record(Some(attempts));
                self.add_message(
                    &format!(
                        "You won in {attempts} {}!",
                        if attempts == 1 { "attempt" } else { "attempts" }
                    ),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            TurnOutcome::Lost { secret } => {
                self.stats.record(None);
                self.add_message(
                    &format!("Game over! The number was {secret}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    /// Start a new game unless one is underway
    pub fn new_game(&mut self) {
        if self.game.in_progress() {
            self.add_message(
                "Finish the current game before starting a new one.",
                MessageStyle::Error,
            );
            return;
        }
        self.game.restart();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.announce_secret();
    }

    /// Grow or shrink the secret length by `delta`
    pub fn change_digits(&mut self, delta: isize) {
        let current = self.game.config().digits();
        let Some(requested) = current.checked_add_signed(delta) else {
            return;
        };

        match self.game.set_digits(requested) {
            Ok(()) => {
                self.messages.clear();
                self.add_message(
                    &format!("Number length set to {requested} digits."),
                    MessageStyle::Info,
                );
                self.announce_secret();
            }
            Err(ConfigError::DigitCountOutOfRange(_)) => self.add_message(
                &format!("Number length must be between {MIN_DIGITS} and {MAX_DIGITS}."),
                MessageStyle::Error,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn announce_secret(&mut self) {
        if self.reveal {
            let text = format!("Secret (debug): {}", self.game.secret_for_debug());
            self.add_message(&text, MessageStyle::Info);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::SUPER) {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') => app.new_game(),
                KeyCode::Char('+' | '=') => app.change_digits(1),
                KeyCode::Char('-') => app.change_digits(-1),
                KeyCode::Char(c) => {
                    if let Some(digit) = Digit::from_char(c) {
                        app.handle_key(Key::Digit(digit));
                    }
                }
                KeyCode::Backspace => app.handle_key(Key::Backspace),
                KeyCode::Enter => app.handle_key(Key::Enter),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Secret;

    fn app(secret: &str) -> App {
        let secret = Secret::parse(secret).unwrap();
        let config = GameConfig::new(secret.len()).unwrap();
        let mut app = App::new(config, false);
        app.game = Game::with_secret(config, secret);
        app
    }

    fn type_guess(app: &mut App, guess: &str) {
        for c in guess.chars() {
            app.handle_key(Key::from_char(c).unwrap());
        }
        app.handle_key(Key::Enter);
    }

    fn last_message(app: &App) -> &Message {
        app.messages.last().unwrap()
    }

    #[test]
    fn short_guess_reports_error() {
        let mut app = app("1234");
        type_guess(&mut app, "12");
        let msg = last_message(&app);
        assert_eq!(msg.text, "Guess must be 4 digits long.");
        assert_eq!(msg.style, MessageStyle::Error);
    }

    #[test]
    fn win_updates_stats() {
        let mut app = app("1234");
        type_guess(&mut app, "4321");
        type_guess(&mut app, "1234");
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!(app.messages.iter().any(|m| m.text == "You won in 2 attempts!"));
    }

    #[test]
    fn loss_reveals_number() {
        let mut app = app("123");
        for guess in ["456", "457", "458", "459", "450", "467"] {
            type_guess(&mut app, guess);
        }
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Game over! The number was 123.")
        );
    }

    #[test]
    fn digit_length_locked_while_playing() {
        let mut app = app("1234");
        app.handle_key(Key::from_char('5').unwrap());
        app.change_digits(1);
        assert_eq!(app.game.config().digits(), 4);
        assert_eq!(
            last_message(&app).text,
            "You cannot change digit length during an active game."
        );
    }

    #[test]
    fn digit_length_bounds() {
        let mut app = app("12345678");
        app.change_digits(1);
        assert_eq!(app.game.config().digits(), 8);
        assert_eq!(last_message(&app).style, MessageStyle::Error);

        app.change_digits(-1);
        assert_eq!(app.game.config().digits(), 7);
    }

    #[test]
    fn new_game_only_when_idle() {
        let mut app = app("1234");
        app.handle_key(Key::from_char('1').unwrap());
        app.new_game();
        assert_eq!(app.game.current_guess().len(), 1);

        type_guess(&mut app, "234");
        assert_eq!(app.game.status(), GameStatus::Won);
        app.new_game();
        assert_eq!(app.game.status(), GameStatus::Playing);
        assert_eq!(app.game.board().filled(), 0);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app("1234");
        for i in 0..10 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "msg 5");
    }

    #[test]
    fn reveal_adds_debug_message() {
        let app = App::new(GameConfig::default(), true);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.starts_with("Secret (debug): "))
        );
    }
}
