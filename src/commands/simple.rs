//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use crate::core::{GameConfig, MAX_DIGITS, MIN_DIGITS};
use crate::game::{Game, TurnOutcome};
use crate::output::{print_board, print_keypad};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the line-mode game
///
/// With `reveal` set, each new secret is printed to stderr for debugging.
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(config: GameConfig, reveal: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Pico Fermi Bagel - Simple Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret number. Every digit is different.");
    println!("After each guess you get one square per digit:\n");
    println!("  - 🟩 right digit, right place");
    println!("  - 🟨 digit is in the number, somewhere else");
    println!("  - ⬜ digit is not in the number\n");
    println!(
        "Commands: 'quit' to exit, 'new' for a new game, 'digits N' to change length ({MIN_DIGITS}-{MAX_DIGITS})\n"
    );

    let mut game = Game::new(config);
    announce(&game, reveal);

    loop {
        let prompt = format!(
            "Guess {} of {}",
            game.current_attempt() + 1,
            game.config().max_attempts()
        );
        let Some(input) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.restart();
                println!("\n🔄 New game started!\n");
                announce(&game, reveal);
                continue;
            }
            cmd if cmd.starts_with("digits") => {
                let requested = cmd.trim_start_matches("digits").trim().parse::<usize>();
                match requested {
                    Ok(digits) => match game.set_digits(digits) {
                        Ok(()) => {
                            println!("\n🔄 New {digits}-digit game started!\n");
                            announce(&game, reveal);
                        }
                        Err(e) => println!("{} {}\n", "❌".red(), e.to_string().red()),
                    },
                    Err(_) => println!("{}\n", "❌ Usage: digits N".red()),
                }
                continue;
            }
            _ => {}
        }

        match game.submit_guess(&input) {
            Err(e) => {
                println!("{} {}\n", "❌".red(), e.to_string().red());
            }
            Ok(TurnOutcome::Continue { remaining }) => {
                println!();
                print_board(game.board(), game.config().digits(), game.current_guess());
                println!();
                print_keypad(game.key_statuses());
                println!(
                    "\n  {} {} left\n",
                    remaining.to_string().bright_cyan().bold(),
                    if remaining == 1 { "attempt" } else { "attempts" }
                );
            }
            Ok(TurnOutcome::Won { attempts }) => {
                println!("\n{}", "═".repeat(60).bright_cyan());
                println!(
                    "{}",
                    "      🎉 🎊 ✨  S O L V E D !  ✨ 🎊 🎉      "
                        .bright_green()
                        .bold()
                );
                println!("{}", "═".repeat(60).bright_cyan());
                println!();
                print_board(game.board(), game.config().digits(), &[]);
                println!(
                    "\n  You won in {} {}!",
                    attempts.to_string().bright_cyan().bold(),
                    if attempts == 1 { "attempt" } else { "attempts" }
                );
                println!("\n{}\n", "═".repeat(60).bright_cyan());

                if !play_again(&mut game, reveal)? {
                    return Ok(());
                }
            }
            Ok(TurnOutcome::Lost { secret }) => {
                println!();
                print_board(game.board(), game.config().digits(), &[]);
                println!(
                    "\n  {} The number was {}.\n",
                    "Game over!".red().bold(),
                    secret.to_string().bright_yellow().bold()
                );

                if !play_again(&mut game, reveal)? {
                    return Ok(());
                }
            }
        }
    }
}

fn announce(game: &Game, reveal: bool) {
    println!(
        "A {}-digit number has been chosen. You have {} attempts.\n",
        game.config().digits(),
        game.config().max_attempts()
    );
    if reveal {
        eprintln!("Secret (debug): {}", game.secret_for_debug());
    }
}

fn play_again(game: &mut Game, reveal: bool) -> Result<bool> {
    match get_user_input("Play again? (yes/no)")?
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "yes" | "y" => {
            game.restart();
            println!("\n🔄 New game started!\n");
            announce(game, reveal);
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
