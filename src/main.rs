//! Pico Fermi Bagel - CLI
//!
//! Digit-guessing game with TUI and line modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pico_fermi::{
    commands::{run_benchmark, run_simple, score_pair},
    core::{DEFAULT_DIGITS, GameConfig, MAX_ATTEMPTS},
    output::{print_benchmark_result, print_score_result},
};

#[derive(Parser)]
#[command(
    name = "pico_fermi",
    about = "Guess the secret number: 🟩 right place, 🟨 wrong place, ⬜ not in the number",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of digits in the secret (3-8)
    #[arg(short, long, global = true, default_value_t = DEFAULT_DIGITS)]
    digits: usize,

    /// Attempts per game
    #[arg(short, long, global = true, default_value_t = MAX_ATTEMPTS)]
    attempts: usize,

    /// Show the secret when a game starts (debugging)
    #[arg(long, global = true)]
    reveal: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line)
    Simple,

    /// Score a guess against a known secret
    Score {
        /// The guess to score
        guess: String,

        /// The secret to score against
        secret: String,
    },

    /// Self-play benchmark with a baseline player
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Seed for the first game; game i uses seed + i
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.digits)?.with_max_attempts(cli.attempts)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, cli.reveal),
        Commands::Simple => run_simple(config, cli.reveal),
        Commands::Score { guess, secret } => run_score_command(&guess, &secret),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(config, count, seed);
            Ok(())
        }
    }
}

fn run_score_command(guess: &str, secret: &str) -> Result<()> {
    let result = score_pair(guess, secret)?;
    print_score_result(&result);
    Ok(())
}

fn run_benchmark_command(config: GameConfig, count: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);
    println!(
        "Running {count} self-play games with {} digits and {} attempts (seed {seed})...",
        config.digits(),
        config.max_attempts()
    );

    let result = run_benchmark(config, count, seed, true);
    print_benchmark_result(&result);
}

fn run_play_command(config: GameConfig, reveal: bool) -> Result<()> {
    use pico_fermi::interactive::{App, run_tui};

    let app = App::new(config, reveal);
    run_tui(app)
}
