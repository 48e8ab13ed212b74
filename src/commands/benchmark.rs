//! Benchmark command
//!
//! Plays many games with the baseline consistent player and collects
//! statistics. Games run in parallel; each one owns a seeded RNG so a run is
//! reproducible for a given seed.

use crate::core::{Digit, GameConfig};
use crate::game::{Game, TurnOutcome};
use crate::player::{ConsistentPlayer, all_codes};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of one self-played game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub attempts: usize,
    pub won: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub config: GameConfig,
    pub total_games: usize,
    pub wins: usize,
    pub average_attempts: f64,
    /// `distribution[n]` counts games won on attempt `n`
    pub distribution: Vec<usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn losses(&self) -> usize {
        self.total_games - self.wins
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64
        }
    }
}

/// Play one game against a secret drawn from `seed`
#[must_use]
pub fn play_one(config: GameConfig, codes: &[Vec<Digit>], seed: u64) -> GameResult {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::with_rng(config, &mut rng);
    let mut player = ConsistentPlayer::new(codes);

    while let Some(guess) = player.next_guess(&mut rng) {
        match game.submit_guess(&guess.to_string()) {
            Ok(TurnOutcome::Continue { .. }) => {
                if let Some(record) = game.board().last() {
                    player.observe(record);
                }
            }
            Ok(TurnOutcome::Won { attempts }) => return GameResult { attempts, won: true },
            Ok(TurnOutcome::Lost { .. }) | Err(_) => break,
        }
    }

    GameResult {
        attempts: game.board().filled(),
        won: false,
    }
}

/// Run `count` games, the i-th seeded with `seed + i`
#[must_use]
pub fn run_benchmark(
    config: GameConfig,
    count: usize,
    seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();
    let codes = all_codes(config.digits());

    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
        pb.set_style(style);
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<GameResult> = (0..count)
        .into_par_iter()
        .map(|i| {
            let result = play_one(config, &codes, seed.wrapping_add(i as u64));
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut distribution = vec![0; config.max_attempts() + 1];
    let mut wins = 0;
    let mut won_attempts = 0;
    for result in results.iter().filter(|r| r.won) {
        wins += 1;
        won_attempts += result.attempts;
        distribution[result.attempts] += 1;
    }

    let duration = start.elapsed();
    BenchmarkResult {
        config,
        total_games: count,
        wins,
        average_attempts: if wins > 0 {
            won_attempts as f64 / wins as f64
        } else {
            0.0
        },
        distribution,
        duration,
        games_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
