//! Display functions for command results

use super::formatters::{create_progress_bar, empty_row, keypad_line, record_row, spaced_digits};
use crate::commands::{BenchmarkResult, ScoreResult};
use crate::core::{AttemptRecord, Digit, KeyStatusMap, Status};
use crate::game::Board;
use colored::{ColoredString, Colorize};

/// Color a digit by its best observed status
#[must_use]
pub fn colored_digit(digit: Digit, status: Option<Status>) -> ColoredString {
    let text = format!(" {digit} ");
    match status {
        Some(Status::Correct) => text.black().on_green().bold(),
        Some(Status::Present) => text.black().on_yellow().bold(),
        Some(Status::Absent) => text.bright_black(),
        None => text.white().bold(),
    }
}

/// Print the on-screen keypad
///
/// Falls back to the plain status-code line when colors are disabled
/// (`NO_COLOR`, or output is not a terminal).
pub fn print_keypad(keys: &KeyStatusMap) {
    if !colored::control::SHOULD_COLORIZE.should_colorize() {
        println!("  {}", keypad_line(keys));
        return;
    }
    let line: Vec<String> = Digit::ALL
        .iter()
        .map(|&d| colored_digit(d, keys.get(d)).to_string())
        .collect();
    println!("  {}", line.join(""));
}

/// Print one scored guess
pub fn print_record(index: usize, record: &AttemptRecord) {
    println!(
        "  {}. {}",
        (index + 1).to_string().bright_black(),
        record_row(record)
    );
}

/// Print every row of the board, empty slots included
pub fn print_board(board: &Board, digits: usize, typed: &[Digit]) {
    for (i, record) in board.records().enumerate() {
        print_record(i, record);
    }
    for i in board.filled()..board.capacity() {
        let row = if i == board.filled() && !typed.is_empty() {
            spaced_digits(typed).bold()
        } else {
            empty_row(digits).bright_black()
        };
        println!("  {}. {row}", (i + 1).to_string().bright_black());
    }
}

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.to_string().bright_white().bold(),
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!(
        "\n  {}  {}",
        result.feedback.to_emoji(),
        result.feedback.to_string().bright_black()
    );
    println!(
        "  {} correct, {} present\n",
        result.feedback.count_correct().to_string().green().bold(),
        result.feedback.count_present().to_string().yellow().bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Digits / attempts: {} / {}",
        result.config.digits(),
        result.config.max_attempts()
    );
    println!("   Games played:      {}", result.total_games);
    println!(
        "   Won:               {} {}",
        result.wins,
        format!("({:.1}%)", result.win_rate() * 100.0).green()
    );
    if result.losses() > 0 {
        println!("   Lost:              {}", result.losses().to_string().red());
    }
    println!(
        "   Average attempts:  {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:      {:.1}", result.games_per_second);

    if result.wins == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (attempts, &count) in result.distribution.iter().enumerate().skip(1) {
        if count == 0 {
            continue;
        }
        let pct = count as f64 / result.total_games as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
