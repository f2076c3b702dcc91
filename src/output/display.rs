//! Display functions for the plain terminal front end

use super::formatters::{cell_tile, share_text};
use crate::core::{Evaluation, Word};
use crate::game::{GameController, Phase};
use colored::Colorize;

/// Print the whole grid, one row per line
pub fn print_board(game: &GameController) {
    let grid = game.grid();
    println!("\n{}", "─".repeat(grid.cols() * 3 + 4).cyan());
    for (row, cells) in grid.iter_rows().enumerate() {
        let scored = grid.is_row_scored(row);
        let tiles: String = cells
            .iter()
            .map(|&cell| cell_tile(cell, scored).to_string())
            .collect();
        let marker = if game.phase() == Phase::Idle && game.cursor().row == row {
            "▶".bright_yellow().to_string()
        } else {
            " ".to_string()
        };
        println!("{marker} {tiles}");
    }
    println!("{}", "─".repeat(grid.cols() * 3 + 4).cyan());
}

/// Print the end-of-game banner
pub fn print_game_over(game: &GameController) {
    match game.phase() {
        Phase::Won => {
            let guesses = game.store().guessed_words().len();
            println!(
                "\n{}",
                format!(
                    "🎉 Solved in {guesses} {}!",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        Phase::Exhausted => {
            println!(
                "\n{} The word was {}",
                "❌ Out of guesses.".red().bold(),
                game.config().target.text().bright_yellow().bold()
            );
        }
        Phase::Idle | Phase::RowSubmitted(_) => return,
    }
    println!("\n{}\n", share_text(game.grid()));
}

/// Print a single scored guess
pub fn print_evaluation(guess: &Word, target: &Word, evaluation: &Evaluation) {
    println!(
        "{} vs {}: {}",
        guess.text().bright_white().bold(),
        target.text().bright_yellow().bold(),
        evaluation.to_emoji()
    );
    println!(
        "  Greens: {}  Yellows: {}  Exact: {}",
        evaluation.count_greens().to_string().green(),
        evaluation.count_yellows().to_string().yellow(),
        if evaluation.is_exact_match() {
            "yes".green().bold()
        } else {
            "no".red()
        }
    );
}
