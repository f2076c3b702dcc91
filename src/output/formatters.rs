//! Formatting utilities for terminal output

use crate::core::Feedback;
use crate::game::{Cell, Grid};
use colored::{ColoredString, Colorize};

/// Format a row of cells as an emoji string
///
/// Cells of a row that has not been scored yet show as white squares.
#[must_use]
pub fn row_to_emoji(cells: &[Cell], scored: bool) -> String {
    cells
        .iter()
        .map(|cell| {
            if scored {
                cell.feedback().to_emoji()
            } else {
                Feedback::None.to_emoji()
            }
        })
        .collect()
}

/// Render one cell as a colored three-character tile
#[must_use]
pub fn cell_tile(cell: Cell, scored: bool) -> ColoredString {
    let text = format!(" {} ", cell.letter().unwrap_or('·'));
    if !scored {
        return if cell.is_empty() {
            text.bright_black()
        } else {
            text.bold()
        };
    }
    match cell.feedback() {
        Feedback::Green => text.black().on_green().bold(),
        Feedback::Yellow => text.black().on_yellow().bold(),
        Feedback::Grey => text.white().on_bright_black().bold(),
        Feedback::None => text.normal(),
    }
}

/// Emoji summary of every scored row, one line per guess
#[must_use]
pub fn share_text(grid: &Grid) -> String {
    (0..grid.rows())
        .filter(|&row| grid.is_row_scored(row))
        .filter_map(|row| grid.row(row).map(|cells| row_to_emoji(cells, true)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameController};

    fn played(words: &[&str]) -> GameController {
        let mut game = GameController::new(GameConfig::reference()).unwrap();
        for word in words {
            for ch in word.chars() {
                game.handle_key(&ch.to_string());
            }
        }
        game
    }

    #[test]
    fn unscored_row_is_blank_squares() {
        let game = played(&["gri"]);
        let cells = game.grid().row(0).unwrap();
        assert_eq!(row_to_emoji(cells, false), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn scored_row_uses_feedback_colors() {
        let game = played(&["round"]);
        let cells = game.grid().row(0).unwrap();
        assert_eq!(row_to_emoji(cells, true), "🟨⬛⬛🟩🟩");
    }

    #[test]
    fn share_text_lists_scored_rows_only() {
        let game = played(&["round", "grind", "plant"]);
        assert_eq!(share_text(game.grid()), "🟨⬛⬛🟩🟩\n🟩🟩🟩🟩🟩");
        assert_eq!(share_text(played(&[]).grid()), "");
    }

    #[test]
    fn tile_shows_letter_or_placeholder() {
        colored::control::set_override(false);
        assert_eq!(cell_tile(Cell::EMPTY, false).to_string(), " · ");
        let game = played(&["r"]);
        let cell = game.grid().cell(0, 0).unwrap();
        assert_eq!(cell_tile(cell, false).to_string(), " R ");
    }
}
