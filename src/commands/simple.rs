//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Each character of an input line is
//! delivered to the controller as its own key event.

use crate::game::{GameController, KeyOutcome};
use crate::output::{print_board, print_game_over};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the input loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    Continue,
    Reset,
    Quit,
}

/// Interpret one line of input
///
/// `:reset`/`:r` and `:quit`/`:q` are commands; anything else is typed into
/// the grid character by character. Returns the action plus the outcome of
/// every key that was not ignored.
pub fn apply_line(game: &mut GameController, line: &str) -> (LineAction, Vec<KeyOutcome>) {
    match line.trim() {
        ":quit" | ":q" => return (LineAction::Quit, Vec::new()),
        ":reset" | ":r" => {
            game.reset();
            return (LineAction::Reset, Vec::new());
        }
        _ => {}
    }

    let outcomes = line
        .chars()
        .map(|ch| {
            let mut buf = [0u8; 4];
            game.handle_key(ch.encode_utf8(&mut buf))
        })
        .filter(|outcome| *outcome != KeyOutcome::Ignored)
        .collect();

    (LineAction::Continue, outcomes)
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(game: &mut GameController) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║          Wordle Grid - Simple Mode       ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!(
        "Type {}-letter words. Rows that are not in the word list are cleared.",
        game.config().cols
    );
    println!("Commands: ':reset' for a new game, ':quit' to exit\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_board(game);

        if game.phase().is_over() {
            print_game_over(game);
            match prompt(&mut lines, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    game.reset();
                    println!("\n🔄 New game started!");
                    continue;
                }
                _ => break,
            }
        }

        let Some(line) = prompt(&mut lines, "Guess")? else {
            break;
        };

        let (action, outcomes) = apply_line(game, &line);
        match action {
            LineAction::Quit => break,
            LineAction::Reset => println!("\n🔄 New game started!"),
            LineAction::Continue => report(&outcomes),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn report(outcomes: &[KeyOutcome]) {
    for outcome in outcomes {
        if let KeyOutcome::Rejected { word, reason, .. } = outcome {
            println!("{} {word}: {reason}", "❌".red());
        }
    }
}

/// Prompt and read one trimmed line; `None` on end of input
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    lines
        .next()
        .transpose()
        .map(|line| line.map(|l| l.trim().to_lowercase()))
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Phase, Rejection};

    fn game() -> GameController {
        GameController::new(GameConfig::reference()).unwrap()
    }

    #[test]
    fn line_types_each_character() {
        let mut game = game();
        let (action, outcomes) = apply_line(&mut game, "round");
        assert_eq!(action, LineAction::Continue);
        assert_eq!(outcomes.len(), 5);
        assert!(matches!(outcomes[4], KeyOutcome::Scored { row: 0, .. }));
    }

    #[test]
    fn spaces_and_digits_are_skipped() {
        let mut game = game();
        let (_, outcomes) = apply_line(&mut game, "g r 1 i");
        assert_eq!(outcomes.len(), 3);
        assert_eq!(game.grid().row_text(0), "GRI");
    }

    #[test]
    fn long_line_spills_into_next_row() {
        let mut game = game();
        let (_, outcomes) = apply_line(&mut game, "roundgrind");
        assert!(matches!(outcomes.last(), Some(KeyOutcome::Won { row: 1, .. })));
        assert_eq!(game.phase(), Phase::Won);
    }

    #[test]
    fn rejected_row_reported() {
        let mut game = game();
        let (_, outcomes) = apply_line(&mut game, "zzzzz");
        assert!(matches!(
            outcomes.last(),
            Some(KeyOutcome::Rejected {
                reason: Rejection::NotInDictionary,
                ..
            })
        ));
    }

    #[test]
    fn commands() {
        let mut game = game();
        apply_line(&mut game, "gr");
        assert_eq!(apply_line(&mut game, ":reset").0, LineAction::Reset);
        assert!(game.grid().is_blank());
        assert_eq!(apply_line(&mut game, " :q ").0, LineAction::Quit);
    }
}
