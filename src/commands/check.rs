//! Guess checking command
//!
//! Scores a single guess against the configured target without playing a game.

use crate::core::{Evaluation, Word, evaluate};
use crate::game::GameConfig;

/// Result of checking one guess
#[derive(Debug)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub evaluation: Evaluation,
    pub in_dictionary: bool,
}

/// Score `guess` against the target of `config`
///
/// Words outside the dictionary are still scored; `in_dictionary` tells the
/// caller whether the game would have accepted them.
///
/// # Errors
///
/// Returns an error if:
/// - The guess is not a valid word
/// - The guess length differs from the configured column count
pub fn check_guess(guess: &str, config: &GameConfig) -> Result<CheckResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    if guess.len() != config.cols {
        return Err(format!(
            "Guess '{guess}' has {} letters, expected {}",
            guess.len(),
            config.cols
        ));
    }

    let evaluation = evaluate(&guess, &config.target, config.scoring);
    let in_dictionary = config.dictionary.contains_word(&guess);

    Ok(CheckResult {
        guess,
        target: config.target.clone(),
        evaluation,
        in_dictionary,
    })
}
