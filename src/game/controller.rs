//! Input controller
//!
//! Turns raw key identifiers into grid mutations. A key event is processed to
//! completion before the next one is accepted:
//!
//! - `Idle`: letters fill the cursor row left to right
//! - `RowSubmitted(row)`: the row just filled is checked against the
//!   dictionary and the guess list, then scored or cleared for retry
//! - `Won` / `Exhausted`: every key is ignored until `reset`

use super::config::{ConfigError, GameConfig};
use super::grid::{Cursor, Grid, GridObserver, GridStore};
use crate::core::{Evaluation, Word, evaluate};
use log::{debug, info};
use std::fmt;

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for letters at the store's cursor
    Idle,
    /// The row is full and being validated
    RowSubmitted(usize),
    /// The target was guessed
    Won,
    /// Every row was used without a match
    Exhausted,
}

impl Phase {
    /// True for `Won` and `Exhausted`
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Exhausted)
    }
}

/// Why a completed row was sent back for retyping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotInDictionary,
    AlreadyGuessed,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInDictionary => write!(f, "not in word list"),
            Self::AlreadyGuessed => write!(f, "already guessed"),
        }
    }
}

/// What a single key event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a single letter, or no room for one
    Ignored,
    /// Letter written; the row is not yet full
    Placed { row: usize, col: usize, letter: char },
    /// The completed row was invalid and has been cleared
    Rejected {
        row: usize,
        word: String,
        reason: Rejection,
    },
    /// The completed row was scored and play moves to the next row
    Scored { row: usize, evaluation: Evaluation },
    /// The completed row matched the target
    Won { row: usize, evaluation: Evaluation },
    /// The last row was scored without a match
    Exhausted { evaluation: Evaluation },
}

/// Single owner of the game state
///
/// # Examples
/// ```
/// use wordle_grid::game::{GameConfig, GameController, KeyOutcome, Phase};
///
/// let mut game = GameController::new(GameConfig::reference()).unwrap();
/// for key in ["g", "r", "i", "n"] {
///     assert!(matches!(game.handle_key(key), KeyOutcome::Placed { .. }));
/// }
/// assert!(matches!(game.handle_key("d"), KeyOutcome::Won { row: 0, .. }));
/// assert_eq!(game.phase(), Phase::Won);
/// ```
#[derive(Debug)]
pub struct GameController {
    config: GameConfig,
    store: GridStore,
    phase: Phase,
}

impl GameController {
    /// Start a game after validating the configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is inconsistent, for
    /// example a target word missing from the dictionary.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let store = GridStore::new(config.rows, config.cols);
        info!(
            "new game: {}x{} grid, {} dictionary words, {:?} scoring",
            config.rows,
            config.cols,
            config.dictionary.len(),
            config.scoring
        );
        Ok(Self {
            config,
            store,
            phase: Phase::Idle,
        })
    }

    /// Configuration the game was started with
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Grid, cursor and guess bookkeeping
    #[must_use]
    pub const fn store(&self) -> &GridStore {
        &self.store
    }

    /// Current grid snapshot
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        self.store.grid()
    }

    /// Current controller phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Next cell to receive a letter
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.store.cursor()
    }

    /// Register a renderer or any other listener for grid changes
    pub fn subscribe(&mut self, observer: impl GridObserver + 'static) {
        self.store.subscribe(observer);
    }

    /// Return to an empty grid at row 0, column 0 from any phase
    pub fn reset(&mut self) {
        self.store.reset();
        self.phase = Phase::Idle;
        debug!("game reset");
    }

    /// Feed one raw key identifier, such as `"a"`, `"Enter"` or `"Shift"`
    ///
    /// Only single ASCII letters have an effect; they are uppercased.
    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        let Some(letter) = parse_key(key) else {
            return KeyOutcome::Ignored;
        };
        if self.phase != Phase::Idle {
            return KeyOutcome::Ignored;
        }

        let Cursor { row, col } = self.store.cursor();
        if !self.store.set_cell(row, col, letter) {
            return KeyOutcome::Ignored;
        }
        debug!("placed {letter} at ({row}, {col})");

        if col + 1 < self.config.cols {
            self.store.set_cursor(Cursor { row, col: col + 1 });
            return KeyOutcome::Placed { row, col, letter };
        }

        self.phase = Phase::RowSubmitted(row);
        self.submit_row(row)
    }

    fn submit_row(&mut self, row: usize) -> KeyOutcome {
        let text = self.store.grid().row_text(row);

        let word = match self.check_guess(&text) {
            Ok(word) => word,
            Err(reason) => {
                self.store.clear_row(row);
                self.store.set_cursor(Cursor { row, col: 0 });
                self.phase = Phase::Idle;
                info!("rejected {text} on row {row}: {reason:?}");
                return KeyOutcome::Rejected {
                    row,
                    word: text,
                    reason,
                };
            }
        };

        let evaluation = evaluate(&word, &self.config.target, self.config.scoring);
        self.store.record_guess(word);
        self.store.score_row(row, evaluation.classes());
        self.store.set_cursor(Cursor { row: row + 1, col: 0 });
        info!("row {row}: {text} {}", evaluation.to_emoji());

        if evaluation.is_exact_match() {
            self.store.mark_solved();
            self.phase = Phase::Won;
            info!("solved in {} guesses", row + 1);
            return KeyOutcome::Won { row, evaluation };
        }

        if row + 1 == self.config.rows {
            self.phase = Phase::Exhausted;
            info!("out of guesses, target was {}", self.config.target);
            return KeyOutcome::Exhausted { evaluation };
        }

        self.phase = Phase::Idle;
        KeyOutcome::Scored { row, evaluation }
    }

    fn check_guess(&self, text: &str) -> Result<Word, Rejection> {
        let word = Word::new(text).map_err(|_| Rejection::NotInDictionary)?;
        if !self.config.dictionary.contains_word(&word) {
            return Err(Rejection::NotInDictionary);
        }
        if self.store.has_guessed(&word) {
            return Err(Rejection::AlreadyGuessed);
        }
        Ok(word)
    }
}

/// A key identifier counts as input only if it is exactly one ASCII letter
fn parse_key(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}
