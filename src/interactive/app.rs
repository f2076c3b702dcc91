//! TUI application state and logic

use crate::game::{GameController, Grid, KeyOutcome, Phase};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Application state
pub struct App {
    pub game: GameController,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    grid_dirty: Arc<AtomicBool>,
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

/// Session results across games
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is "solved in 1"
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Empty statistics for a game with `rows` guesses
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; rows],
        }
    }

    /// Count a win taking `guesses` guesses
    pub fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        if let Some(slot) = guesses
            .checked_sub(1)
            .and_then(|i| self.guess_distribution.get_mut(i))
        {
            *slot += 1;
        }
    }

    /// Count a game that ran out of guesses
    pub const fn record_loss(&mut self) {
        self.total_games += 1;
    }

    /// Percentage of games won

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    /// Wrap a game and subscribe to its grid changes
    #[must_use]
    pub fn new(mut game: GameController) -> Self {
        let grid_dirty = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&grid_dirty);
        game.subscribe(move |_: &Grid| flag.store(true, Ordering::Release));

        let cols = game.config().cols;
        let rows = game.config().rows;
        Self {
            game,
            messages: vec![
                Message {
                    text: format!("Guess the {cols}-letter word. Just start typing."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Words outside the word list are cleared for another try.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::new(rows),
            should_quit: false,
            grid_dirty,
        }
    }

    /// True if the grid changed since the last call
    pub fn take_grid_changed(&self) -> bool {
        self.grid_dirty.swap(false, Ordering::AcqRel)
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

    /// The reset button
    pub fn new_game(&mut self) {
        self.game.reset();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Handle a terminal key press
    ///
    /// Returns true if anything outside the grid (messages, stats, quit flag)
    /// changed and the screen needs a redraw.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('r') if ctrl => {
                self.new_game();
                true
            }
            KeyCode::Tab => {
                self.new_game();
                true
            }
            code => match key_identifier(code) {
                Some(id) => {
                    let outcome = self.game.handle_key(&id);
                    self.apply_outcome(&outcome)
                }
                None => false,
            },
        }
    }

    fn apply_outcome(&mut self, outcome: &KeyOutcome) -> bool {
        match outcome {
            KeyOutcome::Ignored | KeyOutcome::Placed { .. } => false,
            KeyOutcome::Rejected { word, reason, .. } => {
                self.add_message(&format!("{word}: {reason}"), MessageStyle::Error);
                true
            }
            KeyOutcome::Scored { row, .. } => {
                let left = self.game.config().rows - row - 1;
                self.add_message(
                    &format!("{left} {} left", if left == 1 { "guess" } else { "guesses" }),
                    MessageStyle::Info,
                );
                true
            }
            KeyOutcome::Won { row, .. } => {
                let guess_count = row + 1;
                self.stats.record_win(guess_count);

                let celebration = match guess_count {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    6 => "😅 PHEW! Got it in six! 😅",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press TAB for a new game or ESC to quit.", MessageStyle::Info);
                true
            }
            KeyOutcome::Exhausted { .. } => {
                self.stats.record_loss();
                let target = self.game.config().target.text().to_string();
                self.add_message(
                    &format!("Out of guesses! The word was {target}."),
                    MessageStyle::Error,
                );
                self.add_message("Press TAB for a new game or ESC to quit.", MessageStyle::Info);
                true
            }
        }
    }

    #[must_use]
    pub fn status_text(&self) -> &'static str {
        match self.game.phase() {
            Phase::Idle | Phase::RowSubmitted(_) => "Playing",
            Phase::Won => "Solved",
            Phase::Exhausted => "Game over",
        }
    }
}

/// Raw key identifier handed to the controller, in browser `KeyboardEvent.key` style
fn key_identifier(code: KeyCode) -> Option<String> {
    let id = match code {
        KeyCode::Char(c) => return Some(c.to_string()),
        KeyCode::Enter => "Enter",
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        _ => return None,
    };
    Some(id.to_string())
}

/// Run the TUI application
///
/// The terminal is restored before any error from the event loop is returned.
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
    let mut redraw = true;

    loop {
        if redraw | app.take_grid_changed() {
            terminal.draw(|f| super::rendering::ui(f, &app))?;
        }

        redraw = match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key_event(key),
            Event::Resize(width, height) => {
                debug!("terminal resized to {width}x{height}");
                true
            }
            _ => false,
        };

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    fn app() -> App {
        App::new(GameController::new(GameConfig::reference()).unwrap())
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_word(app: &mut App, word: &str) {
        for ch in word.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn grid_changes_raise_dirty_flag() {
        let app = app();
        assert!(app.take_grid_changed()); // initial draw
        assert!(!app.take_grid_changed());

        let mut app = app;
        assert!(!press(&mut app, KeyCode::Char('g')));
        assert!(app.take_grid_changed());
        assert!(!press(&mut app, KeyCode::Enter));
        assert!(!app.take_grid_changed());
    }

    #[test]
    fn rejected_word_posts_error() {
        let mut app = app();
        type_word(&mut app, "zzzzz");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "ZZZZZ: not in word list");
    }

    #[test]
    fn win_updates_statistics() {
        let mut app = app();
        type_word(&mut app, "round");
        type_word(&mut app, "grind");
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution, vec![0, 1, 0, 0, 0, 0]);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
        assert_eq!(app.status_text(), "Solved");
    }

    #[test]
    fn distribution_covers_every_row() {
        let config = GameConfig::reference().with_rows(8);
        let mut app = App::new(GameController::new(config).unwrap());
        assert_eq!(app.stats.guess_distribution.len(), 8);

        for word in ["round", "hocus", "argue", "swill", "bound", "tasty", "plant", "grind"] {
            type_word(&mut app, word);
        }
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[7], 1);
        assert_eq!(app.stats.guess_distribution.iter().sum::<usize>(), 1);
    }

    #[test]
    fn statistics_ignore_out_of_range_wins() {
        let mut stats = Statistics::new(3);
        stats.record_win(0);
        stats.record_win(4);
        stats.record_win(3);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.guess_distribution, vec![0, 0, 1]);
        stats.record_loss();
        assert_eq!(stats.total_games, 4);
    }

    #[test]
    fn exhausting_counts_a_loss() {
        let mut app = app();
        for word in ["round", "hocus", "argue", "swill", "bound", "tasty"] {
            type_word(&mut app, word);
        }
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.status_text(), "Game over");
        assert!(app.messages.iter().any(|m| m.text.contains("GRIND")));
    }

    #[test]
    fn tab_and_ctrl_r_reset() {
        let mut app = app();
        type_word(&mut app, "gri");
        assert!(press(&mut app, KeyCode::Tab));
        assert!(app.game.grid().is_blank());

        type_word(&mut app, "gr");
        app.handle_key_event(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert!(app.game.grid().is_blank());
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }

    #[test]
    fn key_identifiers() {
        assert_eq!(key_identifier(KeyCode::Char('a')).as_deref(), Some("a"));
        assert_eq!(key_identifier(KeyCode::Enter).as_deref(), Some("Enter"));
        assert_eq!(key_identifier(KeyCode::F(1)), None);
    }
}
