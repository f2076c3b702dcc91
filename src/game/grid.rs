//! Grid state store
//!
//! Owns the rows × cols matrix of cells, the cursor, the list of accepted
//! guesses and the solved flag. Every grid mutation is broadcast to the
//! subscribed observers with the full grid snapshot.

use crate::core::{Feedback, Word};
use std::fmt;

/// One letter slot of the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    letter: Option<char>,
    feedback: Feedback,
}

impl Cell {
    /// A cell with no letter and no feedback
    pub const EMPTY: Self = Self {
        letter: None,
        feedback: Feedback::None,
    };

    /// Typed letter, uppercase
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        self.letter
    }

    /// Feedback class; `Grey` is provisional until the row is scored
    #[must_use]
    pub const fn feedback(self) -> Feedback {
        self.feedback
    }

    /// True when no letter has been typed
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.letter.is_none()
    }
}

/// Fixed-size matrix of cells stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    scored: Vec<bool>,
}

impl Grid {
    /// Create an all-empty grid
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::EMPTY; rows * cols],
            scored: vec![false; rows],
        }
    }

    /// Number of rows (guesses)
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (word length)
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    const fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    const fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cell at `(row, col)`, or `None` when out of bounds
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.in_bounds(row, col).then(|| self.cells[self.idx(row, col)])
    }

    /// All cells of one row
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterate over the rows from top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    /// True once feedback has been applied to the row
    #[must_use]
    pub fn is_row_scored(&self, row: usize) -> bool {
        self.scored.get(row).copied().unwrap_or(false)
    }

    /// True when every cell of the row holds a letter
    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|c| !c.is_empty()))
    }

    /// The letters typed into a row, in order
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.row(row)
            .map(|cells| cells.iter().filter_map(|c| c.letter).collect())
            .unwrap_or_default()
    }

    /// True when no cell holds a letter
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| *c == Cell::EMPTY)
    }

    /// Number of cells
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a grid without cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Row/column insertion point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// Receives the full grid after every change
pub trait GridObserver: Send {
    fn grid_changed(&mut self, grid: &Grid);
}

impl<F> GridObserver for F
where
    F: FnMut(&Grid) + Send,
{
    fn grid_changed(&mut self, grid: &Grid) {
        self(grid);
    }
}

/// Grid plus the session bookkeeping around it
pub struct GridStore {
    grid: Grid,
    cursor: Cursor,
    guessed_words: Vec<Word>,
    solved: bool,
    observers: Vec<Box<dyn GridObserver>>,
}

impl GridStore {
    /// Empty store for a `rows` × `cols` grid
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            cursor: Cursor::default(),
            guessed_words: Vec::new(),
            solved: false,
            observers: Vec::new(),
        }
    }

    /// Current grid snapshot
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Next cell to receive a letter
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub(crate) const fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    /// Accepted guesses of this session, oldest first
    #[must_use]
    pub fn guessed_words(&self) -> &[Word] {
        &self.guessed_words
    }

    /// True if `word` was already accepted this session
    #[must_use]
    pub fn has_guessed(&self, word: &Word) -> bool {
        self.guessed_words.contains(word)
    }

    pub(crate) fn record_guess(&mut self, word: Word) {
        self.guessed_words.push(word);
    }

    /// True once a row matched the target
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    pub(crate) const fn mark_solved(&mut self) {
        self.solved = true;
    }

    /// Register an observer; it is called after every grid mutation
    pub fn subscribe(&mut self, observer: impl GridObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.grid_changed(&self.grid);
        }
    }

    /// Clear every cell, the cursor, the guess list and the solved flag
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.grid.rows, self.grid.cols);
        self.cursor = Cursor::default();
        self.guessed_words.clear();
        self.solved = false;
        self.notify();
    }

    /// Write a letter with provisional grey feedback
    ///
    /// Returns false (and changes nothing) when out of bounds or the row is
    /// already scored.
    pub fn set_cell(&mut self, row: usize, col: usize, letter: char) -> bool {
        if !self.grid.in_bounds(row, col) || self.grid.is_row_scored(row) {
            return false;
        }
        let idx = self.grid.idx(row, col);
        self.grid.cells[idx] = Cell {
            letter: Some(letter.to_ascii_uppercase()),
            feedback: Feedback::Grey,
        };
        self.notify();
        true
    }

    /// Empty every cell of an unscored row
    pub fn clear_row(&mut self, row: usize) -> bool {
        if row >= self.grid.rows || self.grid.is_row_scored(row) {
            return false;
        }
        let cols = self.grid.cols;
        self.grid.cells[row * cols..(row + 1) * cols].fill(Cell::EMPTY);
        self.notify();
        true
    }

    /// Apply final feedback to a full row; the row is immutable afterwards
    ///
    /// Returns false when the row is out of bounds, not full, already scored,
    /// or `classes` does not cover exactly one row.
    pub fn score_row(&mut self, row: usize, classes: &[Feedback]) -> bool {
        if !self.grid.is_row_full(row)
            || self.grid.is_row_scored(row)
            || classes.len() != self.grid.cols
        {
            return false;
        }
        let cols = self.grid.cols;
        for (cell, &class) in self.grid.cells[row * cols..(row + 1) * cols]
            .iter_mut()
            .zip(classes)
        {
            cell.feedback = class;
        }
        self.grid.scored[row] = true;
        self.notify();
        true
    }
}

impl fmt::Debug for GridStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridStore")
            .field("grid", &self.grid)
            .field("cursor", &self.cursor)
            .field("guessed_words", &self.guessed_words)
            .field("solved", &self.solved)
            .field("observers", &self.observers.len())
            .finish()
    }
}
