//! Read-only render projection of a selection session.
//!
//! The view layer consumes this instead of reaching into the engine.
//! Callers keep one snapshot alive and refresh it each frame via
//! [`SelectionEngine::snapshot_into`](crate::selection::SelectionEngine::snapshot_into)
//! so the per-frame path does not reallocate.

use tui_wordsearch_types::{FoundWord, GridPos, SelectionColor, SELECTION_PALETTE};

/// A target word as the view sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordView {
    pub text: String,
    pub found: bool,
}

/// Everything the view needs to draw one frame of a puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Flat row-major grid letters.
    pub letters: Vec<char>,
    pub words: Vec<WordView>,
    pub found_words: Vec<FoundWord>,
    /// Cells covered by the active drag (empty when idle).
    pub selected: Vec<GridPos>,
    /// Stroke color of the active (or next) drag.
    pub selection_color: SelectionColor,
    pub hint_cells: Vec<GridPos>,
    pub completed: bool,
}

impl PuzzleSnapshot {
    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.letters.clear();
        self.words.clear();
        self.found_words.clear();
        self.selected.clear();
        self.selection_color = SELECTION_PALETTE[0];
        self.hint_cells.clear();
        self.completed = false;
    }

    /// Letter at (row, col), if the snapshot holds one.
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.letters.get(row * self.cols + col).copied()
    }

    /// Count of found words (for progress display).
    pub fn found_count(&self) -> usize {
        self.words.iter().filter(|w| w.found).count()
    }
}

impl Default for PuzzleSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            letters: Vec::new(),
            words: Vec::new(),
            found_words: Vec::new(),
            selected: Vec::new(),
            selection_color: SELECTION_PALETTE[0],
            hint_cells: Vec::new(),
            completed: false,
        }
    }
}
