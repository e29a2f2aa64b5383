//! Selection module - the drag-to-select session state machine.
//!
//! Converts a stream of pointer events (start, move, end) into a
//! direction-constrained run of grid cells, matches completed drags against
//! the unfound target words (forwards or reversed), and tracks found-word,
//! hint, and completion state for one puzzle.
//!
//! The engine owns the grid and word list for the session; loading the next
//! puzzle or part replaces the whole engine. Out-of-order events (a move or
//! end with no active drag) are no-ops.

use std::collections::HashSet;

use arrayvec::ArrayVec;

use tui_wordsearch_types::{
    DragAxis, FoundWord, GridPos, PointerOffset, SelectionColor, Word, SELECTION_PALETTE,
};

use crate::finder::find_word;
use crate::grid::Grid;
use crate::snapshot::{PuzzleSnapshot, WordView};

/// Classify a drag by its raw pointer deltas.
///
/// A drag counts as horizontal (or vertical) only when the cross-axis
/// movement is less than half the main-axis movement; everything else is
/// diagonal. Symmetric in argument order since only magnitudes matter.
pub fn classify_axis(dx: f32, dy: f32) -> DragAxis {
    let ax = dx.abs();
    let ay = dy.abs();
    if ay < ax / 2.0 {
        DragAxis::Horizontal
    } else if ax < ay / 2.0 {
        DragAxis::Vertical
    } else {
        DragAxis::Diagonal
    }
}

/// Snap a raw end point onto the classified axis through `start`.
///
/// Horizontal pins y; vertical pins x; diagonal moves `min(|dx|, |dy|)`
/// along the sign of each axis so the line is an exact 45 degrees. The
/// result is bounded to the grid extents, inset by half a stroke width so
/// the drawn line stays inside the outermost cells.
pub fn constrain_to_axis(
    start: PointerOffset,
    end: PointerOffset,
    axis: DragAxis,
    cell_size: f32,
    rows: usize,
    cols: usize,
) -> PointerOffset {
    let half_stroke = cell_size / 2.0;
    let max_x = cell_size * cols as f32 - half_stroke;
    let max_y = cell_size * rows as f32 - half_stroke;

    match axis {
        DragAxis::Horizontal => PointerOffset::new(end.x.clamp(half_stroke, max_x), start.y),
        DragAxis::Vertical => PointerOffset::new(start.x, end.y.clamp(half_stroke, max_y)),
        DragAxis::Diagonal => {
            let dx = end.x - start.x;
            let dy = end.y - start.y;
            let distance = dx.abs().min(dy.abs());
            let x = start.x + distance * dx.signum();
            let y = start.y + distance * dy.signum();
            PointerOffset::new(x.clamp(half_stroke, max_x), y.clamp(half_stroke, max_y))
        }
    }
}

/// Map a pointer coordinate to a grid cell, clamped to bounds.
pub fn pointer_to_cell(p: PointerOffset, cell_size: f32, rows: usize, cols: usize) -> GridPos {
    let cell_size = cell_size.max(f32::EPSILON);
    let row = (p.y / cell_size).floor() as i32;
    let col = (p.x / cell_size).floor() as i32;
    GridPos::new(
        row.min(rows as i32 - 1).max(0) as i16,
        col.min(cols as i32 - 1).max(0) as i16,
    )
}

/// All cells on the straight run between two coordinates, inclusive and
/// ordered start to end.
///
/// Endpoints that are neither colinear nor on an exact diagonal fall back
/// to the start cell alone, so a malformed selection can never match a
/// word. Results are filtered to grid bounds.
pub fn cell_run(start: GridPos, end: GridPos, rows: usize, cols: usize) -> Vec<GridPos> {
    let dr = (end.row - start.row) as i32;
    let dc = (end.col - start.col) as i32;

    let cells: Vec<GridPos> = if dr == 0 && dc == 0 {
        vec![start]
    } else if dr == 0 || dc == 0 || dr.abs() == dc.abs() {
        let steps = dr.abs().max(dc.abs());
        let sr = dr.signum() as i16;
        let sc = dc.signum() as i16;
        (0..=steps as i16)
            .map(|i| GridPos::new(start.row + i * sr, start.col + i * sc))
            .collect()
    } else {
        vec![start]
    };

    cells
        .into_iter()
        .filter(|p| {
            p.row >= 0 && (p.row as usize) < rows && p.col >= 0 && (p.col as usize) < cols
        })
        .collect()
}

/// Live state of an in-progress drag. Exists only between drag-start and
/// drag-end/cancel.
#[derive(Debug, Clone)]
struct DragState {
    start_pointer: PointerOffset,
    start_cell: GridPos,
    pointer: PointerOffset,
    cell_size: f32,
    cells: Vec<GridPos>,
    color: SelectionColor,
}

/// Events emitted by a completed drag.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    WordFound {
        text: String,
        color: SelectionColor,
    },
    PuzzleCompleted,
}

/// Per-puzzle selection session: grid, word list, found/hint/completion
/// state, and the active drag.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    grid: Grid,
    words: Vec<Word>,
    found_words: Vec<FoundWord>,
    drag: Option<DragState>,
    color_cursor: usize,
    hinted: HashSet<usize>,
    hint_cells: Vec<GridPos>,
    completed: bool,
}

impl SelectionEngine {
    /// Create a session over a grid and its target words.
    pub fn new(grid: Grid, words: &[String]) -> Self {
        Self {
            grid,
            words: words.iter().map(Word::new).collect(),
            found_words: Vec::new(),
            drag: None,
            color_cursor: 0,
            hinted: HashSet::new(),
            hint_cells: Vec::new(),
            completed: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn found_words(&self) -> &[FoundWord] {
        &self.found_words
    }

    pub fn hint_cells(&self) -> &[GridPos] {
        &self.hint_cells
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Cells covered by the active drag (empty when idle).
    pub fn selected_cells(&self) -> &[GridPos] {
        self.drag.as_ref().map(|d| d.cells.as_slice()).unwrap_or(&[])
    }

    /// Raw pointer position of the active drag.
    pub fn drag_pointer(&self) -> Option<PointerOffset> {
        self.drag.as_ref().map(|d| d.pointer)
    }

    /// Stroke color of the active drag, or the color the next drag gets.
    pub fn current_color(&self) -> SelectionColor {
        match &self.drag {
            Some(drag) => drag.color,
            None => SELECTION_PALETTE[self.color_cursor % SELECTION_PALETTE.len()],
        }
    }

    /// Begin a drag at a pointer position.
    ///
    /// `cell_size_px` is the side length of one grid cell in the pointer's
    /// coordinate unit. A drag already in progress is restarted.
    pub fn on_drag_start(&mut self, pointer: PointerOffset, cell_size_px: f32) {
        let cell = pointer_to_cell(pointer, cell_size_px, self.grid.rows(), self.grid.cols());
        self.drag = Some(DragState {
            start_pointer: pointer,
            start_cell: cell,
            pointer,
            cell_size: cell_size_px,
            cells: vec![cell],
            color: SELECTION_PALETTE[self.color_cursor % SELECTION_PALETTE.len()],
        });
    }

    /// Update the active drag with a new pointer position.
    ///
    /// Recomputes the constrained straight run from the start cell. No-op
    /// when no drag is active.
    pub fn on_drag(&mut self, pointer: PointerOffset) {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        let Some(drag) = &mut self.drag else {
            return;
        };

        let dx = pointer.x - drag.start_pointer.x;
        let dy = pointer.y - drag.start_pointer.y;
        let axis = classify_axis(dx, dy);
        let constrained =
            constrain_to_axis(drag.start_pointer, pointer, axis, drag.cell_size, rows, cols);
        let end_cell = pointer_to_cell(constrained, drag.cell_size, rows, cols);

        drag.pointer = pointer;
        drag.cells = cell_run(drag.start_cell, end_cell, rows, cols);
    }

    /// Finish the active drag and match it against the unfound words.
    ///
    /// The selected letters are compared case-insensitively against each
    /// unfound word's text and its reversal; at most one word matches per
    /// drag. Drag state is cleared unconditionally.
    pub fn on_drag_end(&mut self) -> ArrayVec<SelectionEvent, 2> {
        let mut events = ArrayVec::new();
        let Some(drag) = self.drag.take() else {
            return events;
        };

        let candidate = self.grid.letters(&drag.cells);
        let reversed: String = candidate.chars().rev().collect();

        for word in &mut self.words {
            if word.found {
                continue;
            }
            if word.text.eq_ignore_ascii_case(&candidate)
                || word.text.eq_ignore_ascii_case(&reversed)
            {
                word.found = true;
                self.found_words.push(FoundWord {
                    text: word.text.clone(),
                    color: drag.color,
                    cells: drag.cells.clone(),
                });
                self.color_cursor = self.color_cursor.wrapping_add(1);
                events.push(SelectionEvent::WordFound {
                    text: word.text.clone(),
                    color: drag.color,
                });
                break;
            }
        }

        if !self.completed && !self.words.is_empty() && self.words.iter().all(|w| w.found) {
            self.completed = true;
            events.push(SelectionEvent::PuzzleCompleted);
        }

        events
    }

    /// Abandon the active drag with no side effects.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Reveal the starting cell of the first word that is neither found nor
    /// already hinted. Returns `None` once nothing is left to reveal.
    pub fn hint(&mut self) -> Option<GridPos> {
        for (idx, word) in self.words.iter().enumerate() {
            if word.found || self.hinted.contains(&idx) {
                continue;
            }
            match find_word(&self.grid, &word.text) {
                Some(hit) => {
                    self.hinted.insert(idx);
                    self.hint_cells.push(hit.start);
                    return Some(hit.start);
                }
                None => {
                    // Only possible with a pre-baked grid that lied about
                    // its word list; validation should have caught it.
                    log::warn!("hint target {:?} not present in grid", word.text);
                }
            }
        }
        None
    }

    /// Clear all transient puzzle state: found words, hints, drag, and the
    /// completion latch. Grid and word texts are untouched.
    pub fn reset(&mut self) {
        for word in &mut self.words {
            word.found = false;
        }
        self.found_words.clear();
        self.drag = None;
        self.color_cursor = 0;
        self.hinted.clear();
        self.hint_cells.clear();
        self.completed = false;
    }

    /// Write the render projection into an existing snapshot, reusing its
    /// allocations.
    pub fn snapshot_into(&self, out: &mut PuzzleSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.letters.clear();
        out.letters.extend_from_slice(self.grid.cells());

        out.words.clear();
        out.words.extend(self.words.iter().map(|w| WordView {
            text: w.text.clone(),
            found: w.found,
        }));

        out.found_words.clear();
        out.found_words.extend_from_slice(&self.found_words);

        out.selected.clear();
        out.selected.extend_from_slice(self.selected_cells());
        out.selection_color = self.current_color();

        out.hint_cells.clear();
        out.hint_cells.extend_from_slice(&self.hint_cells);

        out.completed = self.completed;
    }

    /// Convenience helper that allocates a fresh snapshot.
    pub fn snapshot(&self) -> PuzzleSnapshot {
        let mut snap = PuzzleSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
