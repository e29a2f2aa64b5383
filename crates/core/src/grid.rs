//! Grid module - the immutable letter matrix a puzzle is played on.
//!
//! Flat `Vec<char>` storage in row-major order. Generated grids are square;
//! pre-baked grids loaded from a catalog may be rectangular but must have
//! equal-length, ASCII-alphabetic rows. Once built, a grid never changes;
//! advancing to the next puzzle replaces it wholesale.

use thiserror::Error;

use tui_wordsearch_types::{Direction, GridPos};

/// Validation failure when building a grid from row strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("grid rows have unequal lengths (row {row} has {len}, expected {expected})")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("grid cell ({row}, {col}) is not an ASCII letter: {ch:?}")]
    InvalidCell { row: usize, col: usize, ch: char },
}

/// Immutable rectangular letter matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of uppercase letters, row-major (row * cols + col).
    cells: Vec<char>,
}

impl Grid {
    /// Build a grid from row strings, validating shape and content.
    ///
    /// Letters are normalized to uppercase.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        if rows.is_empty() || rows[0].as_ref().is_empty() {
            return Err(GridError::Empty);
        }

        let cols = rows[0].as_ref().chars().count();
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != cols {
                return Err(GridError::RaggedRows {
                    row: r,
                    len,
                    expected: cols,
                });
            }
            for (c, ch) in row.chars().enumerate() {
                if !ch.is_ascii_alphabetic() {
                    return Err(GridError::InvalidCell {
                        row: r,
                        col: c,
                        ch,
                    });
                }
                cells.push(ch.to_ascii_uppercase());
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Build a grid from an already-validated flat cell buffer.
    ///
    /// Used by the generator, which guarantees every cell is filled.
    pub(crate) fn from_flat(rows: usize, cols: usize, cells: Vec<char>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, pos: GridPos) -> Option<usize> {
        if pos.row < 0
            || pos.row as usize >= self.rows
            || pos.col < 0
            || pos.col as usize >= self.cols
        {
            return None;
        }
        Some((pos.row as usize) * self.cols + (pos.col as usize))
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        self.index(pos).is_some()
    }

    /// Letter at `pos`, or `None` out of bounds.
    pub fn get(&self, pos: GridPos) -> Option<char> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// The cells of a straight run, or `None` if it leaves the grid.
    pub fn run_cells(&self, start: GridPos, dir: Direction, len: usize) -> Option<Vec<GridPos>> {
        let (dr, dc) = dir.delta();
        let mut cells = Vec::with_capacity(len);
        let mut pos = start;
        for _ in 0..len {
            if !self.in_bounds(pos) {
                return None;
            }
            cells.push(pos);
            pos = GridPos::new(pos.row + dr, pos.col + dc);
        }
        Some(cells)
    }

    /// Join the letters at the given cells into a string.
    ///
    /// Out-of-bounds cells are skipped, matching the defensive fallback of
    /// the selection path computation.
    pub fn letters(&self, cells: &[GridPos]) -> String {
        cells.iter().filter_map(|&pos| self.get(pos)).collect()
    }

    /// Flat row-major view of all cells (for rendering).
    pub fn cells(&self) -> &[char] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_normalizes_uppercase() {
        let grid = Grid::from_rows(&["cat", "dog", "owl"]).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(GridPos::new(0, 0)), Some('C'));
        assert_eq!(grid.get(GridPos::new(2, 2)), Some('L'));
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert_eq!(Grid::from_rows::<&str>(&[]), Err(GridError::Empty));
        assert_eq!(Grid::from_rows(&[""]), Err(GridError::Empty));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(&["ABC", "AB"]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRows {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_non_letters() {
        let err = Grid::from_rows(&["A1C"]).unwrap_err();
        assert!(matches!(err, GridError::InvalidCell { col: 1, .. }));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        assert_eq!(grid.get(GridPos::new(-1, 0)), None);
        assert_eq!(grid.get(GridPos::new(0, 2)), None);
        assert_eq!(grid.get(GridPos::new(2, 0)), None);
    }

    #[test]
    fn test_run_cells_in_bounds() {
        let grid = Grid::from_rows(&["ABC", "DEF", "GHI"]).unwrap();
        let run = grid
            .run_cells(GridPos::new(0, 0), Direction::DownRight, 3)
            .unwrap();
        assert_eq!(
            run,
            vec![GridPos::new(0, 0), GridPos::new(1, 1), GridPos::new(2, 2)]
        );
        assert_eq!(grid.letters(&run), "AEI");
    }

    #[test]
    fn test_run_cells_leaving_grid_is_none() {
        let grid = Grid::from_rows(&["ABC", "DEF", "GHI"]).unwrap();
        assert!(grid.run_cells(GridPos::new(0, 1), Direction::Right, 3).is_none());
        assert!(grid.run_cells(GridPos::new(1, 1), Direction::Up, 3).is_none());
    }
}
