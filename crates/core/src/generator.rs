//! Generator module - places target words into a fresh letter grid.
//!
//! For each word independently: sample a random start cell and direction,
//! accept the placement if the full run stays in bounds and only crosses
//! blank cells or cells already holding the required letter, and retry up
//! to a fixed budget. Remaining blanks are filled with random letters.
//!
//! The attempt budget is a hard bound: a word that cannot be placed surfaces
//! as an error instead of looping forever or being silently dropped.

use thiserror::Error;

use tui_wordsearch_types::{Direction, GridPos, MIN_GRID_SIZE, PLACEMENT_ATTEMPTS};

use crate::grid::Grid;
use crate::rng::SimpleRng;

/// Grid generation failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("word list is empty")]
    EmptyWordList,
    #[error("word {word:?} is not a plain ASCII-alphabetic word")]
    InvalidWord { word: String },
    #[error("could not place word {word:?} after {attempts} attempts")]
    Unplaceable { word: String, attempts: u32 },
}

/// Where a word ended up in the generated grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub start: GridPos,
    pub direction: Direction,
}

/// A freshly generated grid together with the recorded word placements.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedGrid {
    pub grid: Grid,
    pub placements: Vec<Placement>,
}

/// Word-search grid generator with an owned, seeded random source.
#[derive(Debug, Clone)]
pub struct GridGenerator {
    rng: SimpleRng,
}

impl GridGenerator {
    /// Create a generator with the given RNG seed.
    ///
    /// The same seed and word list produce an identical grid.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Generate a square grid containing every word in `words`.
    ///
    /// The side length is the longest word's length, with a floor of
    /// [`MIN_GRID_SIZE`]. Words are normalized to uppercase before
    /// placement; original casing is not preserved in the grid.
    pub fn generate(&mut self, words: &[String]) -> Result<GeneratedGrid, GenerateError> {
        if words.is_empty() {
            return Err(GenerateError::EmptyWordList);
        }

        let mut normalized = Vec::with_capacity(words.len());
        for word in words {
            if word.is_empty() || !word.chars().all(|ch| ch.is_ascii_alphabetic()) {
                return Err(GenerateError::InvalidWord { word: word.clone() });
            }
            normalized.push(word.to_ascii_uppercase());
        }

        let longest = normalized.iter().map(|w| w.len()).max().unwrap_or(0);
        let size = longest.max(MIN_GRID_SIZE);

        let mut cells: Vec<Option<char>> = vec![None; size * size];
        let mut placements = Vec::with_capacity(normalized.len());

        for word in &normalized {
            let placement = self.place_word(&mut cells, size, word)?;
            log::debug!(
                "placed {:?} at ({}, {}) going {:?}",
                word,
                placement.start.row,
                placement.start.col,
                placement.direction
            );
            placements.push(placement);
        }

        // Fill the remainder with noise letters.
        let filled: Vec<char> = cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| self.rng.letter()))
            .collect();

        Ok(GeneratedGrid {
            grid: Grid::from_flat(size, size, filled),
            placements,
        })
    }

    /// Try to place one word, retrying up to the attempt budget.
    fn place_word(
        &mut self,
        cells: &mut [Option<char>],
        size: usize,
        word: &str,
    ) -> Result<Placement, GenerateError> {
        let letters: Vec<char> = word.chars().collect();

        for _ in 0..PLACEMENT_ATTEMPTS {
            let start = GridPos::new(
                self.rng.next_range(size as u32) as i16,
                self.rng.next_range(size as u32) as i16,
            );
            let direction = Direction::ALL[self.rng.next_range(8) as usize];

            if let Some(indices) = Self::fit(cells, size, &letters, start, direction) {
                for (&idx, &ch) in indices.iter().zip(letters.iter()) {
                    cells[idx] = Some(ch);
                }
                return Ok(Placement {
                    word: word.to_string(),
                    start,
                    direction,
                });
            }
        }

        Err(GenerateError::Unplaceable {
            word: word.to_string(),
            attempts: PLACEMENT_ATTEMPTS,
        })
    }

    /// Check one candidate run: in bounds, and every cell blank or already
    /// holding the letter the word needs there (compatible crossings).
    fn fit(
        cells: &[Option<char>],
        size: usize,
        letters: &[char],
        start: GridPos,
        direction: Direction,
    ) -> Option<Vec<usize>> {
        let (dr, dc) = direction.delta();
        let mut indices = Vec::with_capacity(letters.len());
        let mut pos = start;

        for &ch in letters {
            if pos.row < 0 || pos.row as usize >= size || pos.col < 0 || pos.col as usize >= size {
                return None;
            }
            let idx = (pos.row as usize) * size + (pos.col as usize);
            match cells[idx] {
                None => {}
                Some(existing) if existing == ch => {}
                Some(_) => return None,
            }
            indices.push(idx);
            pos = GridPos::new(pos.row + dr, pos.col + dc);
        }

        Some(indices)
    }
}
