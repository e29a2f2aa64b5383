//! Puzzle catalog loading and validation.
//!
//! Puzzles ship as a bundled JSON document with camelCase keys. Two shapes
//! are supported:
//!
//! ```json
//! { "id": "animals-1", "grid": ["CATXX", "..."], "wordsToFind": ["CAT"] }
//! { "id": "cities", "parts": [{ "partId": 1, "words": ["OSLO", "LIMA"] }] }
//! ```
//!
//! A pre-baked puzzle carries its own grid; a multi-part puzzle carries only
//! word lists and the core generates a grid per part. Malformed input is a
//! load-time error - the catalog never produces a degenerate empty puzzle,
//! and a pre-baked grid must actually contain every word it lists.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use tui_wordsearch_core::{find_word, Grid, GridError};

/// Catalog loading or validation failure.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("failed to read puzzle file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog contains no puzzles")]
    EmptyCatalog,
    #[error("duplicate puzzle id {id:?}")]
    DuplicateId { id: String },
    #[error("puzzle {id:?} has neither a grid with words nor parts")]
    MissingBody { id: String },
    #[error("puzzle {id:?} has an empty word list")]
    EmptyWordList { id: String },
    #[error("puzzle {id:?} has an invalid grid: {source}")]
    BadGrid {
        id: String,
        #[source]
        source: GridError,
    },
    #[error("puzzle {id:?} lists word {word:?} which is not in its grid")]
    WordNotInGrid { id: String, word: String },
}

/// Raw JSON shape of one puzzle entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PuzzleDef {
    id: String,
    #[serde(default)]
    grid: Option<Vec<String>>,
    #[serde(default)]
    words_to_find: Option<Vec<String>>,
    #[serde(default)]
    parts: Option<Vec<PartDef>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PartDef {
    part_id: u32,
    words: Vec<String>,
    #[serde(default)]
    is_completed: bool,
}

/// One word-list part of a multi-part puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzlePart {
    pub part_id: u32,
    pub words: Vec<String>,
    /// Completion flag as shipped in the asset; runtime progress lives in
    /// the progress store.
    pub is_completed: bool,
}

/// A validated puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    pub id: String,
    pub kind: PuzzleKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PuzzleKind {
    /// Ships with a ready-made grid and its word list.
    Prebaked { grid: Grid, words: Vec<String> },
    /// Ships word lists only; a grid is generated per part.
    Parts(Vec<PuzzlePart>),
}

impl Puzzle {
    /// Number of parts (1 for pre-baked puzzles).
    pub fn total_parts(&self) -> u32 {
        match &self.kind {
            PuzzleKind::Prebaked { .. } => 1,
            PuzzleKind::Parts(parts) => parts.len() as u32,
        }
    }
}

/// The full validated puzzle catalog, in asset order.
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleCatalog {
    puzzles: Vec<Puzzle>,
}

impl PuzzleCatalog {
    /// Parse and validate a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, PuzzleError> {
        let defs: Vec<PuzzleDef> = serde_json::from_str(json)?;
        if defs.is_empty() {
            return Err(PuzzleError::EmptyCatalog);
        }

        let mut puzzles = Vec::with_capacity(defs.len());
        for def in defs {
            let puzzle = validate(def)?;
            if puzzles.iter().any(|p: &Puzzle| p.id == puzzle.id) {
                return Err(PuzzleError::DuplicateId { id: puzzle.id });
            }
            puzzles.push(puzzle);
        }

        log::debug!("loaded {} puzzles", puzzles.len());
        Ok(Self { puzzles })
    }

    /// Parse and validate a catalog from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Puzzle> {
        self.puzzles.iter().find(|p| p.id == id)
    }
}

fn validate(def: PuzzleDef) -> Result<Puzzle, PuzzleError> {
    let id = def.id;

    match (def.grid, def.words_to_find, def.parts) {
        (Some(rows), Some(words), None) => {
            if words.is_empty() {
                return Err(PuzzleError::EmptyWordList { id });
            }
            let grid = Grid::from_rows(&rows).map_err(|source| PuzzleError::BadGrid {
                id: id.clone(),
                source,
            })?;
            for word in &words {
                if find_word(&grid, word).is_none() {
                    return Err(PuzzleError::WordNotInGrid {
                        id,
                        word: word.clone(),
                    });
                }
            }
            Ok(Puzzle {
                id,
                kind: PuzzleKind::Prebaked { grid, words },
            })
        }
        (None, None, Some(parts)) => {
            if parts.is_empty() {
                return Err(PuzzleError::EmptyWordList { id });
            }
            for part in &parts {
                if part.words.is_empty() {
                    return Err(PuzzleError::EmptyWordList { id });
                }
            }
            Ok(Puzzle {
                id,
                kind: PuzzleKind::Parts(
                    parts
                        .into_iter()
                        .map(|p| PuzzlePart {
                            part_id: p.part_id,
                            words: p.words,
                            is_completed: p.is_completed,
                        })
                        .collect(),
                ),
            })
        }
        _ => Err(PuzzleError::MissingBody { id }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prebaked_puzzle() {
        let json = r#"[
            {
                "id": "animals-1",
                "grid": ["CATZZ", "ZZZZO", "ZZZGZ", "ZZZZZ", "DZZZZ"],
                "wordsToFind": ["CAT"]
            }
        ]"#;
        let catalog = PuzzleCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        let puzzle = catalog.get("animals-1").unwrap();
        assert_eq!(puzzle.total_parts(), 1);
        assert!(matches!(&puzzle.kind, PuzzleKind::Prebaked { words, .. } if words == &["CAT"]));
    }

    #[test]
    fn test_parse_multi_part_puzzle() {
        let json = r#"[
            {
                "id": "cities",
                "parts": [
                    { "partId": 1, "words": ["OSLO", "LIMA"] },
                    { "partId": 2, "words": ["CAIRO"], "isCompleted": true }
                ]
            }
        ]"#;
        let catalog = PuzzleCatalog::from_json_str(json).unwrap();
        let puzzle = catalog.get("cities").unwrap();
        assert_eq!(puzzle.total_parts(), 2);
        let PuzzleKind::Parts(parts) = &puzzle.kind else {
            panic!("expected parts");
        };
        assert_eq!(parts[0].part_id, 1);
        assert!(!parts[0].is_completed);
        assert!(parts[1].is_completed);
    }

    #[test]
    fn test_empty_catalog_is_error() {
        assert!(matches!(
            PuzzleCatalog::from_json_str("[]"),
            Err(PuzzleError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_missing_body_is_error() {
        let json = r#"[{ "id": "broken" }]"#;
        assert!(matches!(
            PuzzleCatalog::from_json_str(json),
            Err(PuzzleError::MissingBody { .. })
        ));
    }

    #[test]
    fn test_empty_word_list_is_error() {
        let json = r#"[{ "id": "empty", "grid": ["AB", "CD"], "wordsToFind": [] }]"#;
        assert!(matches!(
            PuzzleCatalog::from_json_str(json),
            Err(PuzzleError::EmptyWordList { .. })
        ));
    }

    #[test]
    fn test_word_not_in_grid_is_error() {
        let json = r#"[{ "id": "lying", "grid": ["AB", "CD"], "wordsToFind": ["DOG"] }]"#;
        assert!(matches!(
            PuzzleCatalog::from_json_str(json),
            Err(PuzzleError::WordNotInGrid { word, .. }) if word == "DOG"
        ));
    }

    #[test]
    fn test_ragged_grid_is_error() {
        let json = r#"[{ "id": "ragged", "grid": ["ABC", "DE"], "wordsToFind": ["AB"] }]"#;
        assert!(matches!(
            PuzzleCatalog::from_json_str(json),
            Err(PuzzleError::BadGrid { .. })
        ));
    }

    #[test]
    fn test_duplicate_id_is_error() {
        let json = r#"[
            { "id": "x", "parts": [{ "partId": 1, "words": ["CAT"] }] },
            { "id": "x", "parts": [{ "partId": 1, "words": ["DOG"] }] }
        ]"#;
        assert!(matches!(
            PuzzleCatalog::from_json_str(json),
            Err(PuzzleError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_empty_parts_list_is_error() {
        let json = r#"[{ "id": "hollow", "parts": [] }]"#;
        assert!(matches!(
            PuzzleCatalog::from_json_str(json),
            Err(PuzzleError::EmptyWordList { .. })
        ));
    }
}
