//! Core puzzle logic - pure, deterministic, and testable.
//!
//! This crate contains the two components with real algorithmic substance:
//! grid generation and the drag-selection engine. It has **zero
//! dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the same seed and word list produce the same grid
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: immutable letter matrix with straight-run helpers
//! - [`generator`]: random word placement with a bounded attempt budget
//! - [`finder`]: 8-directional word scan used by hints and validation
//! - [`selection`]: the drag-to-select session state machine
//! - [`snapshot`]: read-only render projection of a session
//! - [`rng`]: seeded LCG random source
//!
//! # Example
//!
//! ```
//! use tui_wordsearch_core::{GridGenerator, SelectionEngine};
//! use tui_wordsearch_types::PointerOffset;
//!
//! let words = vec!["RUST".to_string(), "GRID".to_string()];
//! let generated = GridGenerator::new(12345).generate(&words).unwrap();
//! let mut session = SelectionEngine::new(generated.grid, &words);
//!
//! // Drive a drag in grid-local units (here one cell is 16.0 wide).
//! session.on_drag_start(PointerOffset::new(8.0, 8.0), 16.0);
//! session.on_drag(PointerOffset::new(56.0, 8.0));
//! let events = session.on_drag_end();
//! assert!(events.len() <= 2);
//! ```

pub mod finder;
pub mod generator;
pub mod grid;
pub mod rng;
pub mod selection;
pub mod snapshot;

pub use tui_wordsearch_types as types;

// Re-export commonly used types for convenience
pub use finder::{find_word, WordHit};
pub use generator::{GenerateError, GeneratedGrid, GridGenerator, Placement};
pub use grid::{Grid, GridError};
pub use rng::SimpleRng;
pub use selection::{
    cell_run, classify_axis, constrain_to_axis, pointer_to_cell, SelectionEngine, SelectionEvent,
};
pub use snapshot::{PuzzleSnapshot, WordView};
