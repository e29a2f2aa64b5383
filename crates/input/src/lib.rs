//! Terminal input module (engine-facing).
//!
//! Intentionally independent of any UI framework. It maps `crossterm` key
//! events into [`tui_wordsearch_types::PuzzleAction`] and folds raw mouse
//! events into the drag-start/drag-move/drag-end stream the selection
//! engine consumes.

pub mod map;
pub mod pointer;

pub use tui_wordsearch_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{PointerEvent, PointerPhase, PointerTracker};
