//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: the puzzle view draws into a
//! plain framebuffer (pure, unit-testable), and the terminal renderer
//! flushes framebuffers to a real terminal with raw mode, the alternate
//! screen, and mouse capture for drag input.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_wordsearch_core as core;
pub use tui_wordsearch_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GridLayout, HudView, PuzzleView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
