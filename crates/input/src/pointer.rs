//! Pointer tracking for mouse-driven drags.
//!
//! Folds crossterm's mouse event stream into the three-phase drag protocol
//! the selection engine consumes. Terminals deliver `Moved` events with no
//! button held and can drop or reorder events; the tracker tolerates both
//! by only emitting `Move`/`Up` while a left press is actually being
//! tracked.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Phase of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// A drag event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub col: u16,
    pub row: u16,
}

/// Tracks the left-button press state across mouse events.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    pressed: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Fold one mouse event; returns a drag event when one is due.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<PointerEvent> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = true;
                Some(PointerEvent {
                    phase: PointerPhase::Down,
                    col: event.column,
                    row: event.row,
                })
            }
            MouseEventKind::Drag(MouseButton::Left) if self.pressed => Some(PointerEvent {
                phase: PointerPhase::Move,
                col: event.column,
                row: event.row,
            }),
            MouseEventKind::Up(MouseButton::Left) if self.pressed => {
                self.pressed = false;
                Some(PointerEvent {
                    phase: PointerPhase::Up,
                    col: event.column,
                    row: event.row,
                })
            }
            _ => None,
        }
    }

    /// Abandon a tracked press (e.g. on focus loss); the caller should also
    /// cancel any in-flight drag in the engine.
    pub fn cancel(&mut self) {
        self.pressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_press_drag_release_sequence() {
        let mut tracker = PointerTracker::new();

        let down = tracker
            .handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 4, 2))
            .unwrap();
        assert_eq!(down.phase, PointerPhase::Down);
        assert!(tracker.is_pressed());

        let moved = tracker
            .handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 6, 2))
            .unwrap();
        assert_eq!(moved.phase, PointerPhase::Move);
        assert_eq!((moved.col, moved.row), (6, 2));

        let up = tracker
            .handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 6, 2))
            .unwrap();
        assert_eq!(up.phase, PointerPhase::Up);
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn test_drag_without_press_is_swallowed() {
        let mut tracker = PointerTracker::new();
        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 1, 1)),
            None
        );
        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 1, 1)),
            None
        );
    }

    #[test]
    fn test_hover_and_other_buttons_ignored() {
        let mut tracker = PointerTracker::new();
        tracker
            .handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0))
            .unwrap();

        assert_eq!(tracker.handle_mouse(mouse(MouseEventKind::Moved, 1, 1)), None);
        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            None
        );
        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::ScrollDown, 1, 1)),
            None
        );
        assert!(tracker.is_pressed());
    }

    #[test]
    fn test_cancel_drops_tracked_press() {
        let mut tracker = PointerTracker::new();
        tracker
            .handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0))
            .unwrap();
        tracker.cancel();
        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0)),
            None
        );
    }
}
