// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drag-to-scroll gesture for the project selector strip.
//!
//! The strip scrolls horizontally while the primary button is held and the
//! pointer moves. A chip click that ends a gesture which travelled past the
//! drag threshold is treated as the end of a drag, not a selection.

/// Distance in logical pixels the pointer must travel before a press counts
/// as a drag.
pub const DRAG_THRESHOLD: f32 = 5.0;

/// Pointer button that started a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging {
        /// Pointer x position at press time
        anchor_x: f32,
        /// Strip scroll offset at press time
        start_offset: f32,
        /// Whether the pointer travelled past [`DRAG_THRESHOLD`]
        moved: bool,
    },
}

impl DragGesture {
    /// Pointer pressed over the strip. Only the primary button drags.
    pub fn pointer_down(&mut self, button: PointerButton, x: f32, scroll_offset: f32) {
        if button != PointerButton::Primary {
            return;
        }
        *self = DragGesture::Dragging {
            anchor_x: x,
            start_offset: scroll_offset,
            moved: false,
        };
    }

    /// Pointer moved. Returns the scroll offset the strip should take.
    pub fn pointer_move(&mut self, x: f32) -> Option<f32> {
        match self {
            DragGesture::Idle => None,
            DragGesture::Dragging {
                anchor_x,
                start_offset,
                moved,
            } => {
                let delta = x - *anchor_x;
                if delta.abs() > DRAG_THRESHOLD {
                    *moved = true;
                }
                Some((*start_offset - delta).max(0.0))
            }
        }
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        *self = DragGesture::Idle;
    }

    /// Pointer left the strip.
    pub fn pointer_leave(&mut self) {
        *self = DragGesture::Idle;
    }

    /// Whether a chip click at this moment should select a project.
    pub fn accept_click(&self) -> bool {
        !matches!(self, DragGesture::Dragging { moved: true, .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_primary_button_drags() {
        let mut gesture = DragGesture::default();
        gesture.pointer_down(PointerButton::Secondary, 10.0, 0.0);
        assert!(!gesture.is_dragging());
        gesture.pointer_down(PointerButton::Middle, 10.0, 0.0);
        assert!(!gesture.is_dragging());

        gesture.pointer_down(PointerButton::Primary, 10.0, 0.0);
        assert!(gesture.is_dragging());
    }

    #[test]
    fn test_drag_scrolls_opposite_to_pointer() {
        let mut gesture = DragGesture::default();
        gesture.pointer_down(PointerButton::Primary, 100.0, 50.0);

        assert_eq!(gesture.pointer_move(80.0), Some(70.0));
        assert_eq!(gesture.pointer_move(120.0), Some(30.0));
        // Never scrolls before the start of the strip
        assert_eq!(gesture.pointer_move(400.0), Some(0.0));
    }

    #[test]
    fn test_move_without_press_does_nothing() {
        let mut gesture = DragGesture::default();
        assert_eq!(gesture.pointer_move(50.0), None);
    }

    #[test]
    fn test_click_after_small_jitter_is_accepted() {
        let mut gesture = DragGesture::default();
        gesture.pointer_down(PointerButton::Primary, 100.0, 0.0);
        gesture.pointer_move(103.0);
        assert!(gesture.accept_click());
    }

    #[test]
    fn test_click_after_drag_is_suppressed() {
        let mut gesture = DragGesture::default();
        gesture.pointer_down(PointerButton::Primary, 100.0, 0.0);
        gesture.pointer_move(60.0);
        assert!(!gesture.accept_click());

        gesture.pointer_up();
        assert_eq!(gesture, DragGesture::Idle);
        assert!(gesture.accept_click());
    }

    #[test]
    fn test_leave_resets_to_idle() {
        let mut gesture = DragGesture::default();
        gesture.pointer_down(PointerButton::Primary, 100.0, 0.0);
        gesture.pointer_move(10.0);
        gesture.pointer_leave();
        assert!(!gesture.is_dragging());
        assert_eq!(gesture.pointer_move(20.0), None);
    }
}
