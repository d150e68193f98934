//! Pointer hit-testing.
//!
//! Each draw pass registers the screen rectangles that act as buttons or
//! profile cards, so a mouse click can produce the same [`InputEvent`] as the
//! equivalent key.

use super::layout::contains;
use crate::events::InputEvent;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Default)]
pub struct ClickTargets {
    targets: Vec<(Rect, InputEvent)>,
}

impl ClickTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything registered by the previous frame.
    pub fn clear(&mut self) {
        self.targets.clear();
    }

    pub fn register(&mut self, area: Rect, event: InputEvent) {
        self.targets.push((area, event));
    }

    /// Event for a click at (`column`, `row`). Later registrations win, so
    /// anything drawn on top takes precedence.
    pub fn hit(&self, column: u16, row: u16) -> Option<InputEvent> {
        self.targets
            .iter()
            .rev()
            .find(|(area, _)| contains(*area, column, row))
            .map(|(_, event)| event.clone())
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
