//! Terminal-side record of what the controller asked to display.

use crate::navigator::View;
use crate::renderer::{InputField, TextRegion, ViewRenderer};
use std::collections::HashMap;
use tracing::trace;

/// The terminal's [`ViewRenderer`]: remembers the visible view, region
/// texts and focus so the draw pass can paint them.
#[derive(Debug, Clone)]
pub struct ViewModel {
    visible: View,
    texts: HashMap<TextRegion, String>,
    focused: Option<InputField>,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewModel {
    pub fn new() -> Self {
        Self {
            visible: View::Selector,
            texts: HashMap::new(),
            focused: None,
        }
    }

    pub fn visible(&self) -> View {
        self.visible
    }

    pub fn is_visible(&self, view: View) -> bool {
        self.visible == view
    }

    /// Current text of a region; empty when never set or cleared.
    pub fn text(&self, region: TextRegion) -> &str {
        self.texts.get(&region).map_or("", String::as_str)
    }

    pub fn focused(&self) -> Option<InputField> {
        self.focused
    }
}

impl ViewRenderer for ViewModel {
    fn set_visible(&mut self, view: View) {
        trace!("Showing {}", view.name());
        self.visible = view;
        // Focus only survives on the view that owns the field
        if view != View::PinEntry {
            self.focused = None;
        }
    }

    fn set_text(&mut self, region: TextRegion, text: &str) {
        if text.is_empty() {
            self.texts.remove(&region);
        } else {
            self.texts.insert(region, text.to_string());
        }
    }

    fn focus(&mut self, field: InputField) {
        self.focused = Some(field);
    }

    fn clear_field(&mut self, field: InputField) {
        // The PIN field is drawn straight from the navigator's buffer, which
        // the controller has already emptied.
        trace!("Cleared {:?}", field);
    }
}
