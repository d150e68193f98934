//! Rendering collaborator.
//!
//! The controller never draws anything itself. It pushes visibility, text,
//! focus and field-reset requests through this trait, so the state machine can
//! run against a terminal, a test recorder, or nothing at all.

use crate::navigator::View;

/// Text regions the controller writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRegion {
    /// Title of the PIN screen ("Enter PIN for {name}").
    PinTitle,
    /// Inline error under the PIN field. Empty text clears it.
    PinError,
    /// Greeting on the profile home view ("Welcome, {name}!").
    Welcome,
}

/// Input fields the controller can focus or clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    PinInput,
}

/// Capability set a host must provide to display the navigator.
///
/// Implementations that lack an element (for example a host without an error
/// region) must ignore the call rather than fail.
pub trait ViewRenderer {
    /// Make `view` the only visible view.
    fn set_visible(&mut self, view: View);

    /// Replace the text of a region. An empty string clears it.
    fn set_text(&mut self, region: TextRegion, text: &str);

    /// Move input focus to a field.
    fn focus(&mut self, field: InputField);

    /// Reset a field's displayed value to empty.
    fn clear_field(&mut self, field: InputField);
}

/// Renderer with no elements at all; every call is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl ViewRenderer for NullRenderer {
    fn set_visible(&mut self, _view: View) {}

    fn set_text(&mut self, _region: TextRegion, _text: &str) {}

    fn focus(&mut self, _field: InputField) {}

    fn clear_field(&mut self, _field: InputField) {}
}

impl<R: ViewRenderer + ?Sized> ViewRenderer for &mut R {
    fn set_visible(&mut self, view: View) {
        (**self).set_visible(view);
    }

    fn set_text(&mut self, region: TextRegion, text: &str) {
        (**self).set_text(region, text);
    }

    fn focus(&mut self, field: InputField) {
        (**self).focus(field);
    }

    fn clear_field(&mut self, field: InputField) {
        (**self).clear_field(field);
    }
}
