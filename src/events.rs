//! Input events and the single place they are wired to the controller.

use crate::controller::ScreenController;
use crate::renderer::ViewRenderer;

/// Semantic input events produced by the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A profile card was activated (click, Enter or Space).
    ProfileActivated(String),
    /// The PIN submit button or Enter in the PIN field.
    PinSubmit,
    /// The PIN cancel button.
    PinCancel,
    /// The "back to profiles" button on the home view.
    ReturnToSelector,
    /// The "manage profile" button. Acknowledged, no transition.
    ManageProfile,
}

/// Route one event to exactly one controller operation.
pub fn dispatch<R: ViewRenderer>(controller: &mut ScreenController<R>, event: InputEvent) {
    match event {
        InputEvent::ProfileActivated(name) => controller.select_profile(&name),
        InputEvent::PinSubmit => controller.submit_current_pin(),
        InputEvent::PinCancel => controller.cancel_pin(),
        InputEvent::ReturnToSelector => controller.return_to_selector(),
        InputEvent::ManageProfile => controller.manage_profile(),
    }
}
