//! Screen controller: the navigator state machine and its render side effects.
//!
//! ```text
//! Selector ──select_profile(name), name in table──────▶ PinEntry
//! Selector ──select_profile(name), name not in table──▶ ProfileHome
//! PinEntry ──submit_pin, match────────────────────────▶ ProfileHome
//! PinEntry ──submit_pin, mismatch─────────────────────▶ PinEntry (error set)
//! PinEntry ──cancel_pin───────────────────────────────▶ Selector
//! ProfileHome ──return_to_selector────────────────────▶ Selector
//! ```
//!
//! Every transition goes through one of the `enter_*` helpers, which replace
//! the whole `Navigator` value and then push the matching view to the
//! renderer.

use crate::credentials::{CredentialTable, PinCheck, PIN_MISMATCH_MESSAGE};
use crate::navigator::{Navigator, View};
use crate::renderer::{InputField, TextRegion, ViewRenderer};
use tracing::{debug, info, warn};

/// Owns the navigator state and drives a renderer from it.
pub struct ScreenController<R: ViewRenderer> {
    credentials: CredentialTable,
    state: Navigator,
    renderer: R,
}

impl<R: ViewRenderer> ScreenController<R> {
    /// Create a controller in the `Selector` state and render it.
    pub fn new(credentials: CredentialTable, renderer: R) -> Self {
        let mut controller = Self {
            credentials,
            state: Navigator::Selector,
            renderer,
        };
        controller.renderer.set_visible(View::Selector);
        controller
    }

    pub fn state(&self) -> &Navigator {
        &self.state
    }

    pub fn active_view(&self) -> View {
        self.state.view()
    }

    pub fn credentials(&self) -> &CredentialTable {
        &self.credentials
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// A profile was activated on the selector.
    ///
    /// Profiles in the credential table go to PIN entry; everything else,
    /// including names the table has never heard of, opens directly.
    pub fn select_profile(&mut self, name: &str) {
        if name.is_empty() {
            warn!("Ignoring selection of a profile with an empty name");
            return;
        }
        info!("Profile {} selected", name);
        if self.credentials.requires_pin(name) {
            self.enter_pin_entry(name);
        } else {
            self.enter_profile_home(name);
        }
    }

    /// Check `entered` against the active profile's PIN.
    ///
    /// Does nothing outside `PinEntry`.
    pub fn submit_pin(&mut self, entered: &str) {
        let Navigator::PinEntry { profile, .. } = &self.state else {
            debug!("PIN submitted while on {}, ignoring", self.active_view().name());
            return;
        };
        let profile = profile.clone();

        match self.credentials.check(&profile, entered) {
            PinCheck::Match => {
                info!("PIN accepted for {}", profile);
                self.enter_profile_home(&profile);
            }
            PinCheck::Mismatch => {
                info!("Incorrect PIN entered for {}", profile);
                self.reject_pin();
            }
            PinCheck::NotRequired => {
                warn!(
                    "Profile {} does not have a PIN defined but PIN screen was shown. Proceeding to profile page.",
                    profile
                );
                self.enter_profile_home(&profile);
            }
        }
    }

    /// Submit whatever is in the PIN buffer.
    pub fn submit_current_pin(&mut self) {
        let Some(input) = self.state.pin_input_mut() else {
            debug!("PIN submitted while on {}, ignoring", self.active_view().name());
            return;
        };
        let entered = input.take();
        self.submit_pin(&entered);
    }

    /// Leave PIN entry without checking anything.
    pub fn cancel_pin(&mut self) {
        if self.active_view() != View::PinEntry {
            debug!("PIN cancel while on {}, ignoring", self.active_view().name());
            return;
        }
        info!("PIN entry cancelled");
        self.enter_selector();
    }

    /// Leave the profile home view.
    pub fn return_to_selector(&mut self) {
        if self.active_view() != View::ProfileHome {
            debug!(
                "Return to selector while on {}, ignoring",
                self.active_view().name()
            );
            return;
        }
        info!("Returning to profile selector");
        self.enter_selector();
    }

    /// Acknowledge the "manage profile" affordance. No transition.
    pub fn manage_profile(&mut self) {
        info!("Manage Profile button clicked.");
    }

    /// Type a character into the PIN buffer. Ignored outside `PinEntry`.
    pub fn insert_pin_char(&mut self, c: char) {
        if let Some(input) = self.state.pin_input_mut() {
            input.insert_char(c);
        }
    }

    /// Delete the character before the PIN cursor. Ignored outside `PinEntry`.
    pub fn pin_backspace(&mut self) {
        if let Some(input) = self.state.pin_input_mut() {
            input.backspace();
        }
    }

    /// Mutable access to the PIN buffer for cursor movement and the like.
    pub fn pin_input_mut(&mut self) -> Option<&mut crate::text_input::TextInput> {
        self.state.pin_input_mut()
    }

    fn enter_selector(&mut self) {
        self.state = Navigator::Selector;
        self.renderer.set_visible(View::Selector);
    }

    fn enter_pin_entry(&mut self, profile: &str) {
        self.state = Navigator::pin_entry(profile);
        self.renderer.set_visible(View::PinEntry);
        self.renderer
            .set_text(TextRegion::PinTitle, &format!("Enter PIN for {}", profile));
        self.renderer.clear_field(InputField::PinInput);
        self.renderer.focus(InputField::PinInput);
        self.renderer.set_text(TextRegion::PinError, "");
    }

    fn enter_profile_home(&mut self, profile: &str) {
        self.state = Navigator::profile_home(profile);
        self.renderer.set_visible(View::ProfileHome);
        self.renderer
            .set_text(TextRegion::Welcome, &format!("Welcome, {}!", profile));
        info!("Navigated to {}'s page.", profile);
    }

    fn reject_pin(&mut self) {
        if let Navigator::PinEntry {
            last_error, input, ..
        } = &mut self.state
        {
            *last_error = Some(PIN_MISMATCH_MESSAGE.to_string());
            input.clear();
        }
        self.renderer
            .set_text(TextRegion::PinError, PIN_MISMATCH_MESSAGE);
        self.renderer.clear_field(InputField::PinInput);
        self.renderer.focus(InputField::PinInput);
    }
}
