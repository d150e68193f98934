//! Navigator state.
//!
//! The enum guarantees that exactly one view is active: the PIN buffer and
//! error only exist while the navigator is in `PinEntry`, so nothing can leak
//! from one visit of the PIN screen to the next.

use crate::text_input::TextInput;

/// Identifier for each of the three mutually exclusive views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Profile picker.
    Selector,
    /// PIN prompt for the active profile.
    PinEntry,
    /// Per-profile welcome view.
    ProfileHome,
}

impl View {
    /// All views, in display order.
    pub fn all() -> [View; 3] {
        [View::Selector, View::PinEntry, View::ProfileHome]
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Selector => "Selector",
            View::PinEntry => "PinEntry",
            View::ProfileHome => "ProfileHome",
        }
    }
}

/// Current state of the navigator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Navigator {
    #[default]
    Selector,
    PinEntry {
        /// Profile being unlocked.
        profile: String,
        /// Mismatch message from the last failed submit, if any.
        last_error: Option<String>,
        /// PIN typed so far.
        input: TextInput,
    },
    ProfileHome {
        profile: String,
    },
}

impl Navigator {
    /// Fresh PIN entry state for `profile`: no error, empty buffer.
    pub fn pin_entry(profile: impl Into<String>) -> Self {
        Self::PinEntry {
            profile: profile.into(),
            last_error: None,
            input: TextInput::new(),
        }
    }

    pub fn profile_home(profile: impl Into<String>) -> Self {
        Self::ProfileHome {
            profile: profile.into(),
        }
    }

    /// The view this state displays.
    pub fn view(&self) -> View {
        match self {
            Self::Selector => View::Selector,
            Self::PinEntry { .. } => View::PinEntry,
            Self::ProfileHome { .. } => View::ProfileHome,
        }
    }

    /// Profile currently being unlocked or shown, if any.
    pub fn active_profile(&self) -> Option<&str> {
        match self {
            Self::Selector => None,
            Self::PinEntry { profile, .. } | Self::ProfileHome { profile } => Some(profile),
        }
    }

    /// Error from the last failed PIN submit, only in `PinEntry`.
    pub fn last_error(&self) -> Option<&str> {
        if let Self::PinEntry { last_error, .. } = self {
            last_error.as_deref()
        } else {
            None
        }
    }

    /// The PIN buffer, only in `PinEntry`.
    pub fn pin_input(&self) -> Option<&TextInput> {
        if let Self::PinEntry { input, .. } = self {
            Some(input)
        } else {
            None
        }
    }

    pub(crate) fn pin_input_mut(&mut self) -> Option<&mut TextInput> {
        if let Self::PinEntry { input, .. } = self {
            Some(input)
        } else {
            None
        }
    }
}
