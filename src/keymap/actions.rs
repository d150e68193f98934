//! Semantic actions that key bindings resolve to.

use serde::{Deserialize, Serialize};

/// Everything a key can mean to the profile picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Selector navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToEnd,

    // Input cursor
    MoveLeft,
    MoveRight,
    Home,
    End,

    /// Activate the highlighted card, submit the PIN, leave the home view (Enter)
    Confirm,
    /// Activate the highlighted card (Space)
    Activate,
    /// Cancel PIN entry / go back (Esc)
    Cancel,
    /// Open the (not yet available) profile manager
    Manage,
    Quit,

    // Text editing
    Backspace,
    DeleteChar,
}
