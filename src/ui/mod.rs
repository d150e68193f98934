//! Terminal presentation of the navigator.
//!
//! ```text
//! ScreenController ──ViewRenderer calls──▶ ViewModel
//!                                             │
//!          Navigator (PIN buffer) ────────────┤
//!          SelectorState (highlight) ─────────┤
//!                                             ▼
//!                                    draw() ──▶ ratatui Frame
//!                                             │
//!                                             └─▶ ClickTargets (mouse hit-testing)
//! ```

pub mod click_targets;
pub mod draw;
pub mod footer;
pub mod layout;
pub mod pin_field;
pub mod selector;
pub mod view_model;

pub use click_targets::ClickTargets;
pub use draw::{draw, RenderContext};
pub use pin_field::{PinFieldExt, PinFieldWidget};
pub use selector::{ProfileCard, SelectorState};
pub use view_model::ViewModel;
