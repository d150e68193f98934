//! profilegate - a terminal profile picker with an optional PIN gate
//!
//! The core is [`controller::ScreenController`], a three-view state machine
//! (selector, PIN entry, profile home) that talks to its display only through
//! the [`renderer::ViewRenderer`] trait. Everything else in the crate is the
//! terminal host around it.

// Core
pub mod controller;
pub mod credentials;
pub mod events;
pub mod navigator;
pub mod renderer;
pub mod text_input;

// Host
pub mod app;
pub mod cli;
pub mod config;
pub mod keymap;
pub mod paths;
pub mod styles;
pub mod tui;
pub mod ui;

pub use config::Config;
pub use controller::ScreenController;
pub use credentials::{CredentialTable, PinCheck};
pub use events::InputEvent;
pub use navigator::{Navigator, View};
pub use renderer::{InputField, NullRenderer, TextRegion, ViewRenderer};
