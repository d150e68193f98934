//! Highlight state for the profile cards.
//!
//! Which card is highlighted is purely a presentation concern: the navigator
//! only learns about a profile once it is activated.

use crate::credentials::CredentialTable;
use ratatui::widgets::ListState;

/// One card on the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub name: String,
    /// Shown with a lock marker when a PIN is required.
    pub locked: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SelectorState {
    pub cards: Vec<ProfileCard>,
    pub list_state: ListState,
}

impl SelectorState {
    /// Build cards for `names`, marking those the table gates.
    pub fn new(names: &[String], credentials: &CredentialTable) -> Self {
        let cards: Vec<ProfileCard> = names
            .iter()
            .map(|name| ProfileCard {
                name: name.clone(),
                locked: credentials.requires_pin(name),
            })
            .collect();
        let mut list_state = ListState::default();
        if !cards.is_empty() {
            list_state.select(Some(0));
        }
        Self { cards, list_state }
    }

    pub fn selected(&self) -> Option<&ProfileCard> {
        self.list_state.selected().and_then(|i| self.cards.get(i))
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected().map(|card| card.name.as_str())
    }

    /// Highlight the card for `name`, if there is one.
    pub fn highlight(&mut self, name: &str) {
        if let Some(idx) = self.cards.iter().position(|c| c.name == name) {
            self.list_state.select(Some(idx));
        }
    }

    pub fn move_up(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let idx = match self.list_state.selected() {
            Some(0) | None => self.cards.len() - 1,
            Some(current) => current - 1,
        };
        self.list_state.select(Some(idx));
    }

    pub fn move_down(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let idx = match self.list_state.selected() {
            Some(current) if current + 1 < self.cards.len() => current + 1,
            _ => 0,
        };
        self.list_state.select(Some(idx));
    }

    pub fn go_to_top(&mut self) {
        if !self.cards.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn go_to_end(&mut self) {
        if !self.cards.is_empty() {
            self.list_state.select(Some(self.cards.len() - 1));
        }
    }
}
