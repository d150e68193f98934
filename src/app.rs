//! Application loop: terminal events in, navigator transitions out.
//!
//! `App` holds everything except the terminal itself so the key and mouse
//! handling can be driven directly in tests.

use crate::config::Config;
use crate::controller::ScreenController;
use crate::events::{self, InputEvent};
use crate::keymap::{Action, Keymap};
use crate::navigator::View;
use crate::styles::Theme;
use crate::text_input::TextInput;
use crate::tui::Tui;
use crate::ui::{self, ClickTargets, RenderContext, SelectorState, ViewModel};
use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use std::time::Duration;
use tracing::{debug, error, info};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct App {
    controller: ScreenController<ViewModel>,
    selector: SelectorState,
    clicks: ClickTargets,
    keymap: Keymap,
    theme: Theme,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, theme: Theme) -> Self {
        let controller = ScreenController::new(config.credential_table(), ViewModel::new());
        let selector = SelectorState::new(&config.profile_names(), controller.credentials());
        Self {
            controller,
            selector,
            clicks: ClickTargets::new(),
            keymap: config.keymap.clone(),
            theme,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &ScreenController<ViewModel> {
        &self.controller
    }

    pub fn selector(&self) -> &SelectorState {
        &self.selector
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run until the user quits. The terminal is restored on both the
    /// normal and the error path.
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let result = tui.enter().and_then(|()| self.event_loop(tui));
        // Restore even if entering failed halfway
        let restored = tui.exit();
        first_error(result, restored)
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        info!("Profile selector app initialized.");
        loop {
            tui.terminal_mut().draw(|frame| self.draw(frame))?;

            if self.should_quit {
                break;
            }

            if let Some(event) = tui.poll_event(POLL_INTERVAL)? {
                self.handle_event(event);
            }
        }
        Ok(())
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let ctx = RenderContext::new(&self.theme, &self.keymap);
        ui::draw(
            frame,
            &ctx,
            self.controller.renderer(),
            self.controller.state(),
            &mut self.selector,
            &mut self.clicks,
        );
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Key(key) if key.kind == KeyEventKind::Repeat && self.accepts_repeat(&key) => {
                self.handle_key(key);
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Held keys repeat for typing, cursor movement and deletion. Keys that
    /// change views only fire on the initial press.
    fn accepts_repeat(&self, key: &KeyEvent) -> bool {
        if self.controller.active_view() == View::PinEntry && is_typed_char(key) {
            return true;
        }
        matches!(
            self.keymap.get_action(key.code, key.modifiers),
            Some(
                Action::MoveUp
                    | Action::MoveDown
                    | Action::MoveLeft
                    | Action::MoveRight
                    | Action::Backspace
                    | Action::DeleteChar
            )
        ) && self.controller.active_view() != View::ProfileHome
    }

    fn dispatch(&mut self, event: InputEvent) {
        debug!("Dispatching {:?}", event);
        if let InputEvent::ProfileActivated(name) = &event {
            self.selector.highlight(name);
        }
        events::dispatch(&mut self.controller, event);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits, even while typing a PIN
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let action = self.keymap.get_action(key.code, key.modifiers);
        match self.controller.active_view() {
            View::Selector => self.handle_selector_key(action),
            View::PinEntry => self.handle_pin_key(key, action),
            View::ProfileHome => self.handle_home_key(action),
        }
    }

    fn handle_selector_key(&mut self, action: Option<Action>) {
        let Some(action) = action else {
            return;
        };
        match action {
            Action::MoveUp => self.selector.move_up(),
            Action::MoveDown => self.selector.move_down(),
            Action::GoToTop => self.selector.go_to_top(),
            Action::GoToEnd => self.selector.go_to_end(),
            Action::Confirm | Action::Activate => {
                if let Some(name) = self.selector.selected_name() {
                    let name = name.to_string();
                    self.dispatch(InputEvent::ProfileActivated(name));
                }
            }
            Action::Manage => self.dispatch(InputEvent::ManageProfile),
            Action::Quit => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_pin_key(&mut self, key: KeyEvent, action: Option<Action>) {
        // Printable characters always go into the field, whatever they are
        // bound to elsewhere
        if is_typed_char(&key) {
            if let KeyCode::Char(c) = key.code {
                self.controller.insert_pin_char(c);
            }
            return;
        }

        // Ctrl/Alt chords never edit the field; a quit binding still quits
        if matches!(key.code, KeyCode::Char(_)) {
            if action == Some(Action::Quit) {
                self.should_quit = true;
                return;
            }
            if let Some(action @ (Action::Confirm | Action::Cancel)) = action {
                self.handle_pin_action(action);
            }
            return;
        }

        match action.filter(TextInput::is_action_allowed_when_focused) {
            Some(action) => self.handle_pin_action(action),
            None => {
                if let Some(input) = self.controller.pin_input_mut() {
                    input.handle_key(key.code);
                }
            }
        }
    }

    fn handle_pin_action(&mut self, action: Action) {
        match action {
            Action::Confirm => self.dispatch(InputEvent::PinSubmit),
            Action::Cancel => self.dispatch(InputEvent::PinCancel),
            _ => {
                if let Some(input) = self.controller.pin_input_mut() {
                    input.handle_action(action);
                }
            }
        }
    }

    fn handle_home_key(&mut self, action: Option<Action>) {
        match action {
            Some(Action::Confirm | Action::Cancel | Action::Backspace) => {
                self.dispatch(InputEvent::ReturnToSelector);
            }
            Some(Action::Quit) => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(event) = self.clicks.hit(mouse.column, mouse.row) {
                    self.dispatch(event);
                }
            }
            MouseEventKind::ScrollUp if self.controller.active_view() == View::Selector => {
                self.selector.move_up();
            }
            MouseEventKind::ScrollDown if self.controller.active_view() == View::Selector => {
                self.selector.move_down();
            }
            _ => {}
        }
    }
}

/// The loop's own error takes precedence over a failed restore.
fn first_error(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let (Err(_), Err(restore_err)) = (&result, &restored) {
        error!("Failed to restore terminal: {:#}", restore_err);
    }
    result.and(restored)
}

/// A character key without Ctrl or Alt held.
fn is_typed_char(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(_))
        && !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileEntry;
    use crate::navigator::Navigator;
    use crate::renderer::TextRegion;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        let config = Config {
            profiles: vec![
                ProfileEntry::new("B", Some("5678")),
                ProfileEntry::new("Guest", None),
            ],
            ..Config::default()
        };
        App::new(&config, Theme::dark())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    fn render(app: &mut App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    /// Screen position of the first cell of `needle`.
    fn find(terminal: &Terminal<TestBackend>, needle: &str) -> Option<(u16, u16)> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width;
        for y in 0..buffer.area.height {
            let line: String = (0..width).map(|x| buffer[(x, y)].symbol()).collect();
            if let Some(byte_idx) = line.find(needle) {
                let x = line[..byte_idx].chars().count() as u16;
                return Some((x, y));
            }
        }
        None
    }

    #[test]
    fn test_keyboard_unlock_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller().active_view(), View::PinEntry);

        type_str(&mut app, "0000");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.controller().state().last_error(),
            Some("Incorrect PIN. Please try again.")
        );

        type_str(&mut app, "5678");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller().state(), &Navigator::profile_home("B"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.controller().active_view(), View::Selector);
    }

    #[test]
    fn test_space_activates_like_enter() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller().state(), &Navigator::profile_home("Guest"));
    }

    #[test]
    fn test_quit_key_is_typed_in_pin_field() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.should_quit());
        assert_eq!(
            app.controller().state().pin_input().map(|i| i.text()),
            Some("q ")
        );
        press(&mut app, KeyCode::Backspace);
        assert_eq!(
            app.controller().state().pin_input().map(|i| i.text()),
            Some("q")
        );
    }

    #[test]
    fn test_vim_motion_letters_are_typed_in_pin_field() {
        let mut config = Config {
            profiles: vec![ProfileEntry::new("ops", Some("hjkl"))],
            ..Config::default()
        };
        config.keymap.preset = crate::keymap::KeymapPreset::Vim;
        let mut app = App::new(&config, Theme::dark());
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "hjkl");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller().state(), &Navigator::profile_home("ops"));
    }

    fn pin_text(app: &App) -> Option<&str> {
        app.controller().state().pin_input().map(|i| i.text())
    }

    #[test]
    fn test_modified_chars_not_typed_in_pin_field() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('u'),
            KeyModifiers::CONTROL,
        )));
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)));
        assert_eq!(pin_text(&app), Some(""));

        // The real PIN still unlocks afterwards
        type_str(&mut app, "5678");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller().state(), &Navigator::profile_home("B"));
    }

    #[test]
    fn test_ctrl_quit_override_quits_from_pin_entry() {
        let mut config = Config {
            profiles: vec![ProfileEntry::new("B", Some("5678"))],
            ..Config::default()
        };
        config
            .keymap
            .overrides
            .push(crate::keymap::KeyBinding::new("ctrl+q", Action::Quit));
        let mut app = App::new(&config, Theme::dark());
        press(&mut app, KeyCode::Enter);
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
        assert_eq!(pin_text(&app), Some(""));
    }

    #[test]
    fn test_held_keys_repeat_while_typing() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "12");
        let repeat = |code| {
            Event::Key(KeyEvent::new_with_kind(
                code,
                KeyModifiers::NONE,
                KeyEventKind::Repeat,
            ))
        };
        app.handle_event(repeat(KeyCode::Char('3')));
        assert_eq!(pin_text(&app), Some("123"));
        app.handle_event(repeat(KeyCode::Backspace));
        app.handle_event(repeat(KeyCode::Backspace));
        assert_eq!(pin_text(&app), Some("1"));

        // A held Enter submits only once
        app.handle_event(repeat(KeyCode::Enter));
        assert_eq!(app.controller().state().last_error(), None);
        assert_eq!(pin_text(&app), Some("1"));
    }

    #[test]
    fn test_held_arrow_repeats_on_selector() {
        let mut app = app();
        app.handle_event(Event::Key(KeyEvent::new_with_kind(
            KeyCode::Down,
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        )));
        assert_eq!(app.selector().selected_name(), Some("Guest"));
    }

    #[test]
    fn test_backspace_returns_home_to_selector() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller().state(), &Navigator::profile_home("Guest"));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.controller().state(), &Navigator::Selector);
    }

    #[test]
    fn test_scroll_wheel_moves_selector() {
        let mut app = app();
        let scroll = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })
        };
        app.handle_event(scroll(MouseEventKind::ScrollDown));
        assert_eq!(app.selector().selected_name(), Some("Guest"));
        app.handle_event(scroll(MouseEventKind::ScrollUp));
        assert_eq!(app.selector().selected_name(), Some("B"));

        // Scrolling does nothing outside the selector
        press(&mut app, KeyCode::Enter);
        app.handle_event(scroll(MouseEventKind::ScrollDown));
        assert_eq!(app.selector().selected_name(), Some("B"));
        assert_eq!(app.controller().active_view(), View::PinEntry);
    }

    #[test]
    fn test_first_error_keeps_loop_error() {
        let both = first_error(
            Err(anyhow::anyhow!("draw failed")),
            Err(anyhow::anyhow!("restore failed")),
        );
        assert_eq!(both.unwrap_err().to_string(), "draw failed");

        let restore_only = first_error(Ok(()), Err(anyhow::anyhow!("restore failed")));
        assert_eq!(restore_only.unwrap_err().to_string(), "restore failed");

        assert!(first_error(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_ctrl_c_quits_from_pin_entry() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
    }

    #[test]
    fn test_esc_cancels_pin_entry() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "12");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.controller().state(), &Navigator::Selector);

        // Coming back starts clean
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller().state(), &Navigator::pin_entry("B"));
    }

    #[test]
    fn test_manage_key_is_acknowledged_only() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.controller().state(), &Navigator::Selector);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_q_quits_from_selector() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_event(Event::Key(key));
        assert_eq!(app.controller().active_view(), View::Selector);
    }

    #[test]
    fn test_click_card_matches_keyboard_activation() {
        let mut app = app();
        let terminal = render(&mut app);
        let (x, y) = find(&terminal, "Guest").expect("Guest card drawn");
        click(&mut app, x, y);
        assert_eq!(app.controller().state(), &Navigator::profile_home("Guest"));
        assert_eq!(app.selector().selected_name(), Some("Guest"));
    }

    #[test]
    fn test_click_buttons() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "5678");

        let terminal = render(&mut app);
        assert!(screen_text(&terminal).contains("Enter PIN for B"));
        assert!(!screen_text(&terminal).contains("5678"));
        let (x, y) = find(&terminal, "[ Submit ]").expect("submit button drawn");
        click(&mut app, x + 2, y);
        assert_eq!(app.controller().state(), &Navigator::profile_home("B"));

        let terminal = render(&mut app);
        assert!(screen_text(&terminal).contains("Welcome, B!"));
        let (x, y) = find(&terminal, "[ Back to profiles ]").expect("back button drawn");
        click(&mut app, x, y);
        assert_eq!(app.controller().state(), &Navigator::Selector);
    }

    #[test]
    fn test_click_cancel_button() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        let terminal = render(&mut app);
        let (x, y) = find(&terminal, "[ Cancel ]").expect("cancel button drawn");
        click(&mut app, x, y);
        assert_eq!(app.controller().state(), &Navigator::Selector);
    }

    #[test]
    fn test_mismatch_message_drawn() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "1");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.controller().renderer().text(TextRegion::PinError),
            "Incorrect PIN. Please try again."
        );
        let terminal = render(&mut app);
        assert!(screen_text(&terminal).contains("Incorrect PIN. Please try again."));
    }

    #[test]
    fn test_selector_draws_only_selector() {
        let mut app = app();
        let terminal = render(&mut app);
        let text = screen_text(&terminal);
        assert!(text.contains("Profiles"));
        assert!(text.contains("[PIN]"));
        assert!(!text.contains("Enter PIN for"));
        assert!(!text.contains("Welcome"));
    }
}
