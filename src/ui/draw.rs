//! Drawing for the three views.
//!
//! Only the view the [`ViewModel`] marks visible is painted; the others do not
//! exist on screen at all. Every pass re-registers the click targets of the
//! painted view.

use super::click_targets::ClickTargets;
use super::footer::Footer;
use super::layout::{center_rect, create_standard_layout};
use super::pin_field::{PinFieldExt, PinFieldWidget};
use super::selector::SelectorState;
use super::view_model::ViewModel;
use crate::events::InputEvent;
use crate::keymap::{Action, Keymap};
use crate::navigator::{Navigator, View};
use crate::renderer::{InputField, TextRegion};
use crate::styles::{Theme, LIST_HIGHLIGHT_SYMBOL};
use crate::text_input::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap};

const MANAGE_BUTTON: &str = "[ Manage Profiles ]";
const SUBMIT_BUTTON: &str = "[ Submit ]";
const CANCEL_BUTTON: &str = "[ Cancel ]";
const BACK_BUTTON: &str = "[ Back to profiles ]";

/// Read-only resources the draw pass needs.
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub keymap: &'a Keymap,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, keymap: &'a Keymap) -> Self {
        Self { theme, keymap }
    }
}

/// Paint the visible view into `frame`.
pub fn draw(
    frame: &mut Frame,
    ctx: &RenderContext,
    model: &ViewModel,
    state: &Navigator,
    selector: &mut SelectorState,
    clicks: &mut ClickTargets,
) {
    clicks.clear();
    let area = frame.area();
    match model.visible() {
        View::Selector => draw_selector(frame, area, ctx, selector, clicks),
        View::PinEntry => {
            let empty = TextInput::new();
            let input = state.pin_input().unwrap_or(&empty);
            draw_pin_entry(frame, area, ctx, model, input, clicks);
        }
        View::ProfileHome => draw_profile_home(frame, area, ctx, model, clicks),
    }
}

fn draw_header(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_focused_style());
    frame.render_widget(
        Paragraph::new(title)
            .style(theme.title_style())
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

/// A one-line button centered in `area`, registered as a click target.
fn draw_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    theme: &Theme,
    clicks: &mut ClickTargets,
    event: InputEvent,
) {
    let button = center_rect(area, label.chars().count() as u16, 1);
    frame.render_widget(Paragraph::new(label).style(theme.emphasis_style()), button);
    clicks.register(button, event);
}

fn draw_selector(
    frame: &mut Frame,
    area: Rect,
    ctx: &RenderContext,
    selector: &mut SelectorState,
    clicks: &mut ClickTargets,
) {
    let theme = ctx.theme;
    let (header_area, content_area, footer_area) = create_standard_layout(area, 3, 2);
    draw_header(frame, header_area, "Who's using this terminal?", theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(content_area);
    let list_height = (selector.cards.len() as u16).saturating_add(2);
    let list_area = center_rect(chunks[0], 40, list_height);

    let items: Vec<ListItem> = selector
        .cards
        .iter()
        .map(|card| {
            let mut spans = vec![Span::styled(card.name.clone(), theme.profile_style())];
            if card.locked {
                spans.push(Span::styled("  [PIN]", theme.muted_style()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let block = Block::default()
        .title(" Profiles ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style());
    let inner = block.inner(list_area);

    if selector.cards.is_empty() {
        frame.render_widget(
            Paragraph::new("No profiles configured")
                .style(theme.muted_style())
                .alignment(Alignment::Center)
                .block(block),
            list_area,
        );
    } else {
        let list = List::new(items)
            .block(block)
            .highlight_style(theme.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, list_area, &mut selector.list_state);

        let offset = selector.list_state.offset();
        for (row, card) in selector.cards.iter().skip(offset).enumerate() {
            let row = row as u16;
            if row >= inner.height {
                break;
            }
            clicks.register(
                Rect::new(inner.x, inner.y + row, inner.width, 1),
                InputEvent::ProfileActivated(card.name.clone()),
            );
        }
    }

    draw_button(frame, chunks[1], MANAGE_BUTTON, theme, clicks, InputEvent::ManageProfile);

    let keymap = ctx.keymap;
    let footer = format!(
        "{}: Navigate | {}/{}: Open | {}: Manage Profiles | {}: Quit",
        keymap.navigation_display(),
        keymap.get_key_display_for_action(Action::Confirm),
        keymap.get_key_display_for_action(Action::Activate),
        keymap.get_key_display_for_action(Action::Manage),
        keymap.get_key_display_for_action(Action::Quit),
    );
    Footer::render(frame, footer_area, &footer, theme);
}

fn draw_pin_entry(
    frame: &mut Frame,
    area: Rect,
    ctx: &RenderContext,
    model: &ViewModel,
    input: &TextInput,
    clicks: &mut ClickTargets,
) {
    let theme = ctx.theme;
    let (_, content_area, footer_area) = create_standard_layout(area, 0, 2);

    let title = model.text(TextRegion::PinTitle);
    let dialog = center_rect(content_area, 44, 10);
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.title_style())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_focused_style());
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let field_area = center_rect(rows[1], 24, 3);
    let widget = PinFieldWidget::new(input, theme)
        .title("PIN")
        .placeholder("Enter PIN")
        .focused(model.focused() == Some(InputField::PinInput));
    frame.render_pin_field(widget, field_area);

    let error = model.text(TextRegion::PinError);
    if !error.is_empty() {
        frame.render_widget(
            Paragraph::new(error)
                .style(theme.error_style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            rows[2],
        );
    }

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[4]);
    draw_button(frame, buttons[0], SUBMIT_BUTTON, theme, clicks, InputEvent::PinSubmit);
    draw_button(frame, buttons[1], CANCEL_BUTTON, theme, clicks, InputEvent::PinCancel);

    let footer = format!(
        "{}: Submit | {}: Cancel",
        ctx.keymap.get_key_display_for_action(Action::Confirm),
        ctx.keymap.get_key_display_for_action(Action::Cancel),
    );
    Footer::render(frame, footer_area, &footer, theme);
}

fn draw_profile_home(
    frame: &mut Frame,
    area: Rect,
    ctx: &RenderContext,
    model: &ViewModel,
    clicks: &mut ClickTargets,
) {
    let theme = ctx.theme;
    let (_, content_area, footer_area) = create_standard_layout(area, 0, 2);

    let panel = center_rect(content_area, 44, 7);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_focused_style());
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(model.text(TextRegion::Welcome))
            .style(theme.success_style())
            .alignment(Alignment::Center),
        rows[1],
    );
    draw_button(frame, rows[3], BACK_BUTTON, theme, clicks, InputEvent::ReturnToSelector);

    let footer = format!(
        "{}: Back to profiles | {}: Quit",
        ctx.keymap.get_key_display_for_action(Action::Confirm),
        ctx.keymap.get_key_display_for_action(Action::Quit),
    );
    Footer::render(frame, footer_area, &footer, theme);
}
