//! Masked PIN input widget.

use crate::styles::Theme;
use crate::text_input::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Mask character drawn for each typed PIN character
pub const MASK_CHAR: char = '•';

/// Renders a [`TextInput`] with its characters masked.
///
/// # Example
/// ```
/// use profilegate::styles::Theme;
/// use profilegate::text_input::TextInput;
/// use profilegate::ui::PinFieldWidget;
///
/// let input = TextInput::with_text("1234");
/// let theme = Theme::dark();
/// let widget = PinFieldWidget::new(&input, &theme).focused(true);
/// // frame.render_pin_field(widget, area);
/// ```
pub struct PinFieldWidget<'a> {
    input: &'a TextInput,
    theme: &'a Theme,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
}

impl<'a> PinFieldWidget<'a> {
    pub fn new(input: &'a TextInput, theme: &'a Theme) -> Self {
        Self {
            input,
            theme,
            title: None,
            placeholder: None,
            focused: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Masked text, or the placeholder while empty.
    fn display_text(&self) -> String {
        if self.input.is_empty() {
            self.placeholder.unwrap_or("").to_string()
        } else {
            MASK_CHAR.to_string().repeat(self.input.len())
        }
    }

    fn block(&self) -> Block<'a> {
        let border_style = if self.focused {
            self.theme.border_focused_style()
        } else {
            self.theme.border_style()
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }
}

impl Widget for PinFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.input.is_empty() {
            self.theme.muted_style()
        } else {
            self.theme.text_style()
        };
        Paragraph::new(self.display_text())
            .block(self.block())
            .style(style)
            .render(area, buf);
    }
}

/// Frame extension that also places the terminal cursor in a focused field.
pub trait PinFieldExt {
    fn render_pin_field(&mut self, widget: PinFieldWidget, area: Rect);
}

impl PinFieldExt for Frame<'_> {
    fn render_pin_field(&mut self, widget: PinFieldWidget, area: Rect) {
        let inner = widget.block().inner(area);
        let focused = widget.focused;
        let cursor = widget.input.cursor().min(widget.input.len());
        self.render_widget(widget, area);

        if focused && inner.width > 0 && inner.height > 0 {
            let x = inner.x + (cursor as u16).min(inner.width - 1);
            self.set_cursor_position((x, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_masks_text() {
        let theme = Theme::dark();
        let input = TextInput::with_text("5678");
        let widget = PinFieldWidget::new(&input, &theme);
        assert_eq!(widget.display_text(), "••••");
    }

    #[test]
    fn test_display_placeholder_when_empty() {
        let theme = Theme::dark();
        let input = TextInput::new();
        let widget = PinFieldWidget::new(&input, &theme).placeholder("PIN");
        assert_eq!(widget.display_text(), "PIN");
    }

    #[test]
    fn test_render_never_shows_digits() {
        let theme = Theme::dark();
        let input = TextInput::with_text("1234");
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        PinFieldWidget::new(&input, &theme).render(area, &mut buf);
        let rendered: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(!rendered.contains('1'));
        assert!(rendered.contains("••••"));
    }
}
