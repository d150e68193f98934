use crate::styles::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Key hint footer ("Key: Label | Key: Label")
pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
        let mut spans = Vec::new();
        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", theme.muted_style()));
            }
            if let Some((keys, label)) = part.split_once(": ") {
                spans.push(Span::styled(format!("{}: ", keys), theme.emphasis_style()));
                spans.push(Span::styled(label.to_string(), theme.text_style()));
            } else {
                spans.push(Span::styled(part.to_string(), theme.text_style()));
            }
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focused_style());
        let inner = block.inner(area);

        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            inner,
        );
    }
}
