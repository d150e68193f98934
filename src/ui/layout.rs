use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split `area` into header, content and footer rows.
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Whether the terminal cell (`column`, `row`) falls inside `rect`.
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(center_rect(area, 40, 10), Rect::new(20, 7, 40, 10));
        // Larger than the area: clamped
        assert_eq!(center_rect(area, 100, 30), area);
    }

    #[test]
    fn test_contains() {
        let rect = Rect::new(5, 5, 10, 2);
        assert!(contains(rect, 5, 5));
        assert!(contains(rect, 14, 6));
        assert!(!contains(rect, 15, 6));
        assert!(!contains(rect, 5, 7));
    }

    #[test]
    fn test_standard_layout() {
        let (header, content, footer) = create_standard_layout(Rect::new(0, 0, 80, 24), 3, 2);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 2);
        assert_eq!(content.height, 19);
    }
}
