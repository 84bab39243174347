//! Dialog Components
//!
//! Confirmation and value-entry popups.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Fixed size centered rectangle
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Confirmation dialog
pub struct ConfirmDialog<'a> {
    title: &'a str,
    message: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self { title, message }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect_fixed(50, 7, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        Paragraph::new(self.message)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(Rect::new(inner.x, inner.y, inner.width, 2.min(inner.height)), buf);

        if inner.height > 3 {
            let hint = Line::from(vec![
                Span::styled("[y]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw(" Yes  "),
                Span::styled("[n]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw(" No"),
            ]);
            buf.set_line(inner.x, inner.y + 3, &hint, inner.width);
        }
    }
}

/// Single-line value entry
pub struct InputDialog<'a> {
    title: &'a str,
    prompt: &'a str,
    value: &'a str,
    cursor: usize,
}

impl<'a> InputDialog<'a> {
    pub fn new(title: &'a str, prompt: &'a str, value: &'a str, cursor: usize) -> Self {
        Self { title, prompt, value, cursor }
    }
}

impl Widget for InputDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect_fixed(50, 6, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        if inner.height < 2 {
            return;
        }

        buf.set_string(inner.x, inner.y, self.prompt, Style::default().fg(Color::White));

        // Split around the cursor so it can be drawn as a block
        let before: String = self.value.chars().take(self.cursor).collect();
        let at: String = self.value.chars().skip(self.cursor).take(1).collect();
        let after: String = self.value.chars().skip(self.cursor + 1).collect();
        let at = if at.is_empty() { " ".to_string() } else { at };

        let line = Line::from(vec![
            Span::styled(before, Style::default().fg(Color::White)),
            Span::styled(at, Style::default().fg(Color::Black).bg(Color::White)),
            Span::styled(after, Style::default().fg(Color::White)),
        ]);
        buf.set_line(inner.x, inner.y + 1, &line, inner.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed() {
        let r = centered_rect_fixed(10, 4, Rect::new(0, 0, 30, 10));
        assert_eq!(r, Rect::new(10, 3, 10, 4));

        let small = centered_rect_fixed(50, 7, Rect::new(0, 0, 20, 5));
        assert_eq!(small, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_input_dialog_renders_value() {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        InputDialog::new(" Edit ", "Sync frequency", "180", 3).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Sync frequency"));
        assert!(text.contains("180"));
    }
}
