//! Preference List Component
//!
//! Preference entries grouped by screen, each with its summary.

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Display row for one preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceItem {
    pub section: String,
    pub key: String,
    pub title: String,
    pub summary: Option<String>,
    pub changed_at: Option<DateTime<Local>>,
}

pub struct PreferenceList<'a> {
    items: &'a [PreferenceItem],
    selected: usize,
}

impl<'a> PreferenceList<'a> {
    pub fn new(items: &'a [PreferenceItem], selected: usize) -> Self {
        Self { items, selected }
    }

    /// List rows with section headers interleaved. Returns the rows and
    /// the row index of the selected item.
    fn rows(&self) -> (Vec<ListItem<'a>>, Option<usize>) {
        let mut rows = Vec::new();
        let mut selected_row = None;
        let mut section: Option<&str> = None;

        for (i, item) in self.items.iter().enumerate() {
            if section != Some(item.section.as_str()) {
                section = Some(item.section.as_str());
                rows.push(ListItem::new(Line::from(Span::styled(
                    item.section.clone(),
                    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                ))));
            }

            if i == self.selected {
                selected_row = Some(rows.len());
            }

            let summary = item.summary.as_deref().unwrap_or("");
            let mut detail = vec![Span::styled(format!("    {}", summary), Style::default().fg(Color::Gray))];
            if let Some(changed_at) = item.changed_at {
                detail.push(Span::styled(
                    format!("  (changed {})", changed_at.format("%Y-%m-%d %H:%M")),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            rows.push(ListItem::new(vec![
                Line::from(Span::styled(format!("  {}", item.title), Style::default().fg(Color::White))),
                Line::from(detail),
            ]));
        }

        (rows, selected_row)
    }
}

impl Widget for PreferenceList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta));

        let (rows, selected_row) = self.rows();
        let list = List::new(rows)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        let mut state = ListState::default();
        state.select(selected_row);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
