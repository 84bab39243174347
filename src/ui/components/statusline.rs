//! Status Line Component
//!
//! Displays mode indicator, messages and session info.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::input::InputMode;

/// Message type for status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::White,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Status line widget
pub struct StatusLine<'a> {
    mode: InputMode,
    command_buffer: Option<&'a str>,
    message: Option<(&'a str, MessageType)>,
    session: Option<&'a str>,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            command_buffer: None,
            message: None,
            session: None,
        }
    }

    pub fn command_buffer(mut self, buffer: &'a str) -> Self {
        self.command_buffer = Some(buffer);
        self
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }

    pub fn session(mut self, label: &'a str) -> Self {
        self.session = Some(label);
        self
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mut x = area.x;

        let mode_style = match self.mode {
            InputMode::Normal => Style::default().fg(Color::Black).bg(Color::Blue),
            InputMode::Preferences => Style::default().fg(Color::Black).bg(Color::Magenta),
            InputMode::Edit => Style::default().fg(Color::Black).bg(Color::Green),
            InputMode::Command => Style::default().fg(Color::Black).bg(Color::Red),
            InputMode::Confirm => Style::default().fg(Color::Black).bg(Color::Yellow),
        };

        let mode_text = format!(" {} ", self.mode.indicator());
        buf.set_string(x, area.y, &mode_text, mode_style.add_modifier(Modifier::BOLD));
        x += mode_text.len() as u16 + 1;

        if let Some(buffer) = self.command_buffer {
            let cmd_text = format!(":{}", buffer);
            buf.set_string(x, area.y, &cmd_text, Style::default().fg(Color::White).bg(Color::DarkGray));
        } else if let Some((msg, msg_type)) = self.message {
            buf.set_string(x, area.y, msg, Style::default().fg(msg_type.color()).bg(Color::DarkGray));
        }

        if let Some(session) = self.session {
            let right_x = area.x + area.width.saturating_sub(session.chars().count() as u16 + 1);
            buf.set_string(right_x, area.y, session, Style::default().fg(Color::Gray).bg(Color::DarkGray));
        }
    }
}

/// Help bar widget
pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl HelpBar<'_> {
    pub fn for_mode(mode: InputMode) -> Self {
        let hints = match mode {
            InputMode::Normal => vec![
                ("s", "settings"),
                ("j/k", "volume"),
                ("m", "mute"),
                ("v", "vibrate"),
                ("a/x", "start/stop"),
                ("C", "clear"),
                ("p", "prefs"),
                (":", "command"),
                ("q", "quit"),
            ],
            InputMode::Preferences => vec![
                ("j/k", "navigate"),
                ("Enter", "change"),
                ("e", "edit"),
                ("Esc", "back"),
            ],
            InputMode::Edit | InputMode::Command => vec![
                ("Esc", "cancel"),
                ("Enter", "confirm"),
                ("C-u", "clear"),
            ],
            InputMode::Confirm => vec![("y", "yes"), ("n", "no")],
        };
        Self { hints }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
        }
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
