//! Controls Panel
//!
//! Renders the main screen: session line, start/stop button and the
//! settings panel with the volume gauge and the two switches.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Widget},
};

use crate::screen::{MainScreen, Toggle};
use crate::session::{ConnectionMode, SessionStatus};

/// Session summary shown above the controls
#[derive(Debug, Clone, Copy)]
pub struct SessionLine<'a> {
    pub user_id: Option<&'a str>,
    pub status: SessionStatus,
    pub mode: ConnectionMode,
}

pub struct ControlsPanel<'a> {
    screen: &'a MainScreen,
    session: SessionLine<'a>,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(screen: &'a MainScreen, session: SessionLine<'a>) -> Self {
        Self { screen, session }
    }

    fn session_line(&self) -> Line<'a> {
        let (status, color) = match self.session.status {
            SessionStatus::Active => ("active", Color::Green),
            SessionStatus::Closed => ("closed", Color::Red),
        };

        Line::from(vec![
            Span::styled("User: ", Style::default().fg(Color::Gray)),
            Span::styled(
                self.session.user_id.unwrap_or("-"),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(status, Style::default().fg(color)),
            Span::styled(format!(" ({})", self.session.mode.label()), Style::default().fg(Color::DarkGray)),
        ])
    }

    fn button_line(&self) -> Line<'a> {
        let (label, color) = if self.screen.stop_visible {
            ("[ STOP ]", Color::Red)
        } else {
            ("[ START ]", Color::Green)
        };

        Line::from(Span::styled(
            label,
            Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD),
        ))
    }
}

fn switch_line(label: &str, toggle: Toggle) -> Line<'_> {
    let (mark, color) = if toggle.checked {
        ("[x]", Color::Green)
    } else {
        ("[ ]", Color::DarkGray)
    };

    Line::from(vec![
        Span::styled(mark, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(label, Style::default().fg(Color::White)),
    ])
}

impl Widget for ControlsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" SonicBond ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta));

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        Paragraph::new(self.session_line()).render(rows[0], buf);
        Paragraph::new(self.button_line()).render(rows[2], buf);

        if !self.screen.settings_open() {
            let hint = Line::from(Span::styled(
                "Press 's' for volume settings",
                Style::default().fg(Color::DarkGray),
            ));
            Paragraph::new(hint).render(rows[4], buf);
            return;
        }

        let slider = self.screen.volume;
        let gauge_color = if slider.activated { Color::Magenta } else { Color::DarkGray };
        Gauge::default()
            .block(Block::default().title(" Alarm volume ").borders(Borders::ALL))
            .gauge_style(Style::default().fg(gauge_color))
            .ratio(slider.ratio().clamp(0.0, 1.0))
            .label(format!("{}/{}", slider.value, slider.max))
            .render(rows[4], buf);

        if self.screen.mute.visible {
            Paragraph::new(switch_line("Mute", self.screen.mute)).render(rows[5], buf);
        }
        if self.screen.vibration.visible {
            Paragraph::new(switch_line("Vibration", self.screen.vibration)).render(rows[6], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoftwareMixer;
    use crate::screen::ScreenEvent;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    fn session_line() -> SessionLine<'static> {
        SessionLine {
            user_id: Some("defaultuser"),
            status: SessionStatus::Active,
            mode: ConnectionMode::Offline,
        }
    }

    #[test]
    fn test_renders_session_and_start() {
        let mixer = SoftwareMixer::new();
        let screen = MainScreen::new(&mixer);
        let area = Rect::new(0, 0, 50, 12);
        let mut buf = Buffer::empty(area);

        ControlsPanel::new(&screen, session_line()).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("defaultuser"));
        assert!(text.contains("START"));
        assert!(!text.contains("Vibration"));
    }

    #[test]
    fn test_renders_open_settings() {
        let mut mixer = SoftwareMixer::new();
        let mut screen = MainScreen::new(&mixer);
        screen.handle(ScreenEvent::ToggleSettings, &mut mixer);
        screen.handle(ScreenEvent::Start, &mut mixer);

        let area = Rect::new(0, 0, 50, 12);
        let mut buf = Buffer::empty(area);
        ControlsPanel::new(&screen, session_line()).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("STOP"));
        assert!(text.contains("Mute"));
        assert!(text.contains("Vibration"));
    }
}
