//! Renderer
//!
//! Main rendering logic for the application.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::components::{
    ConfirmDialog, ControlsPanel, HelpBar, InputDialog, MessageType, PreferenceItem, PreferenceList,
    SessionLine, StatusLine,
};
use crate::input::InputMode;
use crate::screen::MainScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Main,
    Preferences,
}

pub struct UiState<'a> {
    pub view: View,
    pub mode: InputMode,
    pub screen: &'a MainScreen,
    pub session: SessionLine<'a>,
    pub session_label: &'a str,
    pub preferences: &'a [PreferenceItem],
    pub selected_preference: usize,
    pub command_buffer: Option<&'a str>,
    pub message: Option<(&'a str, MessageType)>,
    pub confirm_message: Option<&'a str>,
    pub edit_prompt: Option<EditPrompt<'a>>,
}

pub struct EditPrompt<'a> {
    pub title: &'a str,
    pub value: &'a str,
    pub cursor: usize,
}

pub struct Renderer;

impl Renderer {
    pub fn render(frame: &mut Frame, state: &UiState) {
        let size = frame.area();
        let chunks = create_main_layout(size);

        render_content(frame, chunks[0], state);
        render_status_line(frame, chunks[1], state);
        frame.render_widget(HelpBar::for_mode(state.mode), chunks[2]);
        render_overlays(frame, size, state);
    }
}

fn create_main_layout(size: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size)
}

fn render_content(frame: &mut Frame, area: Rect, state: &UiState) {
    match state.view {
        View::Main => frame.render_widget(ControlsPanel::new(state.screen, state.session), area),
        View::Preferences => frame.render_widget(
            PreferenceList::new(state.preferences, state.selected_preference),
            area,
        ),
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &UiState) {
    let mut status = StatusLine::new(state.mode).session(state.session_label);

    if state.mode == InputMode::Command {
        if let Some(buffer) = state.command_buffer {
            status = status.command_buffer(buffer);
        }
    } else if let Some((msg, msg_type)) = state.message {
        status = status.message(msg, msg_type);
    }

    frame.render_widget(status, area);
}

fn render_overlays(frame: &mut Frame, area: Rect, state: &UiState) {
    if state.mode == InputMode::Confirm {
        if let Some(msg) = state.confirm_message {
            frame.render_widget(ConfirmDialog::new(" Confirm ", msg), area);
        }
        return;
    }

    if let Some(prompt) = &state.edit_prompt {
        let dialog = InputDialog::new(" Edit value ", prompt.title, prompt.value, prompt.cursor);
        frame.render_widget(dialog, area);
    }
}
