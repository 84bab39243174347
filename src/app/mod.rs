//! Application State
//!
//! Ties the session, the main screen controls and the preference panel
//! to key input and rendering.

mod actions;
mod config;
mod preferences;

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::Frame;
use tracing::info;

use crate::audio::SoftwareMixer;
use crate::db::DatabaseConfig;
use crate::input::{InputHandler, InputMode, ModeState};
use crate::screen::MainScreen;
use crate::session::SessionState;
use crate::ui::renderer::{EditPrompt, Renderer, UiState, View};
use crate::ui::{MessageType, SessionLine};

pub use config::{AppConfig, PendingAction};
pub use preferences::PreferencesPanel;

pub struct App {
    pub config: AppConfig,
    pub session: SessionState,
    pub audio: SoftwareMixer,
    pub screen: MainScreen,
    pub preferences: PreferencesPanel,
    pub mode_state: ModeState,
    pub view: View,
    pub message: Option<(String, MessageType, Instant)>,
    pub pending_action: Option<PendingAction>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let preferences = PreferencesPanel::open(DatabaseConfig::with_path(&config.db_path))?;
        Ok(Self::with_parts(config, preferences, SoftwareMixer::new()))
    }

    /// Assemble an application from already opened parts
    pub fn with_parts(config: AppConfig, preferences: PreferencesPanel, audio: SoftwareMixer) -> Self {
        let screen = MainScreen::new(&audio);

        let mut session = SessionState::new();
        session.initialize();

        Self {
            config,
            session,
            audio,
            screen,
            preferences,
            mode_state: ModeState::new(),
            view: View::Main,
            message: None,
            pending_action: None,
            should_quit: false,
        }
    }

    /// End the session before exit
    pub fn shutdown(&mut self) {
        self.session.teardown();
        info!("application shut down");
    }

    /// Handle a key press. Returns `true` when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        let action = InputHandler::handle_key_event(key, &mut self.mode_state);
        let exit = self.execute_action(action)?;
        self.restore_base_mode();
        Ok(exit || self.should_quit)
    }

    /// Command mode drops back to Normal on submit; put the preference
    /// view back into its own bindings.
    fn restore_base_mode(&mut self) {
        if self.view == View::Preferences && self.mode_state.mode == InputMode::Normal {
            self.mode_state.to_preferences();
        }
    }

    /// Mode that keys return to when leaving a transient mode
    fn base_mode(&mut self) {
        match self.view {
            View::Main => self.mode_state.to_normal(),
            View::Preferences => self.mode_state.to_preferences(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.check_message_expiry();

        let session_label = format!(
            "{} · {}",
            self.session.user_id().unwrap_or("no session"),
            self.session.mode().label()
        );
        let message = self.message.as_ref().map(|(m, t, _)| (m.as_str(), *t));
        let command_buffer =
            (self.mode_state.mode == InputMode::Command).then(|| self.mode_state.get_buffer());
        let confirm_message = self.pending_action.as_ref().map(|a| a.confirm_message());
        let edit_prompt = (self.mode_state.mode == InputMode::Edit)
            .then(|| self.preferences.selected_def())
            .flatten()
            .map(|def| EditPrompt {
                title: def.title.as_str(),
                value: self.mode_state.get_buffer(),
                cursor: self.mode_state.cursor,
            });

        let state = UiState {
            view: self.view,
            mode: self.mode_state.mode,
            screen: &self.screen,
            session: SessionLine {
                user_id: self.session.user_id(),
                status: self.session.status(),
                mode: self.session.mode(),
            },
            session_label: &session_label,
            preferences: self.preferences.items(),
            selected_preference: self.preferences.selected(),
            command_buffer,
            message,
            confirm_message,
            edit_prompt,
        };

        Renderer::render(frame, &state);
    }

    fn check_message_expiry(&mut self) {
        let timeout = self.config.message_timeout;
        let expired = self
            .message
            .as_ref()
            .is_some_and(|(_, _, time)| time.elapsed() > timeout);

        if expired {
            self.message = None;
        }
    }

    pub fn set_message(&mut self, msg: &str, msg_type: MessageType) {
        self.message = Some((msg.to_string(), msg_type, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioStream, VolumeControl};
    use crate::session::SessionStatus;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn test_app() -> App {
        let preferences = PreferencesPanel::open(DatabaseConfig::in_memory()).unwrap();
        App::with_parts(AppConfig::default(), preferences, SoftwareMixer::new())
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn type_command(app: &mut App, cmd: &str) -> bool {
        press(app, KeyCode::Char(':'));
        for c in cmd.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter)
    }

    #[test]
    fn test_starts_with_active_session() {
        let app = test_app();
        assert_eq!(app.session.status(), SessionStatus::Active);
        assert_eq!(app.session.user_id(), Some("defaultuser"));
        assert_eq!(app.view, View::Main);
    }

    #[test]
    fn test_shutdown_tears_down_session() {
        let mut app = test_app();
        app.shutdown();
        assert_eq!(app.session.user_id(), None);
        assert_eq!(app.session.status(), SessionStatus::Closed);
    }

    #[test]
    fn test_settings_and_volume_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('s'));
        assert!(app.screen.settings_open());

        let before = app.screen.volume.value;
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.audio.volume(AudioStream::Alarm), before - 1);
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let mut app = test_app();
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.mode_state.mode, InputMode::Confirm);

        assert!(!press(&mut app, KeyCode::Char('n')));
        assert_eq!(app.mode_state.mode, InputMode::Normal);

        press(&mut app, KeyCode::Char('q'));
        assert!(press(&mut app, KeyCode::Char('y')));
    }

    #[test]
    fn test_logout_and_login_commands() {
        let mut app = test_app();
        type_command(&mut app, "logout");
        assert_eq!(app.pending_action, Some(PendingAction::LogOut));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.session.user_id(), None);

        type_command(&mut app, "login");
        assert!(app.session.is_active());
        assert_eq!(app.session.user_id(), Some("defaultuser"));
    }

    #[test]
    fn test_user_command_sets_id() {
        let mut app = test_app();
        type_command(&mut app, "user ops");
        assert_eq!(app.session.user_id(), Some("ops"));
    }

    #[test]
    fn test_unknown_command_reports_error() {
        let mut app = test_app();
        type_command(&mut app, "dance");
        let (msg, kind, _) = app.message.clone().unwrap();
        assert!(msg.contains("dance"));
        assert_eq!(kind, MessageType::Error);
    }

    #[test]
    fn test_preferences_view_flow() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.view, View::Preferences);
        assert_eq!(app.mode_state.mode, InputMode::Preferences);

        for _ in 0..3 {
            press(&mut app, KeyCode::Char('j'));
        }
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode_state.mode, InputMode::Edit);
        assert_eq!(app.mode_state.get_buffer(), "180");

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        for c in "60".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode_state.mode, InputMode::Preferences);
        assert_eq!(app.preferences.items()[3].summary.as_deref(), Some("1 hour"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, View::Main);
        assert_eq!(app.mode_state.mode, InputMode::Normal);
    }

    #[test]
    fn test_command_from_preferences_returns_to_list() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('p'));
        type_command(&mut app, "user field");
        assert_eq!(app.view, View::Preferences);
        assert_eq!(app.mode_state.mode, InputMode::Preferences);
    }
}
