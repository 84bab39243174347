use anyhow::Result;
use tracing::{debug, warn};

use crate::input::Action;
use crate::screen::{EventOutcome, ScreenEvent};
use crate::ui::renderer::View;
use crate::ui::MessageType;

use super::config::PendingAction;
use super::App;

impl App {
    pub fn execute_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::ToggleSettings => self.screen_event(ScreenEvent::ToggleSettings),
            Action::VolumeUp => self.screen_event(ScreenEvent::VolumeUp),
            Action::VolumeDown => self.screen_event(ScreenEvent::VolumeDown),
            Action::SetVolume(level) => self.screen_event(ScreenEvent::VolumeChanged(level)),
            Action::ToggleMute => self.screen_event(ScreenEvent::ToggleMute),
            Action::ToggleVibration => self.screen_event(ScreenEvent::ToggleVibration),
            Action::Start => self.screen_event(ScreenEvent::Start),
            Action::Stop => self.screen_event(ScreenEvent::Stop),
            Action::ClearAlert => self.screen_event(ScreenEvent::ClearAlert),

            Action::LogIn => self.log_in(),
            Action::LogOut => self.request(PendingAction::LogOut),
            Action::SetUser(name) => self.set_user(&name),

            Action::ShowPreferences => self.show_preferences()?,
            Action::MoveUp => self.preferences.move_up(),
            Action::MoveDown => self.preferences.move_down(),
            Action::Activate => self.activate_preference()?,
            Action::EditValue => self.edit_preference()?,
            Action::Back => self.go_back(),

            Action::EnterCommand => self.mode_state.to_command(),
            Action::Invalid(cmd) => {
                self.set_message(&format!("Unknown command: {}", cmd), MessageType::Error);
            }

            Action::Submit => self.submit_edit()?,
            Action::Confirm => self.handle_confirm(),
            Action::Cancel => self.cancel_pending(),

            Action::Quit => self.request(PendingAction::Quit),
            Action::ForceQuit => return self.quit(),

            _ => {}
        }

        Ok(false)
    }

    fn screen_event(&mut self, event: ScreenEvent) {
        match self.screen.handle(event, &mut self.audio) {
            EventOutcome::NothingToClear => self.set_message("No active alert", MessageType::Info),
            EventOutcome::Ignored => debug!(?event, "event ignored"),
            EventOutcome::Updated => {}
        }
    }

    fn log_in(&mut self) {
        self.session.initialize();
        self.set_message("Session started", MessageType::Success);
    }

    fn set_user(&mut self, name: &str) {
        self.session.set_user_id(name);
        self.set_message(&format!("User set to {}", name), MessageType::Info);
    }

    fn request(&mut self, action: PendingAction) {
        self.pending_action = Some(action);
        self.mode_state.to_confirm();
    }

    fn show_preferences(&mut self) -> Result<()> {
        self.preferences.refresh()?;
        self.view = View::Preferences;
        self.mode_state.to_preferences();
        Ok(())
    }

    fn go_back(&mut self) {
        self.view = View::Main;
        self.mode_state.to_normal();
    }

    fn activate_preference(&mut self) -> Result<()> {
        let summary = self.preferences.activate()?;
        self.report_summary(summary);
        Ok(())
    }

    fn edit_preference(&mut self) -> Result<()> {
        let value = self.preferences.selected_value()?;
        self.mode_state.to_edit(&value);
        Ok(())
    }

    fn submit_edit(&mut self) -> Result<()> {
        let value = self.mode_state.get_buffer().to_string();
        let summary = self.preferences.change_selected(&value)?;
        self.report_summary(summary);
        self.base_mode();
        Ok(())
    }

    fn report_summary(&mut self, summary: Option<String>) {
        match summary {
            Some(text) => self.set_message(&format!("Set to {}", text), MessageType::Success),
            None => {
                warn!("stored value has no summary");
                self.set_message("Value saved", MessageType::Warning);
            }
        }
    }

    fn cancel_pending(&mut self) {
        self.pending_action = None;
        self.base_mode();
    }

    fn handle_confirm(&mut self) {
        let Some(action) = self.pending_action.take() else {
            self.base_mode();
            return;
        };

        match action {
            PendingAction::LogOut => {
                self.session.teardown();
                self.set_message("Session ended", MessageType::Info);
            }
            PendingAction::Quit => self.should_quit = true,
        }

        self.base_mode();
    }

    fn quit(&mut self) -> Result<bool> {
        self.should_quit = true;
        Ok(true)
    }
}
