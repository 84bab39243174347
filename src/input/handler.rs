//! Input Handler
//!
//! Processes key events and dispatches to the bindings of the current mode.

use crossterm::event::KeyEvent;

use super::keymap::{
    confirm_action, normal_mode_action, parse_command, preferences_action, text_input_action, Action,
};
use super::modes::{InputMode, ModeState};

/// Input handler that processes key events based on current mode
pub struct InputHandler;

impl InputHandler {
    /// Process a key event and return the resulting action.
    ///
    /// Editing keys in text modes are applied to the buffer directly.
    /// Submitting a command parses it; submitting an edit returns
    /// `Submit` with the buffer left in place for the caller to read.
    pub fn handle_key_event(key: KeyEvent, state: &mut ModeState) -> Action {
        match state.mode {
            InputMode::Normal => normal_mode_action(key),
            InputMode::Preferences => preferences_action(key),
            InputMode::Confirm => confirm_action(key),
            InputMode::Edit | InputMode::Command => {
                match text_input_action(key) {
                    Action::InsertChar(c) => state.insert_char(c),
                    Action::DeleteChar => state.delete_char(),
                    Action::DeleteCharForward => state.delete_char_forward(),
                    Action::CursorLeft => state.cursor_left(),
                    Action::CursorRight => state.cursor_right(),
                    Action::CursorHome => state.cursor_home(),
                    Action::CursorEnd => state.cursor_end(),
                    Action::ClearLine => state.clear_buffer(),
                    Action::Submit if state.mode == InputMode::Command => {
                        let action = parse_command(state.get_buffer());
                        state.to_normal();
                        return action;
                    }
                    Action::Submit => return Action::Submit,
                    Action::Cancel => return Action::Cancel,
                    _ => {}
                }
                Action::None
            }
        }
    }
}
