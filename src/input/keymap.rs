//! Keymap
//!
//! Key bindings mapped to actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by key presses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Main screen
    ToggleSettings,
    VolumeUp,
    VolumeDown,
    SetVolume(u32),
    ToggleMute,
    ToggleVibration,
    Start,
    Stop,
    ClearAlert,

    // Session
    LogIn,
    LogOut,
    SetUser(String),

    // Preferences
    ShowPreferences,
    MoveUp,
    MoveDown,
    Activate,
    EditValue,
    Back,

    // Mode changes
    EnterCommand,

    // Commands
    Invalid(String),

    // Confirmation
    Confirm,
    Cancel,

    // Application
    Quit,
    ForceQuit,

    // Text input
    InsertChar(char),
    DeleteChar,
    DeleteCharForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearLine,
    Submit,

    None,
}

/// Map key event to action on the main screen
pub fn normal_mode_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::ForceQuit,

        (KeyCode::Char('s'), _) => Action::ToggleSettings,
        (KeyCode::Char('k') | KeyCode::Char('+') | KeyCode::Up | KeyCode::Right, _) => Action::VolumeUp,
        (KeyCode::Char('j') | KeyCode::Char('-') | KeyCode::Down | KeyCode::Left, _) => Action::VolumeDown,
        (KeyCode::Char('m'), _) => Action::ToggleMute,
        (KeyCode::Char('v'), _) => Action::ToggleVibration,
        (KeyCode::Char('a') | KeyCode::Enter, _) => Action::Start,
        (KeyCode::Char('x') | KeyCode::Esc, _) => Action::Stop,
        (KeyCode::Char('C'), _) => Action::ClearAlert,
        (KeyCode::Char('p'), _) => Action::ShowPreferences,
        (KeyCode::Char(':'), _) => Action::EnterCommand,
        (KeyCode::Char('q'), _) => Action::Quit,
        (KeyCode::Char('Q'), _) => Action::ForceQuit,

        _ => Action::None,
    }
}

/// Map key event to action in the preference list
pub fn preferences_action(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('l') => Action::Activate,
        KeyCode::Char('e') => Action::EditValue,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h') => Action::Back,
        KeyCode::Char(':') => Action::EnterCommand,
        _ => Action::None,
    }
}

/// Map key event to action in text input modes
pub fn text_input_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::Cancel,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Backspace, _) => Action::DeleteChar,
        (KeyCode::Delete, _) => Action::DeleteCharForward,
        (KeyCode::Left, _) => Action::CursorLeft,
        (KeyCode::Right, _) => Action::CursorRight,
        (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => Action::CursorHome,
        (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::CursorEnd,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearLine,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),
        _ => Action::None,
    }
}

/// Map key event to action in confirm mode
pub fn confirm_action(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::Confirm,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::Cancel,
        _ => Action::None,
    }
}

/// Parse command string into action
pub fn parse_command(cmd: &str) -> Action {
    let cmd = cmd.trim();
    let (command, args) = match cmd.split_once(' ') {
        Some((command, args)) => (command, args.trim()),
        None => (cmd, ""),
    };

    match (command, args) {
        ("", _) => Action::None,
        ("q" | "quit", _) => Action::Quit,
        ("q!" | "quit!", _) => Action::ForceQuit,
        ("login", _) => Action::LogIn,
        ("logout", _) => Action::LogOut,
        ("user", name) if !name.is_empty() => Action::SetUser(name.to_string()),
        ("prefs" | "settings", _) => Action::ShowPreferences,
        ("vol" | "volume", level) => match level.parse() {
            Ok(level) => Action::SetVolume(level),
            Err(_) => Action::Invalid(cmd.to_string()),
        },
        ("clear", _) => Action::ClearAlert,
        _ => Action::Invalid(cmd.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_main_screen_keys() {
        assert_eq!(normal_mode_action(key(KeyCode::Char('s'))), Action::ToggleSettings);
        assert_eq!(normal_mode_action(key(KeyCode::Char('k'))), Action::VolumeUp);
        assert_eq!(normal_mode_action(key(KeyCode::Down)), Action::VolumeDown);
        assert_eq!(normal_mode_action(key(KeyCode::Char('m'))), Action::ToggleMute);
        assert_eq!(normal_mode_action(key(KeyCode::Char('v'))), Action::ToggleVibration);
        assert_eq!(normal_mode_action(key(KeyCode::Enter)), Action::Start);
        assert_eq!(normal_mode_action(key(KeyCode::Char('x'))), Action::Stop);
        assert_eq!(normal_mode_action(key(KeyCode::Char('C'))), Action::ClearAlert);
        assert_eq!(normal_mode_action(key(KeyCode::Char('z'))), Action::None);
    }

    #[test]
    fn test_ctrl_c_quits_immediately() {
        assert_eq!(normal_mode_action(key_ctrl(KeyCode::Char('c'))), Action::ForceQuit);
    }

    #[test]
    fn test_preferences_keys() {
        assert_eq!(preferences_action(key(KeyCode::Char('j'))), Action::MoveDown);
        assert_eq!(preferences_action(key(KeyCode::Up)), Action::MoveUp);
        assert_eq!(preferences_action(key(KeyCode::Enter)), Action::Activate);
        assert_eq!(preferences_action(key(KeyCode::Char('e'))), Action::EditValue);
        assert_eq!(preferences_action(key(KeyCode::Esc)), Action::Back);
    }

    #[test]
    fn test_text_input() {
        assert_eq!(text_input_action(key(KeyCode::Char('a'))), Action::InsertChar('a'));
        assert_eq!(text_input_action(key(KeyCode::Backspace)), Action::DeleteChar);
        assert_eq!(text_input_action(key(KeyCode::Enter)), Action::Submit);
        assert_eq!(text_input_action(key(KeyCode::Esc)), Action::Cancel);
        assert_eq!(text_input_action(key_ctrl(KeyCode::Char('a'))), Action::CursorHome);
        assert_eq!(text_input_action(key_ctrl(KeyCode::Char('u'))), Action::ClearLine);
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("q"), Action::Quit);
        assert_eq!(parse_command("q!"), Action::ForceQuit);
        assert_eq!(parse_command("logout"), Action::LogOut);
        assert_eq!(parse_command(" login "), Action::LogIn);
        assert_eq!(parse_command("user  field-ops "), Action::SetUser("field-ops".to_string()));
        assert_eq!(parse_command("vol 4"), Action::SetVolume(4));
        assert_eq!(parse_command("prefs"), Action::ShowPreferences);
        assert_eq!(parse_command(""), Action::None);
    }

    #[test]
    fn test_parse_invalid_command() {
        assert_eq!(parse_command("vol loud"), Action::Invalid("vol loud".to_string()));
        assert_eq!(parse_command("user"), Action::Invalid("user".to_string()));
        assert_eq!(parse_command("dance"), Action::Invalid("dance".to_string()));
    }

    #[test]
    fn test_confirm_action() {
        assert_eq!(confirm_action(key(KeyCode::Char('y'))), Action::Confirm);
        assert_eq!(confirm_action(key(KeyCode::Char('n'))), Action::Cancel);
        assert_eq!(confirm_action(key(KeyCode::Esc)), Action::Cancel);
    }
}
