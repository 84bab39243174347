//! Input Modes
//!
//! Which set of key bindings is active, plus the line buffer used by the
//! text-entry modes.

/// Input mode enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Main screen controls
    Normal,
    /// Preference list navigation
    Preferences,
    /// Editing a preference value
    Edit,
    /// Command line mode (:)
    Command,
    /// Confirmation dialog
    Confirm,
}

impl InputMode {
    /// Get mode indicator for status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "MAIN",
            Self::Preferences => "PREFS",
            Self::Edit => "EDIT",
            Self::Command => "COMMAND",
            Self::Confirm => "CONFIRM",
        }
    }

    /// Check if mode accepts text input
    pub fn is_text_input(&self) -> bool {
        matches!(self, Self::Edit | Self::Command)
    }
}

/// Mode state with associated data
#[derive(Debug, Clone)]
pub struct ModeState {
    /// Current mode
    pub mode: InputMode,
    /// Text buffer for input modes
    pub buffer: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            buffer: String::new(),
            cursor: 0,
        }
    }
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to a new mode, clearing the buffer
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn to_normal(&mut self) {
        self.set_mode(InputMode::Normal);
    }

    pub fn to_preferences(&mut self) {
        self.set_mode(InputMode::Preferences);
    }

    /// Start editing with the current value in the buffer
    pub fn to_edit(&mut self, initial: &str) {
        self.set_mode(InputMode::Edit);
        self.set_buffer(initial);
    }

    pub fn to_command(&mut self) {
        self.set_mode(InputMode::Command);
    }

    pub fn to_confirm(&mut self) {
        self.set_mode(InputMode::Confirm);
    }

    /// Insert character at cursor
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.buffer.remove(at);
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.buffer.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn get_buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, content: &str) {
        self.buffer = content.to_string();
        self.cursor = self.char_len();
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(chars)
            .map_or(self.buffer.len(), |(i, _)| i)
    }
}
