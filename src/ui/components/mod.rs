//! UI Components
//!
//! Widgets for the main screen and the preference list.

pub mod controls;
pub mod dialogs;
pub mod preferences;
pub mod statusline;

// Re-exports
pub use controls::{ControlsPanel, SessionLine};
pub use dialogs::{ConfirmDialog, InputDialog};
pub use preferences::{PreferenceItem, PreferenceList};
pub use statusline::{HelpBar, MessageType, StatusLine};
