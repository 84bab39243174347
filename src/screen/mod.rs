//! Screen Module
//!
//! Main screen controls as plain state driven by events.

pub mod main_screen;

// Re-exports
pub use main_screen::{MainScreen, Slider, Toggle};

/// Events raised by the main screen controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Show or hide the settings panel
    ToggleSettings,
    /// Slider moved to a new level
    VolumeChanged(u32),
    VolumeUp,
    VolumeDown,
    ToggleMute,
    ToggleVibration,
    Start,
    Stop,
    ClearAlert,
}

/// Result of handling a screen event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Control state changed
    Updated,
    /// Event had no effect in the current state
    Ignored,
    /// Clear was requested but there is no alert
    NothingToClear,
}
