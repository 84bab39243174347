//! UI Module
//!
//! Terminal user interface using ratatui.

pub mod components;
pub mod renderer;

// Re-exports
pub use components::{MessageType, PreferenceItem, SessionLine};
pub use renderer::{EditPrompt, Renderer, UiState, View};
