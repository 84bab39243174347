//! SonicBond
//!
//! Session state, volume controls and preference screens for the
//! SonicBond alert companion.

pub mod app;
pub mod audio;
pub mod db;
pub mod input;
pub mod preferences;
pub mod screen;
pub mod session;
pub mod ui;

pub use app::{App, AppConfig};
pub use session::{SessionState, SessionStatus};
