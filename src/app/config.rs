use std::path::PathBuf;
use std::time::Duration;

pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_path: PathBuf,
    pub message_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sonicbond");

        Self {
            db_path: data_dir.join("preferences.db"),
            log_path: data_dir.join("sonicbond.log"),
            message_timeout: Duration::from_secs(5),
        }
    }
}

impl AppConfig {
    /// Use a specific database file; the log file moves next to it
    pub fn with_db_path(path: impl Into<PathBuf>) -> Self {
        let db_path = path.into();
        let log_path = db_path.with_file_name("sonicbond.log");

        Self {
            db_path,
            log_path,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    LogOut,
    Quit,
}

impl PendingAction {
    pub fn confirm_message(&self) -> &'static str {
        match self {
            Self::LogOut => "End the current session?",
            Self::Quit => "Quit SonicBond?",
        }
    }
}
