//! Session State
//!
//! Holds the user identifier and credential for the lifetime of the
//! main screen. Initialization and teardown never fail.

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};
use zeroize::Zeroize;

use super::link::{AlertListener, ConnectionMode, ServerLink};

pub const DEFAULT_USER_ID: &str = "defaultuser";
pub const DEFAULT_CREDENTIAL: &str = "defaultpw";

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Identifier and credential are held
    Active,
    /// Torn down, both fields cleared
    Closed,
}

/// Session state owned by the main screen
pub struct SessionState {
    user_id: Option<String>,
    credential: Option<SecretString>,
    status: SessionStatus,
    mode: ConnectionMode,
    server: Option<Box<dyn ServerLink>>,
    alerts: Option<Box<dyn AlertListener>>,
    listening: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Create a session holding the default identifier and credential
    pub fn new() -> Self {
        let mut session = Self {
            user_id: None,
            credential: None,
            status: SessionStatus::Active,
            mode: ConnectionMode::Offline,
            server: None,
            alerts: None,
            listening: false,
        };
        session.load_defaults();
        session
    }

    /// Attach a server link used by `initialize`
    pub fn with_server_link(mut self, link: Box<dyn ServerLink>) -> Self {
        self.server = Some(link);
        self
    }

    /// Attach an alert listener started by `initialize`
    pub fn with_alert_listener(mut self, listener: Box<dyn AlertListener>) -> Self {
        self.alerts = Some(listener);
        self
    }

    /// Reset to the default credentials and bring up collaborators.
    ///
    /// Always returns `true`. A refused login only puts the session in
    /// offline mode.
    pub fn initialize(&mut self) -> bool {
        self.release_links();
        self.load_defaults();
        self.status = SessionStatus::Active;

        self.mode = match (self.server.as_mut(), &self.user_id, &self.credential) {
            (Some(server), Some(user_id), Some(credential)) => {
                if server.log_in(user_id, credential) {
                    ConnectionMode::Networked
                } else {
                    ConnectionMode::Offline
                }
            }
            _ => ConnectionMode::Offline,
        };

        if let Some(alerts) = self.alerts.as_mut() {
            alerts.start();
            self.listening = true;
        }

        info!(mode = self.mode.label(), "session initialized");
        true
    }

    /// Clear both fields and release collaborators. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        self.release_links();
        self.server = None;
        self.alerts = None;

        if let Some(mut user_id) = self.user_id.take() {
            user_id.zeroize();
        }
        self.credential = None;

        if self.status == SessionStatus::Active {
            debug!("session closed");
        }
        self.status = SessionStatus::Closed;
        self.mode = ConnectionMode::Offline;
    }

    /// Disconnect a live server link and stop a running listener
    fn release_links(&mut self) {
        if self.mode == ConnectionMode::Networked {
            if let Some(server) = self.server.as_mut() {
                server.disconnect();
            }
            self.mode = ConnectionMode::Offline;
        }
        if self.listening {
            if let Some(alerts) = self.alerts.as_mut() {
                alerts.stop();
            }
            self.listening = false;
        }
    }

    pub fn set_user_id(&mut self, value: impl Into<String>) {
        self.user_id = Some(value.into());
    }

    pub fn set_credential(&mut self, value: impl Into<String>) {
        self.credential = Some(protect(value.into()));
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn credential(&self) -> Option<&SecretString> {
        self.credential.as_ref()
    }

    /// Credential as plain text
    pub fn expose_credential(&self) -> Option<&str> {
        self.credential.as_ref().map(|c| c.expose_secret())
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    pub fn mode(&self) -> ConnectionMode {
        self.mode
    }

    fn load_defaults(&mut self) {
        self.set_user_id(DEFAULT_USER_ID);
        self.set_credential(DEFAULT_CREDENTIAL);
    }
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("user_id", &self.user_id)
            .field("credential", &self.credential)
            .field("status", &self.status)
            .field("mode", &self.mode)
            .finish()
    }
}

/// Wrap a credential for storage. The value is kept verbatim; no
/// transformation is applied.
fn protect(value: String) -> SecretString {
    SecretString::from(value)
}
