//! Session Collaborators
//!
//! Capabilities a session can be wired to. No implementation ships with
//! this crate; hosts that have a server or an alert source provide one.

use secrecy::SecretString;

/// How the session is connected after initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionMode {
    /// A server link accepted the credentials
    Networked,
    /// No server link, or the login was refused
    #[default]
    Offline,
}

impl ConnectionMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Networked => "online",
            Self::Offline => "offline",
        }
    }
}

/// Connection to a remote alert server
pub trait ServerLink {
    /// Attempt a login. Returns `true` when the server accepted it.
    fn log_in(&mut self, user_id: &str, credential: &SecretString) -> bool;

    /// Drop the connection
    fn disconnect(&mut self);
}

/// Local alert listener
pub trait AlertListener {
    fn start(&mut self);
    fn stop(&mut self);
}
