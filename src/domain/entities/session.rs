use serde::{Deserialize, Serialize};

use super::InboundMessage;

/// Opaque session credentials; the session defines the shape, we only persist it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials(pub serde_json::Value);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Open,
    Closed,
}

/// Why the session went away
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisconnectError {
    pub message: String,
    /// The account was unlinked; reconnecting cannot succeed
    pub logged_out: bool,
}

impl DisconnectError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            logged_out: false,
        }
    }

    pub fn logged_out(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            logged_out: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionUpdate {
    pub state: ConnectionState,
    pub error: Option<DisconnectError>,
    /// QR or pairing code to show the operator while linking a device
    pub pairing_code: Option<String>,
}

impl ConnectionUpdate {
    pub fn new(state: ConnectionState) -> Self {
        Self {
            state,
            error: None,
            pairing_code: None,
        }
    }

    pub fn closed(error: DisconnectError) -> Self {
        Self {
            state: ConnectionState::Closed,
            error: Some(error),
            pairing_code: None,
        }
    }

    pub fn pairing(code: impl Into<String>) -> Self {
        Self {
            state: ConnectionState::Connecting,
            error: None,
            pairing_code: Some(code.into()),
        }
    }
}

/// Events emitted by a live session
#[derive(Debug, Clone)]
pub enum SessionEvent {
    CredentialsUpdated(Credentials),
    ConnectionStateChanged(ConnectionUpdate),
    MessageReceived(InboundMessage),
}
