//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Command errors. The display text is the reply sent back to the chat.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("❌ Usage: {0}")]
    Usage(String),

    #[error("❌ Invalid format. Use: {0}")]
    InvalidFormat(String),

    /// Carries the display name, prefix included
    #[error("❌ Command {0} not found.")]
    NotFound(String),

    #[error("⚠️ Command {0} already exists.")]
    AlreadyExists(String),

    #[error("❌ Invalid UID or Zone.")]
    ProfileNotFound,

    #[error("❌ Failed to fetch ML account info. Please try again later.")]
    LookupFailed,
}

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

/// Lookup adapter errors
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("No account for user {user_id} in zone {zone_id}")]
    NotFound { user_id: String, zone_id: String },
}

impl From<LookupError> for CommandError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound { .. } => CommandError::ProfileNotFound,
            _ => CommandError::LookupFailed,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
