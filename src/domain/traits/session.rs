use async_trait::async_trait;
use crate::application::errors::BotError;
use crate::domain::entities::{Credentials, SessionEvent};

/// A live connection to the messaging network
#[async_trait]
pub trait Session: Send + Sync {
    /// Next event, or `None` once the session has ended
    async fn next_event(&mut self) -> Option<SessionEvent>;

    /// Send a text message to a chat, returning the message id
    async fn send_text(&self, conversation_id: &str, text: &str) -> Result<String, BotError>;
}

/// Opens sessions; called again on every reconnect
#[async_trait]
pub trait SessionConnector: Send + Sync {
    async fn connect(&self, credentials: Option<Credentials>) -> Result<Box<dyn Session>, BotError>;
}
