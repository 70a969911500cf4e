//! Bot runner - Drives sessions and feeds their messages to the router

use crate::application::errors::BotError;
use crate::application::messaging::CommandRouter;
use crate::domain::entities::{ConnectionState, ConnectionUpdate, DisconnectError, InboundMessage, SessionEvent};
use crate::domain::traits::{Session, SessionConnector};
use crate::infrastructure::storage::CredentialStore;
use super::retry::{RetryPolicy, RetryReason};

/// Which conversations the bot answers in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConversationScope {
    #[default]
    Any,
    Only(String),
}

impl ConversationScope {
    pub fn from_target(target: Option<String>) -> Self {
        target.map(ConversationScope::Only).unwrap_or_default()
    }

    pub fn admits(&self, conversation_id: &str) -> bool {
        match self {
            ConversationScope::Any => true,
            ConversationScope::Only(target) => target == conversation_id,
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The device was unlinked; reconnecting is pointless
    LoggedOut(String),
    /// Anything else; worth reconnecting
    Disconnected(String),
}

impl From<DisconnectError> for SessionOutcome {
    fn from(e: DisconnectError) -> Self {
        if e.logged_out {
            SessionOutcome::LoggedOut(e.message)
        } else {
            SessionOutcome::Disconnected(e.message)
        }
    }
}

/// Processes session events one at a time
pub struct BotRunner {
    router: CommandRouter,
    scope: ConversationScope,
    credentials: CredentialStore,
}

impl BotRunner {
    pub fn new(router: CommandRouter, scope: ConversationScope, credentials: CredentialStore) -> Self {
        Self {
            router,
            scope,
            credentials,
        }
    }

    /// Route one message and send the reply, if any
    pub async fn handle_message(&self, session: &dyn Session, message: &InboundMessage) -> Result<(), BotError> {
        if message.from_me {
            return Ok(());
        }
        if !self.scope.admits(&message.conversation_id) {
            tracing::trace!("Ignoring message from {}", message.conversation_id);
            return Ok(());
        }

        let Some(reply) = self.router.route(message).await? else {
            return Ok(());
        };

        tracing::info!(
            "Replying in {}: {}",
            message.conversation_id,
            reply.chars().take(100).collect::<String>()
        );
        session.send_text(&message.conversation_id, &reply).await?;
        Ok(())
    }

    /// Consume events until the session closes
    pub async fn run_session(&self, session: &mut dyn Session) -> SessionOutcome {
        loop {
            let Some(event) = session.next_event().await else {
                return SessionOutcome::Disconnected("event stream ended".to_string());
            };

            match event {
                SessionEvent::CredentialsUpdated(credentials) => {
                    if let Err(e) = self.credentials.save(&credentials).await {
                        tracing::error!("Failed to save credentials: {}", e);
                    }
                }
                SessionEvent::ConnectionStateChanged(update) => {
                    if let Some(outcome) = self.on_connection_update(update) {
                        return outcome;
                    }
                }
                SessionEvent::MessageReceived(message) => {
                    if let Err(e) = self.handle_message(&*session, &message).await {
                        tracing::error!("Error handling message {}: {}", message.id, e);
                    }
                }
            }
        }
    }

    fn on_connection_update(&self, update: ConnectionUpdate) -> Option<SessionOutcome> {
        if let Some(code) = &update.pairing_code {
            tracing::info!("📲 Pairing code received, link the device with: {}", code);
        }

        match update.state {
            ConnectionState::Connecting => {
                tracing::debug!("Connecting...");
                None
            }
            ConnectionState::Open => {
                tracing::info!("✅ Bot is ready and connected!");
                None
            }
            ConnectionState::Closed => {
                let error = update
                    .error
                    .unwrap_or_else(|| DisconnectError::new("unknown error"));
                tracing::warn!("Connection closed due to {}", error.message);
                Some(error.into())
            }
        }
    }

    /// Connect, run, and reconnect per `policy` until logged out.
    ///
    /// Returns `Ok` after a logout and an error once the policy gives up.
    pub async fn supervise(&self, connector: &dyn SessionConnector, policy: &RetryPolicy) -> Result<(), BotError> {
        let mut attempt: u32 = 0;
        loop {
            let credentials = self.credentials.load().await.unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable credentials: {}", e);
                None
            });

            let reason = match connector.connect(credentials).await {
                Ok(mut session) => {
                    attempt = 0;
                    match self.run_session(session.as_mut()).await {
                        SessionOutcome::LoggedOut(reason) => {
                            tracing::warn!("Logged out ({}), not reconnecting", reason);
                            return Ok(());
                        }
                        SessionOutcome::Disconnected(_) => RetryReason::Disconnected,
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to start bot: {}", e);
                    RetryReason::StartupFailed
                }
            };

            attempt += 1;
            let Some(delay) = policy.next_delay(attempt, reason) else {
                return Err(BotError::Session(format!(
                    "giving up after {} attempts",
                    attempt - 1
                )));
            };
            tracing::info!("Reconnecting in {} seconds...", delay.as_secs());
            tokio::time::sleep(delay).await;
        }
    }
}
