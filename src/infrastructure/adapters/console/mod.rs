//! Console adapter for development/testing
//!
//! Each stdin line is one inbound message. `@alice .ping` sends `.ping` as
//! `alice`; lines without a sender come from the console user. Stdin can only
//! be read once, so end of input (or a read error) ends the session for good.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use crate::application::errors::BotError;
use crate::domain::entities::{
    ConnectionState, ConnectionUpdate, Credentials, DisconnectError, InboundMessage, SessionEvent,
};
use crate::domain::traits::{Session, SessionConnector};

const CONSOLE_SENDER: &str = "console";

/// Session over any line-oriented reader
pub struct ConsoleSession<R> {
    conversation_id: String,
    lines: Lines<R>,
    opened: bool,
    closed: bool,
}

impl<R: AsyncBufRead + Unpin + Send + Sync> ConsoleSession<R> {
    pub fn new(reader: R, conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            lines: reader.lines(),
            opened: false,
            closed: false,
        }
    }

    /// Turn one input line into a message; blank lines are skipped
    pub fn parse_line(&self, line: &str) -> Option<InboundMessage> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return None;
        }

        let (sender, text) = match line.strip_prefix('@').and_then(|rest| rest.split_once(' ')) {
            Some((sender, text)) if !sender.is_empty() => (sender, text),
            _ => (CONSOLE_SENDER, line),
        };

        Some(InboundMessage::from_text(&self.conversation_id, text).with_participant(sender))
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send + Sync> Session for ConsoleSession<R> {
    async fn next_event(&mut self) -> Option<SessionEvent> {
        if !self.opened {
            self.opened = true;
            return Some(SessionEvent::ConnectionStateChanged(ConnectionUpdate::new(ConnectionState::Open)));
        }
        if self.closed {
            return None;
        }

        loop {
            match self.lines.next_line().await {
                Ok(Some(line)) => {
                    if let Some(message) = self.parse_line(&line) {
                        return Some(SessionEvent::MessageReceived(message));
                    }
                }
                Ok(None) => {
                    self.closed = true;
                    return Some(SessionEvent::ConnectionStateChanged(ConnectionUpdate::closed(
                        DisconnectError::logged_out("console input closed"),
                    )));
                }
                Err(e) => {
                    self.closed = true;
                    return Some(SessionEvent::ConnectionStateChanged(ConnectionUpdate::closed(
                        DisconnectError::logged_out(format!("console read failed: {}", e)),
                    )));
                }
            }
        }
    }

    async fn send_text(&self, conversation_id: &str, text: &str) -> Result<String, BotError> {
        tracing::debug!("Console reply to {}", conversation_id);
        println!("[BOT] {}", text);
        Ok(uuid::Uuid::new_v4().to_string())
    }
}

/// Connects console sessions reading from stdin
pub struct ConsoleConnector {
    conversation_id: String,
    stdin: Mutex<Option<BufReader<Stdin>>>,
}

impl ConsoleConnector {
    pub fn new(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            stdin: Mutex::new(Some(BufReader::new(tokio::io::stdin()))),
        }
    }
}

#[async_trait]
impl SessionConnector for ConsoleConnector {
    async fn connect(&self, _credentials: Option<Credentials>) -> Result<Box<dyn Session>, BotError> {
        let reader = self
            .stdin
            .lock()
            .await
            .take()
            .ok_or_else(|| BotError::Session("console input already consumed".to_string()))?;

        tracing::info!("Starting console session (dev mode)");
        Ok(Box::new(ConsoleSession::new(reader, self.conversation_id.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn drain(input: &'static str) -> Vec<SessionEvent> {
        let mut session = ConsoleSession::new(input.as_bytes(), "console");
        let mut events = Vec::new();
        while let Some(event) = session.next_event().await {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn opens_reads_lines_then_logs_out() {
        let events = drain(".ping\n\n@alice .addlist hi\n").await;

        assert_eq!(events.len(), 4);
        assert!(matches!(
            &events[0],
            SessionEvent::ConnectionStateChanged(u) if u.state == ConnectionState::Open
        ));

        let SessionEvent::MessageReceived(first) = &events[1] else {
            panic!("expected a message, got {:?}", events[1]);
        };
        assert_eq!(first.text(), Some(".ping"));
        assert_eq!(first.sender(), "console");
        assert_eq!(first.conversation_id, "console");

        let SessionEvent::MessageReceived(second) = &events[2] else {
            panic!("expected a message, got {:?}", events[2]);
        };
        assert_eq!(second.text(), Some(".addlist hi"));
        assert_eq!(second.sender(), "alice");

        let SessionEvent::ConnectionStateChanged(update) = &events[3] else {
            panic!("expected close, got {:?}", events[3]);
        };
        assert_eq!(update.state, ConnectionState::Closed);
        assert!(update.error.as_ref().is_some_and(|e| e.logged_out));
    }

    #[tokio::test]
    async fn lone_at_sign_is_plain_text() {
        let session = ConsoleSession::new(&b""[..], "console");
        let msg = session.parse_line("@ hello").unwrap();
        assert_eq!(msg.sender(), "console");
        assert_eq!(msg.text(), Some("@ hello"));
        assert!(session.parse_line("   ").is_none());
    }
}
