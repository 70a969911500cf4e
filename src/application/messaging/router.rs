//! Command router - Routes prefixed chat messages to built-in verbs and custom commands

use std::sync::Arc;

use crate::application::errors::{BotError, CommandError};
use crate::application::services::PendingReplyTracker;
use crate::domain::entities::InboundMessage;
use crate::domain::traits::{CommandStore, LookupAdapter};
use super::parser::{MessageParser, ParsedCommand};
use super::replies;

/// Separator between name and response in `.addlist name || response`
const RESPONSE_SEPARATOR: &str = "||";

/// Reply to send back, or `None` to stay silent
pub type RouteResult = Result<Option<String>, BotError>;

/// Verbs implemented by the router itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinVerb {
    Ping,
    AddList,
    Commands,
    DelList,
    Stalk,
    Help,
}

impl BuiltinVerb {
    pub const ALL: [BuiltinVerb; 6] = [
        BuiltinVerb::Ping,
        BuiltinVerb::AddList,
        BuiltinVerb::Commands,
        BuiltinVerb::DelList,
        BuiltinVerb::Stalk,
        BuiltinVerb::Help,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinVerb::Ping => "ping",
            BuiltinVerb::AddList => "addlist",
            BuiltinVerb::Commands => "commands",
            BuiltinVerb::DelList => "dellist",
            BuiltinVerb::Stalk => "stalk",
            BuiltinVerb::Help => "help",
        }
    }

    /// Match a lower-cased verb
    pub fn from_verb(verb: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == verb)
    }
}

/// Routes one message at a time.
///
/// State per sender is either idle or awaiting the response text of a
/// command started with `.addlist <name>`; the next prefixed message from
/// that sender is stored verbatim as the response.
pub struct CommandRouter {
    parser: MessageParser,
    store: Arc<dyn CommandStore>,
    pending: PendingReplyTracker,
    lookup: Arc<dyn LookupAdapter>,
}

impl CommandRouter {
    pub fn new(
        prefix: char,
        store: Arc<dyn CommandStore>,
        pending: PendingReplyTracker,
        lookup: Arc<dyn LookupAdapter>,
    ) -> Self {
        Self {
            parser: MessageParser::new(prefix),
            store,
            pending,
            lookup,
        }
    }

    pub fn prefix(&self) -> char {
        self.parser.prefix()
    }

    pub fn pending(&self) -> &PendingReplyTracker {
        &self.pending
    }

    /// Route an inbound message; non-text messages are ignored
    pub async fn route(&self, message: &InboundMessage) -> RouteResult {
        match (message.text(), &message.body) {
            (Some(text), _) => self.route_text(message.sender(), text).await,
            (None, Some(body)) => {
                tracing::trace!("Skipping {} message from {}", body.kind(), message.sender());
                Ok(None)
            }
            (None, None) => Ok(None),
        }
    }

    /// Route the text of a message from `sender`.
    ///
    /// User mistakes become reply text. Storage failures are returned as errors.
    pub async fn route_text(&self, sender: &str, text: &str) -> RouteResult {
        let Some(command) = self.parser.parse(text) else {
            return Ok(None);
        };

        if let Some(name) = self.pending.consume_if_waiting(sender) {
            self.store.set(&name, text).await?;
            tracing::info!("Sender {} defined command {}", sender, name);
            return Ok(Some(replies::added(self.prefix(), &name)));
        }

        let Some(verb) = BuiltinVerb::from_verb(&command.verb) else {
            return self.custom(&command).await;
        };

        tracing::debug!("Built-in {} from {}", verb.as_str(), sender);
        match self.run_builtin(verb, sender, &command).await {
            Ok(reply) => Ok(Some(reply)),
            Err(BotError::Command(e)) => Ok(Some(e.to_string())),
            Err(e) => Err(e),
        }
    }

    async fn run_builtin(&self, verb: BuiltinVerb, sender: &str, command: &ParsedCommand<'_>) -> Result<String, BotError> {
        match verb {
            BuiltinVerb::Ping => Ok(replies::PONG.to_string()),
            BuiltinVerb::AddList => self.add_list(sender, command.args).await,
            BuiltinVerb::Commands => self.list_commands().await,
            BuiltinVerb::DelList => self.delete_command(command.args).await,
            BuiltinVerb::Stalk => self.stalk(command).await,
            BuiltinVerb::Help => Ok(replies::help(self.prefix())),
        }
    }

    async fn add_list(&self, sender: &str, input: &str) -> Result<String, BotError> {
        let prefix = self.prefix();
        if input.is_empty() {
            return Err(CommandError::Usage(replies::addlist_usage(prefix)).into());
        }

        if let Some((name, response)) = input.split_once(RESPONSE_SEPARATOR) {
            let (name, response) = (name.trim(), response.trim());
            if name.is_empty() || response.is_empty() {
                return Err(CommandError::InvalidFormat(replies::addlist_example(prefix)).into());
            }
            self.store.set(name, response).await?;
            tracing::info!("Sender {} added command {}", sender, name);
            return Ok(replies::added_with_response(prefix, name));
        }

        if self.store.contains(input).await? {
            return Err(CommandError::AlreadyExists(format!("{}{}", prefix, input)).into());
        }

        self.pending.begin_waiting(sender, input);
        Ok(replies::awaiting_response(prefix, input))
    }

    async fn list_commands(&self) -> Result<String, BotError> {
        let names = self.store.list().await?;
        if names.is_empty() {
            return Ok(replies::NO_COMMANDS.to_string());
        }
        Ok(replies::command_list(self.prefix(), names.iter().map(String::as_str)))
    }

    async fn delete_command(&self, name: &str) -> Result<String, BotError> {
        let prefix = self.prefix();
        if name.is_empty() {
            return Err(CommandError::Usage(replies::dellist_usage(prefix)).into());
        }
        if !self.store.delete(name).await? {
            return Err(CommandError::NotFound(format!("{}{}", prefix, name)).into());
        }
        tracing::info!("Deleted command {}", name);
        Ok(replies::deleted(prefix, name))
    }

    async fn stalk(&self, command: &ParsedCommand<'_>) -> Result<String, BotError> {
        let mut tokens = command.tokens();
        let (Some(user_id), Some(zone_id)) = (tokens.next(), tokens.next()) else {
            return Err(CommandError::Usage(replies::stalk_usage(self.prefix())).into());
        };

        match self.lookup.lookup(user_id, zone_id).await {
            Ok(profile) => Ok(replies::profile(&profile)),
            Err(e) => {
                tracing::warn!("Lookup via {} failed for {}/{}: {}", self.lookup.name(), user_id, zone_id, e);
                Err(CommandError::from(e).into())
            }
        }
    }

    /// Custom commands match the whole post-prefix text
    async fn custom(&self, command: &ParsedCommand<'_>) -> RouteResult {
        let response = self.store.get(command.raw).await?;
        if response.is_none() {
            tracing::debug!("No command matches {:?}", command.raw);
        }
        Ok(response)
    }
}
