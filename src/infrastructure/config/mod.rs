//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use crate::application::errors::ConfigError;
use crate::application::services::{ConversationScope, RetryPolicy};
use crate::infrastructure::lookup::network::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub commands: CommandsConfig,
    #[serde(default)]
    pub scope: ScopeConfig,
    pub lookup: LookupConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    /// Single character that marks a message as a command
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CommandsConfig {
    pub file: PathBuf,
}

/// Restrict the bot to one conversation
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScopeConfig {
    pub target_conversation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupStrategy {
    Network,
    Mock,
}

impl std::str::FromStr for LookupStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "network" => Ok(Self::Network),
            "mock" => Ok(Self::Mock),
            other => Err(ConfigError::InvalidValue(format!("unknown lookup strategy '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LookupConfig {
    pub strategy: LookupStrategy,
    pub endpoint: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SessionConfig {
    /// Directory holding session credentials
    pub auth_dir: PathBuf,
    /// Chat id used for console input
    pub conversation_id: String,
    pub reconnect_delay_seconds: u64,
    pub startup_retry_delay_seconds: u64,
    /// Unlimited when absent
    pub max_attempts: Option<u32>,
}

/// Deployment presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Deployment {
    /// One target group, real lookups
    Production,
    /// Any conversation, real lookups
    Hosted,
    /// Any conversation, simulated lookups
    HostedMock,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "dotcmd-bot".to_string(),
                prefix: ".".to_string(),
            },
            commands: CommandsConfig {
                file: PathBuf::from("commands.json"),
            },
            scope: ScopeConfig::default(),
            lookup: LookupConfig {
                strategy: LookupStrategy::Network,
                endpoint: DEFAULT_ENDPOINT.to_string(),
                timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
            },
            session: SessionConfig {
                auth_dir: PathBuf::from("auth"),
                conversation_id: "console".to_string(),
                reconnect_delay_seconds: 3,
                startup_retry_delay_seconds: 5,
                max_attempts: None,
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn for_deployment(deployment: Deployment) -> Self {
        let mut config = Self::default();
        match deployment {
            Deployment::Production => {
                config.scope.target_conversation = Some("120363401370771222@g.us".to_string());
            }
            Deployment::Hosted => {}
            Deployment::HostedMock => {
                config.lookup.strategy = LookupStrategy::Mock;
            }
        }
        config
    }

    pub fn load_env() -> Self {
        Config::default().apply_env()
    }

    /// Override settings from environment variables
    pub fn apply_env(self) -> Self {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Override settings from `get`, keyed by environment variable name
    pub fn apply_vars(mut self, get: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(target) = get("TARGET_GROUP") {
            self.scope.target_conversation = Some(target).filter(|t| !t.is_empty());
        }

        if let Some(prefix) = get("BOT_PREFIX") {
            self.bot.prefix = prefix;
        }

        if let Some(file) = get("COMMANDS_FILE") {
            self.commands.file = PathBuf::from(file);
        }

        if let Some(strategy) = get("LOOKUP_STRATEGY") {
            match strategy.parse::<LookupStrategy>() {
                Ok(strategy) => self.lookup.strategy = strategy,
                Err(e) => tracing::warn!("Ignoring LOOKUP_STRATEGY: {}", e),
            }
        }

        if let Some(dir) = get("AUTH_DIR") {
            self.session.auth_dir = PathBuf::from(dir);
        }

        self
    }

    /// The command prefix as a character
    pub fn prefix(&self) -> Result<char, ConfigError> {
        let mut chars = self.bot.prefix.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => Ok(c),
            (None, _) => Err(ConfigError::MissingField("bot.prefix".to_string())),
            _ => Err(ConfigError::InvalidValue(format!(
                "prefix must be a single non-space character, got '{}'",
                self.bot.prefix
            ))),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.prefix()?;
        if self.lookup.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue("lookup.timeout-seconds must be positive".to_string()));
        }
        Ok(())
    }

    pub fn scope(&self) -> ConversationScope {
        ConversationScope::from_target(self.scope.target_conversation.clone())
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup.timeout_seconds)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            Duration::from_secs(self.session.reconnect_delay_seconds),
            Duration::from_secs(self.session.startup_retry_delay_seconds),
        )
        .with_max_attempts(self.session.max_attempts)
    }
}
