use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use dotcmd_bot::application::errors::BotError;
use dotcmd_bot::application::messaging::CommandRouter;
use dotcmd_bot::application::services::{BotRunner, ConversationScope, PendingReplyTracker};
use dotcmd_bot::domain::traits::LookupAdapter;
use dotcmd_bot::infrastructure::adapters::ConsoleConnector;
use dotcmd_bot::infrastructure::config::{Config, Deployment, LookupStrategy};
use dotcmd_bot::infrastructure::lookup::{MockLookup, NetworkLookup};
use dotcmd_bot::infrastructure::storage::{CredentialStore, JsonCommandStore};

#[derive(Parser)]
#[command(name = "dotcmd-bot")]
#[command(about = "A chat command bot with user-defined commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Command prefix (overrides config)
    #[arg(short, long)]
    prefix: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig {
        /// Preset to start from
        #[arg(long, value_enum, default_value_t = Deployment::Hosted)]
        deployment: Deployment,
    },
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_bot(&cli.config, cli.prefix),
        Commands::Version => {
            println!("dotcmd-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig { deployment } => init_config(deployment),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(config_path: &str) -> Config {
    if std::path::Path::new(config_path).exists() {
        Config::load(config_path)
            .map(Config::apply_env)
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::load_env()
            })
    } else {
        Config::load_env()
    }
}

fn run_bot(config_path: &str, prefix_override: Option<String>) -> Result<(), BotError> {
    let mut config = load_config(config_path);
    if let Some(prefix) = prefix_override {
        config.bot.prefix = prefix;
    }
    config.validate()?;
    let prefix = config.prefix()?;

    tracing::info!("🚀 Starting {}", config.bot.name);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| BotError::Internal(format!("Failed to start runtime: {}", e)))?;

    rt.block_on(async {
        let store = Arc::new(JsonCommandStore::load(&config.commands.file).await);

        let lookup: Arc<dyn LookupAdapter> = match config.lookup.strategy {
            LookupStrategy::Network => Arc::new(NetworkLookup::new(
                config.lookup.endpoint.clone(),
                config.lookup_timeout(),
            )),
            LookupStrategy::Mock => Arc::new(MockLookup::new()),
        };
        tracing::info!("Using {} lookup", lookup.name());

        let scope = config.scope();
        let conversation_id = match &scope {
            ConversationScope::Only(target) => {
                tracing::info!("Only answering in {}", target);
                target.clone()
            }
            ConversationScope::Any => config.session.conversation_id.clone(),
        };

        let router = CommandRouter::new(prefix, store, PendingReplyTracker::new(), lookup);
        let runner = BotRunner::new(router, scope, CredentialStore::new(&config.session.auth_dir));
        let connector = ConsoleConnector::new(conversation_id);

        runner.supervise(&connector, &config.retry_policy()).await
    })
}

fn init_config(deployment: Deployment) -> Result<(), BotError> {
    let yaml = Config::for_deployment(deployment).to_yaml()?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
