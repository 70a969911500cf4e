//! Application services - Business logic orchestration

pub mod pending;
pub mod retry;
pub mod runner;

pub use pending::PendingReplyTracker;
pub use retry::{RetryPolicy, RetryReason};
pub use runner::{BotRunner, ConversationScope, SessionOutcome};
