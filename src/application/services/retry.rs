//! Retry policy for the session supervisor

use std::time::Duration;

/// Why the supervisor is about to retry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryReason {
    /// An open session was closed by the server or network
    Disconnected,
    /// Connecting failed before a session was established
    StartupFailed,
}

/// Fixed-delay retry, bounded or unbounded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub reconnect_delay: Duration,
    pub startup_delay: Duration,
    /// `None` retries forever
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            reconnect_delay: Duration::from_secs(3),
            startup_delay: Duration::from_secs(5),
            max_attempts: None,
        }
    }
}

impl RetryPolicy {
    pub fn new(reconnect_delay: Duration, startup_delay: Duration) -> Self {
        Self {
            reconnect_delay,
            startup_delay,
            max_attempts: None,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Delay before retry number `attempt` (1-based), or `None` when exhausted
    pub fn next_delay(&self, attempt: u32, reason: RetryReason) -> Option<Duration> {
        if let Some(max) = self.max_attempts {
            if attempt > max {
                return None;
            }
        }
        Some(match reason {
            RetryReason::Disconnected => self.reconnect_delay,
            RetryReason::StartupFailed => self.startup_delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reconnect_and_startup_delays() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.next_delay(1, RetryReason::Disconnected), Some(Duration::from_secs(3)));
        assert_eq!(policy.next_delay(1, RetryReason::StartupFailed), Some(Duration::from_secs(5)));
        assert_eq!(policy.next_delay(10_000, RetryReason::Disconnected), Some(Duration::from_secs(3)));
    }

    #[test]
    fn bounded_policy_gives_up() {
        let policy = RetryPolicy::new(Duration::ZERO, Duration::ZERO).with_max_attempts(Some(2));
        assert!(policy.next_delay(1, RetryReason::Disconnected).is_some());
        assert!(policy.next_delay(2, RetryReason::StartupFailed).is_some());
        assert_eq!(policy.next_delay(3, RetryReason::Disconnected), None);
    }
}
