//! Pending replies - senders who still owe the response text for `.addlist <name>`

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Tracks which command each sender is about to define.
///
/// In memory only; pending prompts are lost on restart.
#[derive(Debug, Default)]
pub struct PendingReplyTracker {
    waiting: Mutex<HashMap<String, String>>,
}

impl PendingReplyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn waiting(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // The map stays consistent even if a holder panicked
        self.waiting.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Start waiting for `sender` to send the response for `command`.
    /// Replaces any prompt the sender already had open.
    pub fn begin_waiting(&self, sender: &str, command: &str) {
        if let Some(previous) = self.waiting().insert(sender.to_string(), command.to_string()) {
            tracing::debug!("Sender {} abandoned pending command {} for {}", sender, previous, command);
        }
    }

    /// Take the pending command for `sender`, clearing it
    pub fn consume_if_waiting(&self, sender: &str) -> Option<String> {
        self.waiting().remove(sender)
    }

    pub fn is_waiting(&self, sender: &str) -> bool {
        self.waiting().contains_key(sender)
    }

    pub fn len(&self) -> usize {
        self.waiting().len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_clears_the_entry() {
        let tracker = PendingReplyTracker::new();
        tracker.begin_waiting("alice", "hi");

        assert!(tracker.is_waiting("alice"));
        assert_eq!(tracker.consume_if_waiting("alice").as_deref(), Some("hi"));
        assert_eq!(tracker.consume_if_waiting("alice"), None);
        assert!(tracker.is_empty());
    }

    #[test]
    fn new_request_overwrites_previous() {
        let tracker = PendingReplyTracker::new();
        tracker.begin_waiting("alice", "first");
        tracker.begin_waiting("alice", "second");

        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.consume_if_waiting("alice").as_deref(), Some("second"));
    }

    #[test]
    fn senders_are_independent() {
        let tracker = PendingReplyTracker::new();
        tracker.begin_waiting("alice", "hi");

        assert!(!tracker.is_waiting("bob"));
        assert_eq!(tracker.consume_if_waiting("bob"), None);
        assert!(tracker.is_waiting("alice"));
    }
}
