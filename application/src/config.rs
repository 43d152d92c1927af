//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the sync interval.

use std::time::Duration;

/// Default interval between sync cycles.
pub const DEFAULT_SYNC_INTERVAL: Duration = Duration::from_secs(30);

/// Sync behavior configuration.
#[derive(Debug, Clone)]
pub struct SyncBehavior {
    /// Run sync cycles in the background during interactive sessions.
    pub enabled: bool,
    /// Time between the start of consecutive sync cycles.
    pub interval: Duration,
    /// Send each newly added quote to the remote.
    pub publish_new_quotes: bool,
}

impl Default for SyncBehavior {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: DEFAULT_SYNC_INTERVAL,
            publish_new_quotes: false,
        }
    }
}

impl SyncBehavior {
    /// Creates a SyncBehavior with the interval specified in seconds.
    ///
    /// A zero interval falls back to [`DEFAULT_SYNC_INTERVAL`].
    pub fn with_interval_seconds(mut self, seconds: u64) -> Self {
        self.interval = if seconds == 0 {
            DEFAULT_SYNC_INTERVAL
        } else {
            Duration::from_secs(seconds)
        };
        self
    }

    pub fn with_publish(mut self, publish: bool) -> Self {
        self.publish_new_quotes = publish;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
