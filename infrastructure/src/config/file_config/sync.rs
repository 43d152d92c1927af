//! Sync configuration from TOML (`[sync]` section)

use crate::remote::{DEFAULT_ENDPOINT, DEFAULT_REMOTE_CATEGORY};
use quotebook_application::{DEFAULT_SYNC_INTERVAL, SyncBehavior};
use quotebook_domain::category::filter::ALL_CATEGORIES;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw sync configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSyncConfig {
    /// Run periodic sync in interactive mode
    pub enabled: bool,
    /// Remote endpoint (GET for fetch, POST for publish)
    pub endpoint: String,
    /// Seconds between sync cycles
    pub interval_seconds: u64,
    /// Category tag given to remote quotes
    pub category: String,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// POST every newly added quote to the endpoint
    pub publish_new_quotes: bool,
}

impl Default for FileSyncConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            interval_seconds: DEFAULT_SYNC_INTERVAL.as_secs(),
            category: DEFAULT_REMOTE_CATEGORY.to_string(),
            timeout_seconds: Some(10),
            publish_new_quotes: false,
        }
    }
}

impl FileSyncConfig {
    pub fn to_behavior(&self) -> SyncBehavior {
        SyncBehavior::default()
            .with_enabled(self.enabled)
            .with_interval_seconds(self.interval_seconds)
            .with_publish(self.publish_new_quotes)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Whether `category` can tag remote quotes: non-empty and not the
    /// "all categories" filter name.
    pub fn is_usable_category(&self) -> bool {
        let category = self.category.trim();
        !category.is_empty() && category != ALL_CATEGORIES
    }

    /// Category tag for remote quotes, falling back to the default when the
    /// configured one is unusable.
    pub fn remote_category(&self) -> String {
        if self.is_usable_category() {
            self.category.trim().to_string()
        } else {
            DEFAULT_REMOTE_CATEGORY.to_string()
        }
    }
}
