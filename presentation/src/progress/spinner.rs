//! Spinner shown while a one-shot sync cycle is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct SyncSpinner {
    bar: ProgressBar,
}

impl SyncSpinner {
    /// Start spinning with a message naming the remote
    pub fn start(endpoint: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_prefix("Sync");
        bar.set_message(format!("contacting {}", endpoint));
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// A spinner that draws nothing, used under `--quiet`
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Remove the spinner line so the view's notification replaces it
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
