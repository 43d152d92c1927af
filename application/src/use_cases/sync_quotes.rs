//! Sync quotes use case
//!
//! One sync cycle fetches candidate quotes from the remote source, merges
//! them into the store (local record wins on equal text), persists, and
//! reports the outcome to the view.
//!
//! # Overlap
//!
//! At most one cycle runs at a time. A cycle started while another is in
//! flight returns [`SyncError::AlreadyRunning`] without contacting the
//! remote. The periodic task spawns each cycle detached, so a slow remote
//! never delays the timer; it only causes later ticks to be skipped.
//!
//! # Failure
//!
//! A failed fetch leaves the collection untouched. The next tick retries;
//! there is no backoff.

use crate::ports::key_value_store::StorageError;
use crate::ports::quote_view::{NoView, QuoteView};
use crate::ports::remote_quote_source::{RemoteError, RemoteQuoteSource};
use crate::use_cases::quote_store::QuoteStore;
use chrono::{DateTime, Utc};
use quotebook_domain::Quote;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can end a sync cycle
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("A sync cycle is already in progress")]
    AlreadyRunning,

    #[error("Sync unavailable: {0}")]
    Remote(#[from] RemoteError),

    #[error("Merged quotes could not be saved: {0}")]
    Storage(#[from] StorageError),
}

/// Outcome of a completed sync cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Records returned by the remote
    pub fetched: usize,
    /// Records appended to the local collection
    pub added: usize,
    /// Collection size after the merge
    pub total: usize,
    pub completed_at: DateTime<Utc>,
}

/// Releases the in-flight latch on drop, including on early return.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Use case for synchronising the store against a remote source
pub struct SyncQuotesUseCase {
    remote: Arc<dyn RemoteQuoteSource>,
    store: Arc<QuoteStore>,
    view: Arc<dyn QuoteView>,
    in_flight: AtomicBool,
}

impl SyncQuotesUseCase {
    pub fn new(remote: Arc<dyn RemoteQuoteSource>, store: Arc<QuoteStore>) -> Self {
        Self {
            remote,
            store,
            view: Arc::new(NoView),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Report cycle outcomes to `view`
    pub fn with_view(mut self, view: Arc<dyn QuoteView>) -> Self {
        self.view = view;
        self
    }

    /// Whether a cycle is currently running
    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Fetch candidate quotes from the remote without touching local state.
    pub async fn fetch_remote(&self) -> Result<Vec<Quote>, RemoteError> {
        let quotes = self.remote.fetch_quotes().await?;
        debug!("Fetched {} remote quotes", quotes.len());
        Ok(quotes)
    }

    /// Merge `remote` into the store and persist. Returns the number added.
    pub fn merge(&self, remote: Vec<Quote>) -> Result<usize, StorageError> {
        self.store.merge(remote)
    }

    /// Run one fetch → merge → persist cycle and notify the view.
    pub async fn run_cycle(&self) -> Result<SyncReport, SyncError> {
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            debug!("Skipping sync cycle, previous cycle still in flight");
            return Err(SyncError::AlreadyRunning);
        };

        match self.cycle().await {
            Ok(report) => {
                info!(
                    "Synced with server: {} fetched, {} added, {} total",
                    report.fetched, report.added, report.total
                );
                self.view.on_sync_complete(&report);
                Ok(report)
            }
            Err(e) => {
                warn!("Sync cycle failed: {}", e);
                self.view.on_sync_failed(&e.to_string());
                Err(e)
            }
        }
    }

    async fn cycle(&self) -> Result<SyncReport, SyncError> {
        let remote = self.fetch_remote().await?;
        let fetched = remote.len();
        let added = self.merge(remote)?;

        Ok(SyncReport {
            fetched,
            added,
            total: self.store.count(),
            completed_at: Utc::now(),
        })
    }

    /// Send a newly added quote to the remote. Failure is reported, not fatal.
    pub async fn publish(&self, quote: &Quote) -> Result<(), RemoteError> {
        match self.remote.publish_quote(quote).await {
            Ok(()) => {
                debug!("Published quote to remote");
                Ok(())
            }
            Err(e) => {
                warn!("Could not publish quote: {}", e);
                self.view.on_publish_failed(quote, &e.to_string());
                Err(e)
            }
        }
    }

    /// Run a cycle every `interval` until `cancellation` fires.
    ///
    /// The first cycle starts one full interval after spawning. Each cycle is
    /// spawned on its own task so the timer keeps its cadence.
    pub fn spawn_periodic(
        self: Arc<Self>,
        interval: Duration,
        cancellation: CancellationToken,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            info!("Periodic sync every {:?}", interval);

            loop {
                tokio::select! {
                    biased;
                    _ = cancellation.cancelled() => {
                        debug!("Periodic sync stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        let this = Arc::clone(&self);
                        tokio::spawn(async move {
                            // Outcome already reported to the view
                            let _ = this.run_cycle().await;
                        });
                    }
                }
            }
        })
    }
}
