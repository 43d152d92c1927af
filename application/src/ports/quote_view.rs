//! Quote view port
//!
//! Defines the output surface the core writes to: a display region for the
//! current quote and a notification region for status messages.

use crate::use_cases::sync_quotes::SyncReport;
use quotebook_domain::{CategoryFilter, DomainError, Quote};

/// Output surface for the quote session
///
/// Implementations live in the presentation layer (console, REPL, ...).
/// Only the display methods are required; notifications default to no-ops.
pub trait QuoteView: Send + Sync {
    /// Show a quote in the display region
    fn display_quote(&self, quote: &Quote);

    /// Show the fallback message when nothing matches `filter`
    fn display_empty(&self, filter: &CategoryFilter);

    // ==================== Notifications ====================

    /// Called after the category list has been rebuilt
    fn on_categories_changed(&self, _options: &[CategoryFilter]) {}

    /// Called after a quote was added and persisted
    fn on_quote_added(&self, _quote: &Quote) {}

    /// Called when add input was rejected
    fn on_validation_failed(&self, _error: &DomainError) {}

    /// Called after an import document was appended
    fn on_import_complete(&self, _count: usize) {}

    /// Called when an import document could not be used
    fn on_import_failed(&self, _message: &str) {}

    /// Called after a sync cycle merged and persisted
    fn on_sync_complete(&self, _report: &SyncReport) {}

    /// Called when a sync cycle aborted; local state is unchanged
    fn on_sync_failed(&self, _message: &str) {}

    /// Called when publishing a new quote to the remote failed
    fn on_publish_failed(&self, _quote: &Quote, _message: &str) {}

    /// Called when persisting local state failed
    fn on_storage_failed(&self, _message: &str) {}
}

/// No-op view for when nothing should be rendered
pub struct NoView;

impl QuoteView for NoView {
    fn display_quote(&self, _quote: &Quote) {}
    fn display_empty(&self, _filter: &CategoryFilter) {}
}
