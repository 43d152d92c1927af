//! Console implementation of the quote view
//!
//! The display region is stdout; notifications about failures go to stderr.

use crate::output::console::ConsoleFormatter;
use quotebook_application::{QuoteView, SyncReport};
use quotebook_domain::{CategoryFilter, DomainError, Quote};

/// Writes quotes and notifications to the terminal
pub struct ConsoleView {
    /// Print success notifications (added, imported, synced)
    verbose_notices: bool,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self {
            verbose_notices: true,
        }
    }

    /// Suppress success notifications; failures are always printed
    pub fn quiet(mut self) -> Self {
        self.verbose_notices = false;
        self
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteView for ConsoleView {
    fn display_quote(&self, quote: &Quote) {
        println!("{}", ConsoleFormatter::format_quote(quote));
    }

    fn display_empty(&self, filter: &CategoryFilter) {
        println!("{}", ConsoleFormatter::format_empty(filter));
    }

    fn on_quote_added(&self, quote: &Quote) {
        if self.verbose_notices {
            println!(
                "{}",
                ConsoleFormatter::format_notice(&format!("Added quote to '{}'", quote.category))
            );
        }
    }

    fn on_validation_failed(&self, error: &DomainError) {
        let message = match error {
            DomainError::ReservedCategory(_) => format!("{}. Please choose another category.", error),
            _ => format!("{}. Please enter both quote text and category.", error),
        };
        eprintln!("{}", ConsoleFormatter::format_error(&message));
    }

    fn on_import_complete(&self, count: usize) {
        if self.verbose_notices {
            println!(
                "{}",
                ConsoleFormatter::format_notice(&format!("Quotes imported successfully ({})", count))
            );
        }
    }

    fn on_import_failed(&self, message: &str) {
        eprintln!("{}", ConsoleFormatter::format_error(message));
    }

    fn on_sync_complete(&self, report: &SyncReport) {
        if self.verbose_notices {
            println!("{}", ConsoleFormatter::format_sync_report(report));
        }
    }

    fn on_sync_failed(&self, message: &str) {
        eprintln!("{}", ConsoleFormatter::format_error(message));
    }

    fn on_publish_failed(&self, _quote: &Quote, message: &str) {
        eprintln!(
            "{}",
            ConsoleFormatter::format_error(&format!("Quote kept locally, not published: {}", message))
        );
    }

    fn on_storage_failed(&self, message: &str) {
        eprintln!("{}", ConsoleFormatter::format_error(message));
    }
}
