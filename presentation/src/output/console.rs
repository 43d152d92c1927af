//! Console output formatter for quotes and session status

use colored::Colorize;
use quotebook_application::SyncReport;
use quotebook_domain::{CategoryFilter, Quote};

/// Formats quotes and notifications for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// `"text" — category`
    pub fn format_quote(quote: &Quote) -> String {
        format!(
            "{} {} {}",
            format!("\"{}\"", quote.text).bold(),
            "—".dimmed(),
            quote.category.cyan()
        )
    }

    /// Fallback shown when nothing matches `filter`
    pub fn format_empty(filter: &CategoryFilter) -> String {
        let message = match filter {
            CategoryFilter::All => "No quotes available.",
            CategoryFilter::Specific(_) => "No quotes available for this category.",
        };
        message.yellow().to_string()
    }

    /// Category list with the active filter marked
    pub fn format_categories(options: &[CategoryFilter], active: &CategoryFilter) -> String {
        let mut output = String::new();
        for option in options {
            let label = match option {
                CategoryFilter::All => "All Categories".to_string(),
                CategoryFilter::Specific(name) => name.clone(),
            };
            if option == active {
                output.push_str(&format!("{} {}\n", "*".green().bold(), label.green().bold()));
            } else {
                output.push_str(&format!("  {}\n", label));
            }
        }
        output
    }

    pub fn format_sync_report(report: &SyncReport) -> String {
        format!(
            "{} {} fetched, {} new, {} total ({})",
            "Synced with server:".green().bold(),
            report.fetched,
            report.added,
            report.total,
            report.completed_at.format("%H:%M:%S UTC")
        )
    }

    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    pub fn format_notice(message: &str) -> String {
        format!("{} {}", "»".blue().bold(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain<T>(f: impl FnOnce() -> T) -> T {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn test_format_quote() {
        let output = plain(|| ConsoleFormatter::format_quote(&Quote::new("Stay hungry.", "Life")));
        assert_eq!(output, "\"Stay hungry.\" — Life");
    }

    #[test]
    fn test_format_empty_messages() {
        let all = plain(|| ConsoleFormatter::format_empty(&CategoryFilter::All));
        assert_eq!(all, "No quotes available.");

        let specific = plain(|| ConsoleFormatter::format_empty(&CategoryFilter::specific("A")));
        assert_eq!(specific, "No quotes available for this category.");
    }

    #[test]
    fn test_format_categories_marks_active() {
        let options = vec![CategoryFilter::All, CategoryFilter::specific("Life")];
        let output = plain(|| {
            ConsoleFormatter::format_categories(&options, &CategoryFilter::specific("Life"))
        });
        assert_eq!(output, "  All Categories\n* Life\n");
    }

    #[test]
    fn test_format_sync_report() {
        let report = SyncReport {
            fetched: 100,
            added: 2,
            total: 105,
            completed_at: chrono::DateTime::from_timestamp(0, 0).unwrap(),
        };
        let output = plain(|| ConsoleFormatter::format_sync_report(&report));
        assert_eq!(
            output,
            "Synced with server: 100 fetched, 2 new, 105 total (00:00:00 UTC)"
        );
    }
}
