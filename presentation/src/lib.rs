//! Presentation layer for quotebook
//!
//! This crate contains CLI definitions, console formatting,
//! the console view, progress spinners and the interactive REPL.

pub mod cli;
pub mod output;
pub mod progress;
pub mod repl;
pub mod view;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::SyncSpinner;
pub use repl::interactive::{QuoteRepl, ReplCommand};
pub use view::console_view::ConsoleView;
