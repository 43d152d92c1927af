//! REPL (Read-Eval-Print Loop) for an interactive quote session

use crate::output::console::ConsoleFormatter;
use quotebook_application::{EXPORT_FILE_NAME, QuoteSession, SyncError};
use quotebook_domain::CategoryFilter;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

const ADD_USAGE: &str = "Usage: /add <text> | <category>";
const FILTER_USAGE: &str = "Usage: /filter <category|all>";
const IMPORT_USAGE: &str = "Usage: /import <file>";

/// A parsed REPL input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    NewQuote,
    Add { text: String, category: String },
    Filter(CategoryFilter),
    Categories,
    Export(PathBuf),
    Import(PathBuf),
    Sync,
    Last,
    Help,
    Quit,
    Usage(&'static str),
    Unknown(String),
}

impl ReplCommand {
    /// Parse one trimmed, non-empty input line
    pub fn parse(line: &str) -> Self {
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name {
            "/new" | "/n" => ReplCommand::NewQuote,
            "/add" | "/a" => match rest.rsplit_once('|') {
                Some((text, category)) => ReplCommand::Add {
                    text: text.trim().to_string(),
                    category: category.trim().to_string(),
                },
                None => ReplCommand::Usage(ADD_USAGE),
            },
            "/filter" | "/f" if rest.is_empty() => ReplCommand::Usage(FILTER_USAGE),
            "/filter" | "/f" => ReplCommand::Filter(CategoryFilter::from(rest.to_string())),
            "/categories" | "/c" => ReplCommand::Categories,
            "/export" => ReplCommand::Export(PathBuf::from(if rest.is_empty() {
                EXPORT_FILE_NAME
            } else {
                rest
            })),
            "/import" if rest.is_empty() => ReplCommand::Usage(IMPORT_USAGE),
            "/import" => ReplCommand::Import(PathBuf::from(rest)),
            "/sync" | "/s" => ReplCommand::Sync,
            "/last" => ReplCommand::Last,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        }
    }
}

/// Interactive quote REPL
pub struct QuoteRepl {
    session: Arc<QuoteSession>,
    background_sync: bool,
}

impl QuoteRepl {
    pub fn new(session: Arc<QuoteSession>) -> Self {
        Self {
            session,
            background_sync: true,
        }
    }

    /// Set whether periodic sync runs while the REPL is open
    pub fn with_background_sync(mut self, enabled: bool) -> Self {
        self.background_sync = enabled;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("quotebook").join("history.txt"));
        if let Some(ref path) = history_path
            && prepare_history_dir(path)
            && let Err(e) = rl.load_history(path)
        {
            debug!("No history loaded from {}: {}", path.display(), e);
        }

        self.print_welcome();
        self.session.start();

        let cancellation = CancellationToken::new();
        let sync_task = if self.background_sync {
            self.session.start_background_sync(cancellation.clone())
        } else {
            None
        };

        loop {
            match rl.readline("quote> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if let Err(e) = rl.add_history_entry(line) {
                        debug!("Could not record history entry: {}", e);
                    }

                    if self.execute(ReplCommand::parse(line)).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        cancellation.cancel();
        if let Some(task) = sync_task
            && let Err(e) = task.await
        {
            debug!("Background sync task ended abnormally: {}", e);
        }

        if let Some(ref path) = history_path
            && let Err(e) = rl.save_history(path)
        {
            debug!("Could not save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Quotebook - Interactive          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        self.print_help();
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  /new, /n                  - Show a new quote");
        println!("  /add <text> | <category>  - Add a quote");
        println!("  /filter <category|all>    - Select a category");
        println!("  /categories, /c           - List categories");
        println!("  /export [file]            - Export quotes (default: quotes.json)");
        println!("  /import <file>            - Import quotes from a JSON file");
        println!("  /sync, /s                 - Sync with the server now");
        println!("  /last                     - Show the last viewed quote");
        println!("  /help, /h, /?             - Show this help");
        println!("  /quit, /exit, /q          - Exit");
        println!();
    }

    /// Execute a command. Returns true if the REPL should exit.
    pub async fn execute(&self, command: ReplCommand) -> bool {
        debug!("REPL command: {:?}", command);
        match command {
            ReplCommand::NewQuote => {
                self.session.show_new_quote();
            }
            ReplCommand::Add { text, category } => {
                // Outcome is reported through the view
                let _ = self.session.add_quote(&text, &category).await;
            }
            ReplCommand::Filter(filter) => {
                self.session.select_category(filter);
            }
            ReplCommand::Categories => {
                print!(
                    "{}",
                    ConsoleFormatter::format_categories(
                        &self.session.categories(),
                        &self.session.active_category()
                    )
                );
            }
            ReplCommand::Export(path) => self.export(&path),
            ReplCommand::Import(path) => self.import(&path),
            ReplCommand::Sync => self.sync_now().await,
            ReplCommand::Last => match self.session.last_viewed() {
                Some(quote) => println!("{}", ConsoleFormatter::format_quote(&quote)),
                None => println!("{}", ConsoleFormatter::format_notice("No quote viewed yet")),
            },
            ReplCommand::Help => self.print_help(),
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Usage(usage) => println!("{}", usage),
            ReplCommand::Unknown(line) => {
                println!("Unknown command: {}", line);
                println!("Type /help for available commands");
            }
        }
        false
    }

    fn export(&self, path: &Path) {
        let result = self
            .session
            .export()
            .map_err(|e| e.to_string())
            .and_then(|document| std::fs::write(path, document).map_err(|e| e.to_string()));

        match result {
            Ok(()) => println!(
                "{}",
                ConsoleFormatter::format_notice(&format!("Exported to {}", path.display()))
            ),
            Err(e) => eprintln!("{}", ConsoleFormatter::format_error(&e)),
        }
    }

    fn import(&self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(document) => {
                // Outcome is reported through the view
                let _ = self.session.import(&document);
            }
            Err(e) => eprintln!(
                "{}",
                ConsoleFormatter::format_error(&format!("Cannot read {}: {}", path.display(), e))
            ),
        }
    }

    async fn sync_now(&self) {
        let Some(sync) = self.session.sync_agent() else {
            println!("{}", ConsoleFormatter::format_notice("Sync is not configured"));
            return;
        };
        if let Err(SyncError::AlreadyRunning) = sync.run_cycle().await {
            println!(
                "{}",
                ConsoleFormatter::format_notice("A sync is already in progress")
            );
        }
    }
}

/// Create the directory holding the history file.
fn prepare_history_dir(path: &Path) -> bool {
    let Some(parent) = path.parent() else {
        return true;
    };
    match std::fs::create_dir_all(parent) {
        Ok(()) => true,
        Err(e) => {
            debug!("Could not create history directory {}: {}", parent.display(), e);
            false
        }
    }
}
