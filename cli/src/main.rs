//! CLI entrypoint for quotebook
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use quotebook_application::{
    KeyValueStore, NoView, QuoteSession, QuoteStore, QuoteView, SyncError, SyncQuotesUseCase,
};
use quotebook_domain::CategoryFilter;
use quotebook_infrastructure::{
    ConfigLoader, FileConfig, FileKeyValueStore, MemoryKeyValueStore, PlaceholderQuoteSource,
    StdRandomSource,
};
use quotebook_presentation::{
    Cli, Command, ConsoleFormatter, ConsoleView, QuoteRepl, SyncSpinner,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // Load configuration
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting quotebook");

    // === Dependency Injection ===
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.storage.resolve_data_dir());
    let durable: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::in_dir(&data_dir));
    let session_storage: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
    let view: Arc<dyn QuoteView> = if cli.quiet {
        Arc::new(ConsoleView::new().quiet())
    } else {
        Arc::new(ConsoleView::new())
    };

    let store = Arc::new(QuoteStore::open(durable.clone()));

    let mut session = QuoteSession::new(
        store.clone(),
        durable,
        session_storage,
        Arc::new(StdRandomSource::new()),
        view.clone(),
    );

    // One-shot sync reports after the spinner is cleared
    let command = cli.command();
    let sync_view: Arc<dyn QuoteView> = match command {
        Command::Sync => Arc::new(NoView),
        _ => view.clone(),
    };

    match PlaceholderQuoteSource::new(config.sync.endpoint.clone(), config.sync.timeout()) {
        Ok(remote) => {
            let remote = remote.with_category(config.sync.remote_category());
            let sync = SyncQuotesUseCase::new(Arc::new(remote), store).with_view(sync_view);
            session = session.with_sync(Arc::new(sync), config.sync.to_behavior());
        }
        Err(e) => warn!("Sync disabled: {}", e),
    }

    let session = Arc::new(session);

    let succeeded = match command {
        Command::Show { category: None } => {
            session.start();
            true
        }
        Command::Show {
            category: Some(category),
        } => {
            session.restore();
            session.show_in(&CategoryFilter::from(category));
            true
        }
        Command::Add { text, category } => {
            session.restore();
            session.add_quote(&text, &category).await.is_ok()
        }
        Command::Categories => {
            let active = session.restore();
            print!(
                "{}",
                ConsoleFormatter::format_categories(&session.categories(), &active)
            );
            true
        }
        Command::Filter { category } => {
            session.restore();
            session.select_category(CategoryFilter::from(category));
            true
        }
        Command::Export { output, stdout } => {
            let document = session.export().context("Failed to export quotes")?;
            if stdout {
                println!("{}", document);
            } else {
                std::fs::write(&output, document)
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                println!(
                    "{}",
                    ConsoleFormatter::format_notice(&format!("Exported to {}", output.display()))
                );
            }
            true
        }
        Command::Import { file } => {
            let document = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            session.restore();
            session.import(&document).is_ok()
        }
        Command::Sync => match session.sync_agent() {
            Some(sync) => {
                let spinner = if cli.quiet {
                    SyncSpinner::hidden()
                } else {
                    SyncSpinner::start(&config.sync.endpoint)
                };
                let result = sync.run_cycle().await;
                spinner.finish();
                match result {
                    Ok(report) => {
                        view.on_sync_complete(&report);
                        true
                    }
                    Err(SyncError::AlreadyRunning) => true,
                    Err(e) => {
                        view.on_sync_failed(&e.to_string());
                        false
                    }
                }
            }
            None => {
                eprintln!("{}", ConsoleFormatter::format_error("Sync is not available"));
                false
            }
        },
        Command::Interactive { no_sync } => {
            let repl = QuoteRepl::new(session.clone())
                .with_background_sync(!no_sync && config.sync.enabled);
            repl.run().await?;
            true
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
