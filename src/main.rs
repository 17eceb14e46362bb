// Artdeck - terminal browser for the Art Institute of Chicago collection
//
// Pages through the public artworks listing API and keeps a cross-page
// selection of favorites.
//
// Architecture:
// - Fetch task: one outbound GET per requested page, no retry
// - Selection tracker: reconciles per-page checkbox state into a
//   cross-page set
// - TUI (ratatui): table, side panel and logs, updated via mpsc events
// - Demo mode: a canned catalog standing in for the network

mod api;
mod cli;
mod config;
mod demo;
mod events;
mod logging;
mod selection;
mod tui;
mod util;

use anyhow::Result;
use api::ListingClient;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Logs go to an in-memory buffer the TUI renders; writing them to
    // stdout would garble the alternate screen
    let log_buffer = LogBuffer::new();

    // Filter precedence: RUST_LOG env var > config file > "info"
    let default_filter = format!("artdeck={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Optional file logging with rotation. The guard must stay alive for
    // the duration of the program so buffered logs flush on exit.
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
                Ok(()) => {
                    let file_appender = match config.logging.file_rotation {
                        LogRotation::Hourly => tracing_appender::rolling::hourly(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Daily => tracing_appender::rolling::daily(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Never => tracing_appender::rolling::never(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                    };

                    // Non-blocking writer; file layer uses JSON for
                    // structured parsing later
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                    Some(guard)
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    tracing::info!("Artdeck {} starting", config::VERSION);

    // Bounded channels between the UI and the fetch task. Page requests
    // are small and rapid paging is capped by the input handler, so a
    // modest buffer suffices.
    let (command_tx, command_rx) = mpsc::channel(32);
    let (event_tx, event_rx) = mpsc::channel(32);

    // Spawn the page source: the real fetch task, or the demo catalog
    let fetch_handle = if config.demo_mode {
        tracing::info!("Running in DEMO MODE - browsing the canned catalog");
        tokio::spawn(async move {
            demo::run_demo(command_rx, event_tx).await;
        })
    } else {
        tracing::info!("Listing endpoint: {}", config.api_url);
        let client = ListingClient::new(&config.api_url)?;
        tokio::spawn(async move {
            api::run_fetch_task(client, command_rx, event_tx).await;
        })
    };

    // Run the TUI in the main task; blocks until the user quits
    if let Err(e) = tui::run_tui(event_rx, command_tx, log_buffer, &config).await {
        tracing::error!("TUI error: {:?}", e);
    }

    // Dropping the TUI's command sender ends the fetch task's recv loop
    let _ = fetch_handle.await;

    tracing::info!("Shutdown complete");
    Ok(())
}
