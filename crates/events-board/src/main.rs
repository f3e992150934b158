use anyhow::Context;
use events_board::console::{Console, Flow};
use events_board::middleware::LoggingMiddleware;
use events_board::{logger, AppState, EventsController, Store};
use events_client::HttpEventsClient;
use events_config::AppConfig;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

// Single-threaded on purpose: dispatches never interleave.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting events-board, logging to {}", log_file.display());

    let config = AppConfig::load().context("Invalid configuration")?;
    log::info!("Using events API at {}", config.api.base_url);

    let client = HttpEventsClient::new(&config.api.base_url, config.api.request_timeout())
        .context("Failed to create events API client")?;

    // Initialize store with middleware
    let mut store = Store::new(AppState::default());
    store.add_middleware(Box::new(LoggingMiddleware::new()));

    let controller = EventsController::new(Arc::new(client), store);
    let mut console = Console::new(controller, std::io::stdout());
    console.start().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if console.handle_line(&line).await? == Flow::Quit {
            break;
        }
    }

    log::info!("Exiting events-board");
    Ok(())
}
