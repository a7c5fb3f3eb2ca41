use std::process;

use tokio::io::BufReader;
use tokio::sync::watch;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use slot_assistant::handlers::console::Console;
use slot_assistant::{AppConfig, Assistant, SchedulerClient, TextSlotParser};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr so they don't interleave with the cards on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let client = match SchedulerClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };
    let authorize_url = client.authorize_url();
    let parser = TextSlotParser::new(&config.no_results_sentinel);
    let assistant = Assistant::new(client, parser, authorize_url);

    // One signal listener for the whole session, shared through a watch channel
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                if shutdown_tx.send(true).is_err() {
                    debug!("Console already stopped when interrupt arrived");
                }
            }
            Err(e) => error!("Failed to install Ctrl+C handler: {}", e),
        }
    });

    info!("Slot assistant ready");
    let mut console = Console::new(assistant, BufReader::new(tokio::io::stdin()), shutdown_rx);
    console.run().await;

    info!("Slot assistant has shut down");
}
