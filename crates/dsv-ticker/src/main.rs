//! DSV live ticker entry point
//!
//! Run with:
//! ```bash
//! cargo run -p dsv-ticker -- --overview
//! ```
//!
//! Endpoint settings can be overridden with `DSV_HUB_URL` and
//! `DSV_BROADCAST_PORT`.

use clap::Parser;
use dsv_common::{try_init_tracing_with_config, TickerConfig, TracingConfig};
use dsv_ticker::broadcast::{BroadcastServer, BroadcastSlot};
use dsv_ticker::dispatcher::EventDispatcher;
use dsv_ticker::hub::SignalRConnector;
use dsv_ticker::shutdown::ShutdownSignal;
use dsv_ticker::supervisor::{ConnectionSupervisor, SupervisorConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, Level};

/// Live score ticker for DSV water polo games.
#[derive(Debug, Parser)]
#[command(name = "dsv-ticker", version, about)]
struct Args {
    /// Shortcut for --log-level DEBUG
    #[arg(long)]
    debug: bool,

    /// Console log level
    #[arg(long, value_parser = ["INFO", "DEBUG", "WARN"], default_value = "INFO")]
    log_level: String,

    /// Print an overview of currently known games and exit
    #[arg(short, long)]
    overview: bool,

    /// Follow live score updates (the default mode)
    #[arg(short, long)]
    ticker: bool,

    /// Report score details for one game, e.g. 2022_190_A_V_25
    #[arg(short, long, value_name = "GAME")]
    details: Option<String>,

    /// Mirror one game to the local broadcast socket, e.g. 2022_190_A_V_25
    #[arg(short, long, value_name = "GAME")]
    broadcast: Option<String>,
}

impl Args {
    fn log_level(&self) -> Level {
        if self.debug {
            return Level::DEBUG;
        }
        match self.log_level.as_str() {
            "DEBUG" => Level::DEBUG,
            "WARN" => Level::WARN,
            _ => Level::INFO,
        }
    }

    fn into_config(self) -> TickerConfig {
        TickerConfig {
            overview: self.overview,
            ticker: self.ticker,
            details: self.details,
            broadcast: self.broadcast,
            ..TickerConfig::default()
        }
        .with_env_overrides()
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(TracingConfig::with_level(args.log_level())) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(args.into_config()).await {
        error!(error = %e, "Ticker failed");
        std::process::exit(1);
    }
}

async fn run(config: TickerConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        hub_url = %config.hub_url,
        hub = %config.hub_name,
        overview = config.overview,
        broadcast = config.broadcast.as_deref().unwrap_or("-"),
        "Starting DSV ticker"
    );

    let shutdown = ShutdownSignal::new();
    shutdown.install_signal_handlers();

    let slot = Arc::new(BroadcastSlot::new());

    // The broadcast socket only runs when a game was selected for mirroring.
    let broadcast_task = if config.broadcast.is_some() {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.broadcast_port));
        let server = BroadcastServer::bind(addr, Arc::clone(&slot)).await?;
        Some(tokio::spawn(server.serve()))
    } else {
        None
    };

    let connector = SignalRConnector::new(&config.hub_url, &config.hub_name);
    let dispatcher = EventDispatcher::new(
        Arc::clone(&slot),
        config.broadcast.clone(),
        config.details.clone(),
    );
    let supervisor_config = SupervisorConfig {
        overview_only: config.overview,
        ..SupervisorConfig::default()
    };

    let mut supervisor =
        ConnectionSupervisor::new(connector, dispatcher, shutdown, supervisor_config);
    supervisor.run().await;

    if let Some(task) = broadcast_task {
        task.abort();
    }

    info!("Ticker stopped");
    Ok(())
}
