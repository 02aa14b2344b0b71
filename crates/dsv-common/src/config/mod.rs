//! Runtime configuration
//!
//! Built from the CLI flags, with environment overrides for the endpoint
//! settings an operator would change without editing a command line.

use serde::Deserialize;
use std::env;

/// Ticker runtime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerConfig {
    /// Base URL of the remote SignalR endpoint.
    #[serde(default = "default_hub_url")]
    pub hub_url: String,
    /// Name of the hub to register on the endpoint.
    #[serde(default = "default_hub_name")]
    pub hub_name: String,
    /// Print an overview of known games and exit after the first snapshot.
    #[serde(default)]
    pub overview: bool,
    /// Stay connected and follow score updates (the default mode).
    #[serde(default)]
    pub ticker: bool,
    /// Identity key to report score details for.
    #[serde(default)]
    pub details: Option<String>,
    /// Identity key whose record is mirrored to the local broadcast socket.
    #[serde(default)]
    pub broadcast: Option<String>,
    /// Port the local broadcast socket listens on.
    #[serde(default = "default_broadcast_port")]
    pub broadcast_port: u16,
}

impl TickerConfig {
    /// Apply `DSV_HUB_URL` and `DSV_BROADCAST_PORT` overrides from the
    /// environment.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = env::var("DSV_HUB_URL") {
            self.hub_url = url;
        }
        if let Some(port) = env::var("DSV_BROADCAST_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.broadcast_port = port;
        }
        self
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            hub_url: default_hub_url(),
            hub_name: default_hub_name(),
            overview: false,
            ticker: false,
            details: None,
            broadcast: None,
            broadcast_port: default_broadcast_port(),
        }
    }
}

// Default value functions
fn default_hub_url() -> String {
    "https://lizenz.dsv.de/signalr".to_string()
}

fn default_hub_name() -> String {
    "wbhub".to_string()
}

fn default_broadcast_port() -> u16 {
    9001
}
