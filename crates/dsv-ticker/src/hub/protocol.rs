//! SignalR wire messages
//!
//! Serde types for the classic ASP.NET SignalR persistent-connection
//! protocol (clientProtocol 1.5): the negotiate handshake response, the
//! server-to-client frame with its one-letter field names, and the
//! client-to-server hub invocation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version sent during negotiate and connect.
pub const CLIENT_PROTOCOL: &str = "1.5";

/// Server method requesting a full snapshot of all known games.
pub const GET_ALL_GAMES: &str = "getAllGames";

/// Hub method carrying a single changed game.
pub const UPDATE_GAME: &str = "updateGame";

/// Response to `GET {base}/negotiate`.
#[derive(Debug, Clone, Deserialize)]
pub struct NegotiateResponse {
    #[serde(rename = "ConnectionToken")]
    pub connection_token: String,
    #[serde(rename = "ConnectionId")]
    pub connection_id: Option<String>,
    #[serde(rename = "ProtocolVersion")]
    pub protocol_version: Option<String>,
    #[serde(rename = "KeepAliveTimeout")]
    pub keep_alive_timeout: Option<f64>,
    #[serde(rename = "TryWebSockets")]
    pub try_web_sockets: Option<bool>,
}

/// One server-to-client frame.
///
/// An empty object `{}` is a keepalive. A frame with `R` is the reply to a
/// client invocation; a frame with `M` carries hub messages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersistentFrame {
    #[serde(rename = "C")]
    pub cursor: Option<String>,
    #[serde(rename = "S")]
    pub initialized: Option<i64>,
    #[serde(rename = "M")]
    pub messages: Option<Vec<HubMessage>>,
    #[serde(rename = "R")]
    pub result: Option<Value>,
    #[serde(rename = "I")]
    pub invocation_id: Option<Value>,
    #[serde(rename = "E")]
    pub error: Option<String>,
}

/// One hub message inside a frame's `M` array.
#[derive(Debug, Clone, Deserialize)]
pub struct HubMessage {
    #[serde(rename = "H")]
    pub hub: Option<String>,
    #[serde(rename = "M")]
    pub method: Option<String>,
    #[serde(rename = "A", default)]
    pub args: Vec<Value>,
}

/// Client-to-server hub method invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ClientInvocation {
    #[serde(rename = "H")]
    pub hub: String,
    #[serde(rename = "M")]
    pub method: String,
    #[serde(rename = "A")]
    pub args: Vec<Value>,
    #[serde(rename = "I")]
    pub invocation_id: u64,
}

impl ClientInvocation {
    /// The `getAllGames` snapshot request.
    #[must_use]
    pub fn get_all_games(hub: &str, invocation_id: u64) -> Self {
        Self {
            hub: hub.to_string(),
            method: GET_ALL_GAMES.to_string(),
            args: Vec::new(),
            invocation_id,
        }
    }
}
