//! Remote hub client
//!
//! Client side of the SignalR persistent-connection protocol the DSV live
//! endpoint speaks. The supervisor talks to the hub only through the
//! [`HubConnector`] / [`HubSession`] ports, so tests can drive it with a
//! scripted session instead of a network connection.

mod event;
mod protocol;
mod session;

pub use event::HubEvent;
pub use protocol::{ClientInvocation, HubMessage, NegotiateResponse, PersistentFrame};
pub use session::{SignalRConnector, SignalRSession};

use async_trait::async_trait;
use thiserror::Error;

/// Hub transport and protocol errors.
///
/// Every variant is recoverable: the supervisor logs it, closes the current
/// session and reconnects.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Negotiate failed: {0}")]
    Negotiate(#[from] reqwest::Error),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Session closed")]
    Closed,
}

/// Opens sessions to the remote hub.
#[async_trait]
pub trait HubConnector: Send + Sync {
    type Session: HubSession;

    /// Perform the handshake and open a live session.
    async fn connect(&self) -> Result<Self::Session, HubError>;
}

/// One live hub session.
#[async_trait]
pub trait HubSession: Send {
    /// Invoke the server-side `getAllGames` method to request a full
    /// snapshot.
    async fn request_snapshot(&mut self) -> Result<(), HubError>;

    /// Next event from the hub. `None` means the transport has closed.
    /// Cancel-safe: dropping the future loses no event.
    async fn next_event(&mut self) -> Option<HubEvent>;

    /// Whether the underlying transport is still open.
    fn is_open(&self) -> bool;

    /// Close the session. Idempotent.
    async fn close(&mut self);
}
