//! Local broadcast server
//!
//! Accepts WebSocket connections on a local port and sends each client the
//! current slot contents at a fixed interval. Clients are independent: a
//! failed send ends that one connection's loop silently and affects nobody
//! else.

use super::slot::BroadcastSlot;
use dsv_common::AppError;
use futures_util::SinkExt;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio::time::interval;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

/// Interval between frames sent to each connected client.
const SEND_INTERVAL: Duration = Duration::from_secs(1);

/// WebSocket server streaming the broadcast slot to local listeners.
pub struct BroadcastServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    slot: Arc<BroadcastSlot>,
}

impl BroadcastServer {
    /// Bind the listening socket.
    pub async fn bind(addr: SocketAddr, slot: Arc<BroadcastSlot>) -> Result<Self, AppError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::Broadcast(format!("Failed to bind to {addr}: {e}")))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| AppError::Broadcast(e.to_string()))?;
        Ok(Self {
            listener,
            local_addr,
            slot,
        })
    }

    /// Address the server actually listens on.
    #[must_use]
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accept connections forever, one send loop per client.
    pub async fn serve(self) {
        tracing::info!(addr = %self.local_addr, "broadcast socket listening");
        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    tracing::debug!(peer = %peer, "broadcast client connected");
                    tokio::spawn(handle_client(stream, peer, self.slot.clone()));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "broadcast accept failed");
                }
            }
        }
    }
}

/// Send the slot contents to one client until the connection drops.
async fn handle_client(stream: TcpStream, peer: SocketAddr, slot: Arc<BroadcastSlot>) {
    let mut ws = match accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            tracing::debug!(peer = %peer, error = %e, "broadcast handshake failed");
            return;
        }
    };

    let mut ticker = interval(SEND_INTERVAL);
    loop {
        ticker.tick().await;
        if ws.send(Message::Text(slot.snapshot())).await.is_err() {
            break;
        }
    }
    tracing::debug!(peer = %peer, "broadcast client disconnected");
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[tokio::test]
    async fn test_client_receives_placeholder_before_selection() {
        let slot = Arc::new(BroadcastSlot::new());
        let server = BroadcastServer::bind("127.0.0.1:0".parse().unwrap(), slot.clone())
            .await
            .unwrap();
        let addr = server.local_addr();
        let server_task = tokio::spawn(server.serve());

        let (mut ws, _) = tokio_tungstenite::connect_async(format!("ws://{addr}"))
            .await
            .unwrap();
        let frame = ws.next().await.unwrap().unwrap();
        assert_eq!(frame.into_text().unwrap(), "[]");

        server_task.abort();
    }

    #[tokio::test]
    async fn test_client_receives_published_record() {
        let slot = Arc::new(BroadcastSlot::new());
        slot.publish(r#"{"GameID":25}"#.to_string());

        let server = BroadcastServer::bind("127.0.0.1:0".parse().unwrap(), slot.clone())
            .await
            .unwrap();
        let addr = server.local_addr();
        let server_task = tokio::spawn(server.serve());

        let (mut ws, _) = tokio_tungstenite::connect_async(format!("ws://{addr}"))
            .await
            .unwrap();
        let frame = ws.next().await.unwrap().unwrap();
        assert_eq!(frame.into_text().unwrap(), r#"{"GameID":25}"#);

        server_task.abort();
    }
}
