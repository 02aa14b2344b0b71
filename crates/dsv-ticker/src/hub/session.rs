//! SignalR session over tokio-tungstenite
//!
//! Negotiates over HTTP, connects the persistent WebSocket, and pumps
//! server frames into a channel of [`HubEvent`]s from a background read
//! task. The writer half stays with the session for invocations.

use super::event::HubEvent;
use super::protocol::{ClientInvocation, NegotiateResponse, PersistentFrame, CLIENT_PROTOCOL};
use super::{HubConnector, HubError, HubSession};
use async_trait::async_trait;
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Buffer between the read task and the supervisor's event loop.
const EVENT_BUFFER_SIZE: usize = 64;

/// Connector for the remote SignalR endpoint.
#[derive(Debug, Clone)]
pub struct SignalRConnector {
    base_url: String,
    hub_name: String,
    http: reqwest::Client,
}

impl SignalRConnector {
    /// Create a connector for `base_url` (e.g. `https://lizenz.dsv.de/signalr`)
    /// registering `hub_name`.
    #[must_use]
    pub fn new(base_url: &str, hub_name: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            hub_name: hub_name.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Hub registration blob for the `connectionData` query parameter.
    fn connection_data(&self) -> Result<String, HubError> {
        serde_json::to_string(&json!([{ "name": self.hub_name }]))
            .map_err(|e| HubError::Protocol(e.to_string()))
    }

    async fn negotiate(&self, connection_data: &str) -> Result<NegotiateResponse, HubError> {
        let url = format!("{}/negotiate", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("clientProtocol", CLIENT_PROTOCOL),
                ("connectionData", connection_data),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<NegotiateResponse>()
            .await?;
        Ok(response)
    }

    /// Build the WebSocket connect URL from the negotiated token.
    fn connect_url(&self, token: &str, connection_data: &str) -> Result<reqwest::Url, HubError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| HubError::Protocol(format!("invalid hub url: {e}")))?;
        let scheme = if url.scheme() == "https" { "wss" } else { "ws" };
        url.set_scheme(scheme)
            .map_err(|()| HubError::Protocol("hub url scheme not rewritable".to_string()))?;
        url.path_segments_mut()
            .map_err(|()| HubError::Protocol("hub url cannot be a base".to_string()))?
            .push("connect");
        url.query_pairs_mut()
            .append_pair("transport", "webSockets")
            .append_pair("clientProtocol", CLIENT_PROTOCOL)
            .append_pair("connectionToken", token)
            .append_pair("connectionData", connection_data);
        Ok(url)
    }
}

#[async_trait]
impl HubConnector for SignalRConnector {
    type Session = SignalRSession;

    async fn connect(&self) -> Result<SignalRSession, HubError> {
        let connection_data = self.connection_data()?;
        let negotiate = self.negotiate(&connection_data).await?;
        tracing::debug!(
            connection_id = ?negotiate.connection_id,
            protocol = ?negotiate.protocol_version,
            "negotiate complete"
        );

        let url = self.connect_url(&negotiate.connection_token, &connection_data)?;
        let (ws, _) = connect_async(url.as_str()).await?;
        let (sink, stream) = ws.split();

        let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER_SIZE);
        let open = Arc::new(AtomicBool::new(true));
        let read_task = tokio::spawn(read_loop(stream, event_tx, open.clone()));

        Ok(SignalRSession {
            hub_name: self.hub_name.clone(),
            sink,
            events: event_rx,
            open,
            read_task,
            next_invocation_id: 0,
        })
    }
}

/// One live session to the remote hub.
pub struct SignalRSession {
    hub_name: String,
    sink: SplitSink<WsStream, Message>,
    events: mpsc::Receiver<HubEvent>,
    open: Arc<AtomicBool>,
    read_task: JoinHandle<()>,
    next_invocation_id: u64,
}

#[async_trait]
impl HubSession for SignalRSession {
    async fn request_snapshot(&mut self) -> Result<(), HubError> {
        let invocation =
            ClientInvocation::get_all_games(&self.hub_name, self.next_invocation_id);
        self.next_invocation_id += 1;
        let text = serde_json::to_string(&invocation)
            .map_err(|e| HubError::Protocol(e.to_string()))?;
        self.sink.send(Message::Text(text)).await?;
        Ok(())
    }

    async fn next_event(&mut self) -> Option<HubEvent> {
        self.events.recv().await
    }

    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    async fn close(&mut self) {
        if self.open.swap(false, Ordering::SeqCst) {
            let _ = self.sink.send(Message::Close(None)).await;
            let _ = self.sink.close().await;
        }
        self.read_task.abort();
    }
}

impl Drop for SignalRSession {
    fn drop(&mut self) {
        self.read_task.abort();
    }
}

/// Pump server frames into the event channel until the transport closes.
async fn read_loop(
    mut stream: SplitStream<WsStream>,
    events: mpsc::Sender<HubEvent>,
    open: Arc<AtomicBool>,
) {
    while let Some(message) = stream.next().await {
        match message {
            Ok(Message::Text(text)) => match serde_json::from_str::<PersistentFrame>(&text) {
                Ok(frame) => {
                    if let Some(error) = &frame.error {
                        tracing::error!(error, "hub reported an error");
                    }
                    for event in HubEvent::from_frame(&frame) {
                        if events.send(event).await.is_err() {
                            open.store(false, Ordering::SeqCst);
                            return;
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "unparseable hub frame");
                }
            },
            Ok(Message::Close(_)) => {
                tracing::debug!("hub closed the connection");
                break;
            }
            Ok(Message::Ping(_) | Message::Pong(_)) => {}
            Ok(other) => {
                tracing::debug!(kind = ?other, "ignoring non-text hub message");
            }
            Err(e) => {
                tracing::warn!(error = %e, "hub transport error");
                break;
            }
        }
    }
    open.store(false, Ordering::SeqCst);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_url_encodes_token() {
        let connector = SignalRConnector::new("https://lizenz.dsv.de/signalr", "wbhub");
        let data = connector.connection_data().unwrap();
        let url = connector.connect_url("abc+def/g==", &data).unwrap();

        assert_eq!(url.scheme(), "wss");
        assert_eq!(url.path(), "/signalr/connect");
        let query = url.query().unwrap();
        assert!(query.contains("transport=webSockets"));
        assert!(query.contains("connectionToken=abc%2Bdef%2Fg%3D%3D"));
    }

    #[test]
    fn test_connect_url_plain_http_uses_ws() {
        let connector = SignalRConnector::new("http://127.0.0.1:8080/signalr", "wbhub");
        let data = connector.connection_data().unwrap();
        let url = connector.connect_url("t", &data).unwrap();
        assert_eq!(url.scheme(), "ws");
    }

    #[test]
    fn test_connection_data() {
        let connector = SignalRConnector::new("https://lizenz.dsv.de/signalr/", "wbhub");
        assert_eq!(connector.connection_data().unwrap(), r#"[{"name":"wbhub"}]"#);
    }
}
