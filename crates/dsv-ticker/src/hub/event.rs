//! Hub events
//!
//! Closed event type for everything the remote hub can deliver. The
//! original service registers string-keyed callbacks (`addPlay`,
//! `updateGame`, `getAllGames`, `R`); here every frame maps into one tagged
//! variant and a single dispatch function matches over them.

use super::protocol::{PersistentFrame, UPDATE_GAME};
use serde_json::Value;

/// One event delivered by the remote hub.
#[derive(Debug, Clone, PartialEq)]
pub enum HubEvent {
    /// Full snapshot: the reply to a `getAllGames` invocation, carrying the
    /// current set of raw match payloads.
    Snapshot(Vec<Value>),
    /// Incremental update carrying exactly one raw match payload.
    Update(Value),
    /// Keepalive or otherwise content-free frame.
    Heartbeat,
    /// A named hub event that carries no match data (`addPlay`,
    /// `getAllGames`, `R`, ...). Log-only.
    Unknown(String),
}

impl HubEvent {
    /// Map one server frame to its events.
    ///
    /// A frame can carry both an invocation reply and hub messages; a frame
    /// carrying neither is a heartbeat.
    #[must_use]
    pub fn from_frame(frame: &PersistentFrame) -> Vec<HubEvent> {
        let mut events = Vec::new();

        if let Some(result) = &frame.result {
            match result {
                Value::Array(games) => events.push(HubEvent::Snapshot(games.clone())),
                _ => events.push(HubEvent::Unknown("R".to_string())),
            }
        }

        for message in frame.messages.iter().flatten() {
            match message.method.as_deref() {
                Some(UPDATE_GAME) => match message.args.first() {
                    Some(game) => events.push(HubEvent::Update(game.clone())),
                    None => events.push(HubEvent::Unknown(UPDATE_GAME.to_string())),
                },
                Some(other) => events.push(HubEvent::Unknown(other.to_string())),
                None => events.push(HubEvent::Unknown("<unnamed>".to_string())),
            }
        }

        if events.is_empty() {
            events.push(HubEvent::Heartbeat);
        }
        events
    }

    /// Short name for log lines.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Snapshot(_) => "snapshot",
            Self::Update(_) => "update",
            Self::Heartbeat => "heartbeat",
            Self::Unknown(_) => "unknown",
        }
    }
}
