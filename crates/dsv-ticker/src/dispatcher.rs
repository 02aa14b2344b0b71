//! Event dispatcher
//!
//! Routes hub events to their handlers: normalizes raw match payloads,
//! upserts them into the game store, and mirrors the operator-selected
//! record into the broadcast slot.

use crate::broadcast::BroadcastSlot;
use crate::hub::HubEvent;
use dsv_core::{normalize_game, GameStore};
use std::sync::Arc;

/// What a dispatched event amounted to, for the supervisor's bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A full snapshot arrived, carrying this many payloads. In
    /// overview-only mode this is the completion marker.
    SnapshotReceived(usize),
    /// A single game update was processed.
    Updated,
    /// Nothing of interest (heartbeat or log-only event).
    Ignored,
}

/// Dispatcher for remote hub events.
///
/// Single-threaded relative to the store: only the supervisor's event loop
/// calls into it.
pub struct EventDispatcher {
    store: GameStore,
    slot: Arc<BroadcastSlot>,
    /// Identity key selected for rebroadcast, if any.
    selector: Option<String>,
    /// Identity key to report score lines for, if any.
    details: Option<String>,
}

impl EventDispatcher {
    /// Create a dispatcher writing selected records into `slot`.
    #[must_use]
    pub fn new(slot: Arc<BroadcastSlot>, selector: Option<String>, details: Option<String>) -> Self {
        Self {
            store: GameStore::new(),
            slot,
            selector,
            details,
        }
    }

    /// All currently known games.
    #[must_use]
    pub fn games(&self) -> &GameStore {
        &self.store
    }

    /// Route one hub event.
    pub fn dispatch(&mut self, event: HubEvent) -> DispatchOutcome {
        match event {
            HubEvent::Snapshot(payloads) => self.handle_snapshot(payloads),
            HubEvent::Update(payload) => self.handle_update(&payload),
            HubEvent::Heartbeat => {
                tracing::trace!("heartbeat");
                DispatchOutcome::Ignored
            }
            HubEvent::Unknown(name) => {
                tracing::debug!(event = %name, "ignoring hub event without match data");
                DispatchOutcome::Ignored
            }
        }
    }

    fn handle_snapshot(&mut self, payloads: Vec<serde_json::Value>) -> DispatchOutcome {
        let count = payloads.len();
        for payload in &payloads {
            if let Some(key) = self.absorb(payload) {
                tracing::info!(game = %key, "game received");
            }
        }
        tracing::info!(games = count, known = self.store.len(), "snapshot processed");
        DispatchOutcome::SnapshotReceived(count)
    }

    fn handle_update(&mut self, payload: &serde_json::Value) -> DispatchOutcome {
        if let Some(key) = self.absorb(payload) {
            tracing::debug!(game = %key, "game updated");
        }
        DispatchOutcome::Updated
    }

    /// Normalize one raw payload and upsert it. Returns the identity key,
    /// or `None` when the payload cannot be identified (skipped, warned).
    fn absorb(&mut self, payload: &serde_json::Value) -> Option<String> {
        let record = normalize_game(payload);
        let key = match record.key() {
            Ok(key) => key.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "skipping record without identity");
                return None;
            }
        };

        if self.selector.as_deref() == Some(key.as_str()) {
            self.slot.publish(record.to_json_text());
            tracing::info!(
                game = %key,
                home = record.home_club().unwrap_or("?"),
                guest = record.guest_club().unwrap_or("?"),
                "broadcasting game"
            );
        }
        if self.details.as_deref() == Some(key.as_str()) {
            let (home_goals, guest_goals) = record.total_score();
            tracing::info!(
                game = %key,
                home = record.home_club().unwrap_or("?"),
                guest = record.guest_club().unwrap_or("?"),
                score = format!("{home_goals}:{guest_goals}"),
                "game details"
            );
        }

        self.store.upsert(key.clone(), record);
        Some(key)
    }
}
