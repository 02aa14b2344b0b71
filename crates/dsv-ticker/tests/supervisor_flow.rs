//! End-to-end supervisor tests against a scripted hub connector.
//!
//! The scripts drive the same trait surface the real SignalR transport
//! implements, so the reconnect loop, dispatch path and broadcast slot are
//! exercised together without a network.

use async_trait::async_trait;
use dsv_ticker::broadcast::BroadcastSlot;
use dsv_ticker::dispatcher::EventDispatcher;
use dsv_ticker::hub::{HubConnector, HubError, HubEvent, HubSession};
use dsv_ticker::shutdown::ShutdownSignal;
use dsv_ticker::supervisor::{ConnectionSupervisor, SupervisorConfig, SupervisorState};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// One scripted hub session: yields its events in order, then either
/// closes the transport or stays open and silent.
struct ScriptedSession {
    events: VecDeque<HubEvent>,
    close_after_events: bool,
    open: bool,
}

impl ScriptedSession {
    fn with_events(events: Vec<HubEvent>) -> Self {
        Self {
            events: events.into(),
            close_after_events: false,
            open: true,
        }
    }

    fn closing_after(events: Vec<HubEvent>) -> Self {
        Self {
            events: events.into(),
            close_after_events: true,
            open: true,
        }
    }

    fn silent() -> Self {
        Self::with_events(Vec::new())
    }
}

#[async_trait]
impl HubSession for ScriptedSession {
    async fn request_snapshot(&mut self) -> Result<(), HubError> {
        Ok(())
    }

    async fn next_event(&mut self) -> Option<HubEvent> {
        if let Some(event) = self.events.pop_front() {
            return Some(event);
        }
        if self.close_after_events {
            self.open = false;
            return None;
        }
        // Open session with nothing to say.
        std::future::pending().await
    }

    fn is_open(&self) -> bool {
        self.open
    }

    async fn close(&mut self) {
        self.open = false;
    }
}

/// Hands out scripted sessions in order; once the script is exhausted every
/// further connect yields a silent open session.
struct ScriptedConnector {
    sessions: Mutex<VecDeque<Result<ScriptedSession, HubError>>>,
    connects: Arc<AtomicUsize>,
}

impl ScriptedConnector {
    fn new(sessions: Vec<Result<ScriptedSession, HubError>>) -> (Self, Arc<AtomicUsize>) {
        let connects = Arc::new(AtomicUsize::new(0));
        let connector = Self {
            sessions: Mutex::new(sessions.into()),
            connects: Arc::clone(&connects),
        };
        (connector, connects)
    }
}

#[async_trait]
impl HubConnector for ScriptedConnector {
    type Session = ScriptedSession;

    async fn connect(&self) -> Result<Self::Session, HubError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.sessions
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(ScriptedSession::silent()))
    }
}

fn fast_config(overview_only: bool) -> SupervisorConfig {
    SupervisorConfig {
        tick_interval: Duration::from_millis(1),
        renewal_ticks: 1_000_000,
        overview_timeout_ticks: 1_000_000,
        overview_only,
    }
}

fn test_game() -> Value {
    json!({
        "Season": "2022",
        "LeagueID": 190,
        "Gruppe": "A",
        "LeagueKind": "V",
        "GameID": 25,
        "HomeClubname": "SV Wuerzburg",
        "GuestClubname": "SG Stadtwerke",
        "GamePlan": [],
        "GoalsPeriods": [{"Period": 1, "HomeGoals": 7, "GuestGoals": 5}],
        "HomePlayers": [],
        "GuestPlayers": []
    })
}

fn build_supervisor(
    connector: ScriptedConnector,
    slot: Arc<BroadcastSlot>,
    selector: Option<String>,
    config: SupervisorConfig,
) -> (ConnectionSupervisor<ScriptedConnector>, ShutdownSignal) {
    let shutdown = ShutdownSignal::new();
    let dispatcher = EventDispatcher::new(slot, selector, None);
    let supervisor = ConnectionSupervisor::new(connector, dispatcher, shutdown.clone(), config);
    (supervisor, shutdown)
}

#[tokio::test]
async fn test_overview_terminates_after_snapshot() {
    let (connector, connects) = ScriptedConnector::new(vec![Ok(ScriptedSession::with_events(
        vec![HubEvent::Snapshot(vec![test_game()])],
    ))]);
    let (mut supervisor, _shutdown) = build_supervisor(
        connector,
        Arc::new(BroadcastSlot::new()),
        None,
        fast_config(true),
    );

    supervisor.run().await;

    assert_eq!(supervisor.state(), SupervisorState::Terminated);
    assert_eq!(connects.load(Ordering::SeqCst), 1);
    assert_eq!(supervisor.games().len(), 1);
    assert!(supervisor.games().get("2022_190_A_V_25").is_some());
}

#[tokio::test]
async fn test_overview_terminates_on_empty_snapshot() {
    let (connector, connects) = ScriptedConnector::new(vec![Ok(ScriptedSession::with_events(
        vec![HubEvent::Snapshot(Vec::new())],
    ))]);
    let (mut supervisor, _shutdown) = build_supervisor(
        connector,
        Arc::new(BroadcastSlot::new()),
        None,
        fast_config(true),
    );

    supervisor.run().await;

    assert_eq!(supervisor.state(), SupervisorState::Terminated);
    assert_eq!(connects.load(Ordering::SeqCst), 1);
    assert!(supervisor.games().is_empty());
}

#[tokio::test]
async fn test_overview_times_out_without_snapshot() {
    let (connector, connects) =
        ScriptedConnector::new(vec![Ok(ScriptedSession::silent())]);
    let config = SupervisorConfig {
        overview_timeout_ticks: 3,
        ..fast_config(true)
    };
    let (mut supervisor, _shutdown) =
        build_supervisor(connector, Arc::new(BroadcastSlot::new()), None, config);

    supervisor.run().await;

    assert_eq!(supervisor.state(), SupervisorState::Terminated);
    assert_eq!(connects.load(Ordering::SeqCst), 1);
    assert!(supervisor.games().is_empty());
}

#[tokio::test]
async fn test_reconnects_after_transport_close() {
    // First session drops the transport, second delivers the snapshot.
    let (connector, connects) = ScriptedConnector::new(vec![
        Ok(ScriptedSession::closing_after(Vec::new())),
        Ok(ScriptedSession::with_events(vec![HubEvent::Snapshot(
            vec![test_game()],
        )])),
    ]);
    let (mut supervisor, _shutdown) = build_supervisor(
        connector,
        Arc::new(BroadcastSlot::new()),
        None,
        fast_config(true),
    );

    supervisor.run().await;

    assert_eq!(connects.load(Ordering::SeqCst), 2);
    assert_eq!(supervisor.games().len(), 1);
}

#[tokio::test]
async fn test_retries_after_connect_error() {
    let (connector, connects) = ScriptedConnector::new(vec![
        Err(HubError::Protocol("negotiate refused".to_string())),
        Ok(ScriptedSession::with_events(vec![HubEvent::Snapshot(
            vec![test_game()],
        )])),
    ]);
    let (mut supervisor, _shutdown) = build_supervisor(
        connector,
        Arc::new(BroadcastSlot::new()),
        None,
        fast_config(true),
    );

    supervisor.run().await;

    assert_eq!(connects.load(Ordering::SeqCst), 2);
    assert_eq!(supervisor.games().len(), 1);
}

#[tokio::test]
async fn test_renewal_reopens_session() {
    let (connector, connects) = ScriptedConnector::new(Vec::new());
    let config = SupervisorConfig {
        renewal_ticks: 2,
        ..fast_config(false)
    };
    let (mut supervisor, shutdown) =
        build_supervisor(connector, Arc::new(BroadcastSlot::new()), None, config);

    let requester = shutdown.clone();
    let runner = tokio::spawn(async move {
        supervisor.run().await;
        supervisor
    });
    tokio::time::sleep(Duration::from_millis(100)).await;
    requester.request();
    let supervisor = runner.await.unwrap();

    assert_eq!(supervisor.state(), SupervisorState::Terminated);
    // Each renewal crossing closes and reopens exactly one session.
    assert!(connects.load(Ordering::SeqCst) >= 2);
}

#[tokio::test]
async fn test_shutdown_before_run_connects_nothing() {
    let (connector, connects) = ScriptedConnector::new(Vec::new());
    let (mut supervisor, shutdown) = build_supervisor(
        connector,
        Arc::new(BroadcastSlot::new()),
        None,
        fast_config(false),
    );

    shutdown.request();
    supervisor.run().await;

    assert_eq!(supervisor.state(), SupervisorState::Terminated);
    assert_eq!(connects.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_selected_game_reaches_broadcast_slot() {
    let slot = Arc::new(BroadcastSlot::new());
    let (connector, _connects) = ScriptedConnector::new(vec![Ok(ScriptedSession::with_events(
        vec![HubEvent::Snapshot(vec![test_game()])],
    ))]);
    let (mut supervisor, _shutdown) = build_supervisor(
        connector,
        Arc::clone(&slot),
        Some("2022_190_A_V_25".to_string()),
        fast_config(true),
    );

    supervisor.run().await;

    let payload = slot.snapshot();
    assert!(payload.contains("\"GameID\""));
    assert!(payload.contains("SV Wuerzburg"));
}
