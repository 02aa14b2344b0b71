//! Connection supervisor
//!
//! Owns the outer reconnect loop that keeps the hub session alive: open a
//! session, request a full snapshot, tick a liveness loop, and decide when
//! to tear down and retry. Transport and protocol errors are logged and
//! drive a reconnect; only the shutdown signal ends the loop. There is no
//! retry ceiling and no backoff: the ticker stays live until told to stop.

use crate::dispatcher::{DispatchOutcome, EventDispatcher};
use crate::hub::{HubConnector, HubSession};
use crate::shutdown::ShutdownSignal;
use crate::summary;
use dsv_core::GameStore;
use std::time::Duration;
use tokio::time::interval;

/// Supervisor timing and mode configuration.
#[derive(Debug, Clone)]
pub struct SupervisorConfig {
    /// Liveness tick interval; shutdown is observed within one tick.
    pub tick_interval: Duration,
    /// Ticks after which a healthy session is proactively renewed.
    pub renewal_ticks: u64,
    /// Ticks to wait for the first snapshot in overview-only mode.
    pub overview_timeout_ticks: u64,
    /// Exit after the first snapshot instead of staying live.
    pub overview_only: bool,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(100),
            renewal_ticks: 72_000, // 2 hours
            overview_timeout_ticks: 50, // 5 seconds
            overview_only: false,
        }
    }
}

/// Lifecycle of the supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorState {
    Idle,
    Connecting,
    Connected,
    Closing,
    Terminated,
}

/// Why a connected session was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CloseReason {
    Shutdown,
    Renewal,
    OverviewTimeout,
    SnapshotComplete,
    TransportClosed,
}

impl CloseReason {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Shutdown => "shutdown",
            Self::Renewal => "counter auto renew",
            Self::OverviewTimeout => "overview timeout",
            Self::SnapshotComplete => "snapshot complete",
            Self::TransportClosed => "transport closed",
        }
    }
}

/// Reconnect state machine around one hub connector.
pub struct ConnectionSupervisor<C: HubConnector> {
    connector: C,
    dispatcher: EventDispatcher,
    shutdown: ShutdownSignal,
    config: SupervisorConfig,
    state: SupervisorState,
}

impl<C: HubConnector> ConnectionSupervisor<C> {
    /// Create a supervisor; `shutdown` is polled at every tick and at every
    /// state transition boundary.
    #[must_use]
    pub fn new(
        connector: C,
        dispatcher: EventDispatcher,
        shutdown: ShutdownSignal,
        config: SupervisorConfig,
    ) -> Self {
        Self {
            connector,
            dispatcher,
            shutdown,
            config,
            state: SupervisorState::Idle,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SupervisorState {
        self.state
    }

    /// All games known so far.
    #[must_use]
    pub fn games(&self) -> &GameStore {
        self.dispatcher.games()
    }

    /// Run until shutdown is requested. Never returns early on transport
    /// errors; each failed or expired session is closed and reopened.
    pub async fn run(&mut self) {
        while !self.shutdown.is_requested() {
            self.state = SupervisorState::Connecting;
            tracing::info!("initiating new connection");

            let mut session = match self.connector.connect().await {
                Ok(session) => session,
                Err(e) => {
                    tracing::error!(error = %e, "connect failed, retrying");
                    tokio::time::sleep(self.config.tick_interval).await;
                    continue;
                }
            };
            if let Err(e) = session.request_snapshot().await {
                tracing::error!(error = %e, "snapshot request failed");
            }

            self.state = SupervisorState::Connected;
            tracing::info!("connection initiated");

            let reason = self.connected_loop(&mut session).await;

            self.state = SupervisorState::Closing;
            tracing::debug!(reason = reason.as_str(), "closing session");
            session.close().await;
            summary::print_overview(self.dispatcher.games());
            tracing::info!("session terminated");
        }

        self.state = SupervisorState::Terminated;
        tracing::info!("supervisor terminated");
    }

    /// Tick discipline for one connected session: poll the shutdown flag,
    /// the renewal counter and the overview timeout every tick, and
    /// dispatch hub events as they arrive.
    async fn connected_loop(&mut self, session: &mut C::Session) -> CloseReason {
        let mut ticks: u64 = 0;
        let mut ticker = interval(self.config.tick_interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if self.shutdown.is_requested() {
                        return CloseReason::Shutdown;
                    }
                    if ticks > self.config.renewal_ticks {
                        return CloseReason::Renewal;
                    }
                    if self.config.overview_only && ticks > self.config.overview_timeout_ticks {
                        self.shutdown.request();
                        return CloseReason::OverviewTimeout;
                    }
                    if !session.is_open() {
                        return CloseReason::TransportClosed;
                    }
                    ticks += 1;
                }
                event = session.next_event() => match event {
                    Some(event) => {
                        tracing::trace!(kind = event.kind(), "hub event");
                        let outcome = self.dispatcher.dispatch(event);
                        if self.config.overview_only
                            && matches!(outcome, DispatchOutcome::SnapshotReceived(_))
                        {
                            self.shutdown.request();
                            return CloseReason::SnapshotComplete;
                        }
                    }
                    None => return CloseReason::TransportClosed,
                },
            }
        }
    }
}
