//! Cooperative shutdown signal
//!
//! A single process-wide flag set on SIGINT/SIGTERM and polled at every
//! tick and state-transition boundary. Nothing is aborted in flight; loops
//! simply refuse to start their next iteration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle to the shutdown flag.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    requested: Arc<AtomicBool>,
}

impl ShutdownSignal {
    /// Create a signal that has not been requested.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown. Idempotent.
    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    /// Whether shutdown has been requested.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Wire SIGINT (and SIGTERM on unix) to this signal.
    pub fn install_signal_handlers(&self) {
        let interrupt = self.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupt received, shutting down");
                interrupt.request();
            }
        });

        #[cfg(unix)]
        {
            let terminate = self.clone();
            tokio::spawn(async move {
                match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                    Ok(mut term) => {
                        if term.recv().await.is_some() {
                            tracing::info!("termination signal received, shutting down");
                            terminate.request();
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to install SIGTERM handler");
                    }
                }
            });
        }
    }
}
