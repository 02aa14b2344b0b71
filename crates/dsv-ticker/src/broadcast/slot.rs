//! Single-slot broadcast buffer
//!
//! Holds the serialized text of the one operator-selected match record. The
//! dispatcher replaces the value wholesale; every broadcast connection reads
//! the latest value independently. No queuing, no history.

use parking_lot::RwLock;

/// Frame sent while nothing has been selected or received yet.
pub const EMPTY_PLACEHOLDER: &str = "[]";

/// Shared single-value slot between the dispatcher and the broadcast server.
#[derive(Debug, Default)]
pub struct BroadcastSlot {
    current: RwLock<Option<String>>,
}

impl BroadcastSlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot contents with `text`.
    pub fn publish(&self, text: String) {
        *self.current.write() = Some(text);
    }

    /// Current contents, or the empty-array placeholder.
    #[must_use]
    pub fn snapshot(&self) -> String {
        self.current
            .read()
            .clone()
            .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string())
    }

    /// Whether anything has been published yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.read().is_none()
    }
}
