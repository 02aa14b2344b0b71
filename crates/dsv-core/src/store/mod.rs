//! In-memory game store
//!
//! Mapping from identity key to normalized match record, mutated only by
//! the event dispatcher. Keeps insertion order for overview reporting.
//! Lives for the process lifetime and is never persisted.

use crate::record::MatchRecord;
use std::collections::HashMap;

/// Insertion-ordered upsert map of known matches.
///
/// Not a concurrent type: exactly one writer (the dispatcher) mutates it.
#[derive(Debug, Default)]
pub struct GameStore {
    games: HashMap<String, MatchRecord>,
    order: Vec<String>,
}

impl GameStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for `key` in O(1).
    ///
    /// Returns `true` when the key was not present before.
    pub fn upsert(&mut self, key: impl Into<String>, record: MatchRecord) -> bool {
        let key = key.into();
        let is_new = self.games.insert(key.clone(), record).is_none();
        if is_new {
            self.order.push(key);
        }
        is_new
    }

    /// Current record for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MatchRecord> {
        self.games.get(key)
    }

    /// Restartable iterator over `(key, record)` in insertion order.
    pub fn all(&self) -> impl Iterator<Item = (&str, &MatchRecord)> {
        self.order
            .iter()
            .filter_map(|key| self.games.get(key).map(|record| (key.as_str(), record)))
    }

    /// Number of known matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether any match is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
