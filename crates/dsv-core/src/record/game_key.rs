//! Game identity key
//!
//! Deterministic composite key identifying one match:
//! `{season}_{leagueId}_{group}_{leagueKind}_{matchId}`, e.g.
//! `2022_190_A_V_25`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The five-field identity of a match.
///
/// Two payloads describing the same match always yield the same key. The key
/// is recomputed from the normalized record and never cached independently
/// of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameKey {
    pub season: String,
    pub league_id: String,
    pub group: String,
    pub league_kind: String,
    pub game_id: String,
}

impl GameKey {
    /// Create a key from the five identity components.
    pub fn new(
        season: impl Into<String>,
        league_id: impl Into<String>,
        group: impl Into<String>,
        league_kind: impl Into<String>,
        game_id: impl Into<String>,
    ) -> Self {
        Self {
            season: season.into(),
            league_id: league_id.into(),
            group: group.into(),
            league_kind: league_kind.into(),
            game_id: game_id.into(),
        }
    }
}

impl fmt::Display for GameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}_{}",
            self.season, self.league_id, self.group, self.league_kind, self.game_id
        )
    }
}

/// Render a scalar JSON value the way the upstream service mixes them into
/// keys: numbers and strings alike become their plain text form.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
