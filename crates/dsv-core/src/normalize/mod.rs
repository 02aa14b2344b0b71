//! Record normalizer
//!
//! Filters raw hub payloads down to the allowlisted field sets, repairs
//! corrupted text encoding, and produces best-effort [`MatchRecord`]s.
//! Missing fields are dropped with a warning, never an error; upstream
//! schemas evolve and normalization must keep working around them.

mod text_repair;

pub use text_repair::repair_text;

use crate::record::MatchRecord;
use crate::schema;
use serde_json::{Map, Value};

/// Normalize one raw match payload.
///
/// The top-level object is filtered against the match allowlist, the three
/// nested list sections against their own allowlists, and every retained
/// string value passes through the text repair. Malformed input yields a
/// best-effort record rather than an error.
#[must_use]
pub fn normalize_game(raw: &Value) -> MatchRecord {
    let source = match raw.as_object() {
        Some(map) => map,
        None => {
            tracing::warn!("Raw game payload is not an object");
            return MatchRecord::from_fields(Map::new());
        }
    };

    let mut fields = filter_fields(source, schema::GAME_FIELDS, "game");

    fields.insert(
        "GamePlan".to_string(),
        strip_entries("GamePlan", source, schema::GAMEPLAN_FIELDS),
    );
    fields.insert(
        "GoalsPeriods".to_string(),
        strip_entries("GoalsPeriods", source, schema::PERIOD_FIELDS),
    );
    fields.insert(
        "HomePlayers".to_string(),
        strip_entries("HomePlayers", source, schema::PLAYER_FIELDS),
    );
    fields.insert(
        "GuestPlayers".to_string(),
        strip_entries("GuestPlayers", source, schema::PLAYER_FIELDS),
    );

    MatchRecord::from_fields(fields)
}

/// Filter one nested list section against `allowed`, repairing text values.
///
/// A missing or null section is tolerated and yields an empty list.
#[must_use]
pub fn strip_entries(section: &str, source: &Map<String, Value>, allowed: &[&str]) -> Value {
    let entries = match source.get(section) {
        None => {
            tracing::warn!(section, "Section not found in game payload");
            return Value::Array(Vec::new());
        }
        Some(Value::Null) => {
            tracing::debug!(section, "Section is null");
            return Value::Array(Vec::new());
        }
        Some(value) => match value.as_array() {
            Some(entries) => entries,
            None => {
                tracing::warn!(section, "Section is not a list");
                return Value::Array(Vec::new());
            }
        },
    };

    let stripped = entries
        .iter()
        .map(|entry| match entry.as_object() {
            Some(map) => Value::Object(filter_fields(map, allowed, section)),
            None => {
                tracing::warn!(section, "Entry is not an object");
                Value::Object(Map::new())
            }
        })
        .collect();
    Value::Array(stripped)
}

/// Keep only allowlisted keys, warning once per missing key, and repair
/// every retained string value.
fn filter_fields(source: &Map<String, Value>, allowed: &[&str], context: &str) -> Map<String, Value> {
    let mut filtered = Map::new();
    for &key in allowed {
        match source.get(key) {
            Some(value) => {
                filtered.insert(key.to_string(), repair_value(value));
            }
            None => {
                tracing::warn!(key, context, "Key not found in object");
            }
        }
    }
    filtered
}

/// Repair string values; leave everything else untouched.
fn repair_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(repair_text(s)),
        other => other.clone(),
    }
}
