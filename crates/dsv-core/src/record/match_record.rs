//! Normalized match record
//!
//! A match record is the allowlist-filtered field set of one match, kept as
//! a JSON map so that dropped fields are genuinely absent and the full
//! retained set round-trips to the broadcast frame unchanged. Records are
//! replaced wholesale on update; there is no partial field merge.

use crate::error::DomainError;
use crate::record::entries::{GamePlanEntry, PeriodEntry, PlayerEntry};
use crate::record::game_key::{scalar_to_string, GameKey};
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Normalized representation of one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchRecord {
    fields: Map<String, Value>,
}

impl MatchRecord {
    /// Wrap an already-filtered field map.
    #[must_use]
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The retained field map.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Look up a single retained field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Compose the identity key from the five identity fields.
    ///
    /// The key is computed from the normalized fields on every call, never
    /// cached separately.
    pub fn key(&self) -> Result<GameKey, DomainError> {
        let part = |name: &'static str| -> Result<String, DomainError> {
            self.fields
                .get(name)
                .and_then(scalar_to_string)
                .ok_or(DomainError::MissingIdentityField(name))
        };
        Ok(GameKey::new(
            part("Season")?,
            part("LeagueID")?,
            part("Gruppe")?,
            part("LeagueKind")?,
            part("GameID")?,
        ))
    }

    /// Kickoff timestamp, parsed from the upstream ISO format.
    #[must_use]
    pub fn start_date(&self) -> Option<NaiveDateTime> {
        let raw = self.str_field("StartDate")?;
        if let Ok(with_offset) = chrono::DateTime::parse_from_rfc3339(raw) {
            return Some(with_offset.naive_local());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
    }

    /// Home club name.
    #[must_use]
    pub fn home_club(&self) -> Option<&str> {
        self.str_field("HomeClubname")
    }

    /// Guest club name.
    #[must_use]
    pub fn guest_club(&self) -> Option<&str> {
        self.str_field("GuestClubname")
    }

    /// Gender category (`M`, `W` or `X`).
    #[must_use]
    pub fn gender(&self) -> Option<&str> {
        self.str_field("Gender")
    }

    /// League display name.
    #[must_use]
    pub fn league_name(&self) -> Option<&str> {
        self.str_field("LeagueName")
    }

    /// Ordered period score entries.
    #[must_use]
    pub fn periods(&self) -> Vec<PeriodEntry> {
        self.list_section("GoalsPeriods")
    }

    /// Ordered timeline events.
    #[must_use]
    pub fn game_plan(&self) -> Vec<GamePlanEntry> {
        self.list_section("GamePlan")
    }

    /// Home roster.
    #[must_use]
    pub fn home_players(&self) -> Vec<PlayerEntry> {
        self.list_section("HomePlayers")
    }

    /// Guest roster.
    #[must_use]
    pub fn guest_players(&self) -> Vec<PlayerEntry> {
        self.list_section("GuestPlayers")
    }

    /// Aggregate (home, guest) score over all period entries.
    #[must_use]
    pub fn total_score(&self) -> (i64, i64) {
        self.periods().iter().fold((0, 0), |(home, guest), period| {
            (
                home + period.home_goals.unwrap_or(0),
                guest + period.guest_goals.unwrap_or(0),
            )
        })
    }

    /// Serialize the full retained field set as JSON text.
    #[must_use]
    pub fn to_json_text(&self) -> String {
        serde_json::to_string(&self.fields).unwrap_or_default()
    }

    fn list_section<T: DeserializeOwned>(&self, name: &str) -> Vec<T> {
        self.fields
            .get(name)
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> MatchRecord {
        match value {
            Value::Object(map) => MatchRecord::from_fields(map),
            _ => panic!("record fixture must be an object"),
        }
    }

    #[test]
    fn test_key_from_fields() {
        let game = record(json!({
            "Season": 2022,
            "LeagueID": 190,
            "Gruppe": "A",
            "LeagueKind": "V",
            "GameID": 25,
        }));
        assert_eq!(game.key().unwrap().to_string(), "2022_190_A_V_25");
    }

    #[test]
    fn test_key_missing_field() {
        let game = record(json!({"Season": 2022, "LeagueID": 190}));
        assert_eq!(
            game.key(),
            Err(DomainError::MissingIdentityField("Gruppe"))
        );
    }

    #[test]
    fn test_total_score_sums_periods() {
        let game = record(json!({
            "GoalsPeriods": [
                {"Period": 1, "HomeGoals": 3, "GuestGoals": 2},
                {"Period": 2, "HomeGoals": 1, "GuestGoals": 4},
            ]
        }));
        assert_eq!(game.total_score(), (4, 6));
    }

    #[test]
    fn test_total_score_without_periods() {
        let game = record(json!({}));
        assert_eq!(game.total_score(), (0, 0));
    }

    #[test]
    fn test_start_date_parses_naive_iso() {
        let game = record(json!({"StartDate": "2023-01-14T15:30:00"}));
        let start = game.start_date().unwrap();
        assert_eq!(start.format("%d-%m %H:%M").to_string(), "14-01 15:30");
    }

    #[test]
    fn test_serialization_is_transparent() {
        let game = record(json!({"HomeClubname": "SV Bayer", "Season": 2022}));
        let text = game.to_json_text();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, json!({"HomeClubname": "SV Bayer", "Season": 2022}));
    }
}
