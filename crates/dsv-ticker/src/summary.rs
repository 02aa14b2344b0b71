//! Console summary
//!
//! Human-readable one-line-per-match status, printed after each session
//! close. Plain text only.

use dsv_core::{GameStore, MatchRecord};

/// Short code for a league display name.
#[must_use]
pub fn league_short_code(league: &str) -> &str {
    if league.starts_with('1') {
        "1BL"
    } else if league.starts_with('2') {
        "2-L"
    } else if league.contains("U18") {
        "U18"
    } else if league.contains("U16") {
        "U16"
    } else if league.contains("U14") {
        "U14"
    } else if league.contains("Bundesliga") {
        "1BL"
    } else {
        league
    }
}

/// One status line: kickoff, identity key, league code, clubs, score.
#[must_use]
pub fn format_game_line(key: &str, game: &MatchRecord) -> String {
    let kickoff = game
        .start_date()
        .map_or_else(|| "?".to_string(), |d| d.format("%d-%m %H:%M").to_string());
    let league = game.league_name().map_or("?", league_short_code);
    let home = game.home_club().unwrap_or("?");
    let guest = game.guest_club().unwrap_or("?");
    let (home_goals, guest_goals) = game.total_score();

    format!("{kickoff} [{key}] {league} {home} - {guest} [{home_goals}:{guest_goals}]")
}

/// Print the overview of all currently known games.
pub fn print_overview(store: &GameStore) {
    println!("Currently active games");
    for (key, game) in store.all() {
        println!("{}", format_game_line(key, game));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(value: Value) -> MatchRecord {
        match value {
            Value::Object(map) => MatchRecord::from_fields(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_league_short_codes() {
        assert_eq!(league_short_code("1. Bundesliga Frauen"), "1BL");
        assert_eq!(league_short_code("2. Liga Süd"), "2-L");
        assert_eq!(league_short_code("Deutsche Meisterschaft U18"), "U18");
        assert_eq!(league_short_code("Deutsche Meisterschaft U16"), "U16");
        assert_eq!(league_short_code("Deutsche Meisterschaft U14"), "U14");
        assert_eq!(league_short_code("Bundesliga Herren"), "1BL");
        assert_eq!(league_short_code("Bezirksliga"), "Bezirksliga");
    }

    #[test]
    fn test_format_game_line() {
        let game = record(json!({
            "StartDate": "2023-01-14T15:30:00",
            "LeagueName": "1. Bundesliga Frauen",
            "HomeClubname": "SV Würzburg 05",
            "GuestClubname": "SGW Köln",
            "GoalsPeriods": [
                {"Period": 1, "HomeGoals": 3, "GuestGoals": 2},
                {"Period": 2, "HomeGoals": 1, "GuestGoals": 1},
            ],
        }));
        assert_eq!(
            format_game_line("2022_190_A_V_25", &game),
            "14-01 15:30 [2022_190_A_V_25] 1BL SV Würzburg 05 - SGW Köln [4:3]"
        );
    }

    #[test]
    fn test_format_game_line_with_missing_fields() {
        let game = record(json!({}));
        assert_eq!(format_game_line("k", &game), "? [k] ? ? - ? [0:0]");
    }
}
