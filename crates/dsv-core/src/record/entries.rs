//! Typed views over the nested record sections
//!
//! The normalizer keeps the nested sections as filtered JSON arrays inside
//! the match record; these structs are the typed, read-only views used for
//! score aggregation and reporting. Absent fields are explicit options.

use serde::{Deserialize, Serialize};

/// Score of one playing period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodEntry {
    #[serde(rename = "Period", skip_serializing_if = "Option::is_none")]
    pub period: Option<i64>,
    #[serde(rename = "HomeGoals", skip_serializing_if = "Option::is_none")]
    pub home_goals: Option<i64>,
    #[serde(rename = "GuestGoals", skip_serializing_if = "Option::is_none")]
    pub guest_goals: Option<i64>,
}

/// One timeline event (goal, card, timeout, ...) with its running score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlanEntry {
    #[serde(rename = "EventTime", skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,
    #[serde(rename = "EventKey", skip_serializing_if = "Option::is_none")]
    pub event_key: Option<String>,
    #[serde(rename = "EventCode", skip_serializing_if = "Option::is_none")]
    pub event_code: Option<String>,
    #[serde(rename = "EventName", skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(rename = "ClubRegID", skip_serializing_if = "Option::is_none")]
    pub club_reg_id: Option<i64>,
    #[serde(rename = "ClubName", skip_serializing_if = "Option::is_none")]
    pub club_name: Option<String>,
    #[serde(rename = "Period", skip_serializing_if = "Option::is_none")]
    pub period: Option<i64>,
    #[serde(rename = "HomeGoals", skip_serializing_if = "Option::is_none")]
    pub home_goals: Option<i64>,
    #[serde(rename = "GuestGoals", skip_serializing_if = "Option::is_none")]
    pub guest_goals: Option<i64>,
}

/// Player identity and biographical fields from a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    #[serde(rename = "Nationality", skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(rename = "EU", skip_serializing_if = "Option::is_none")]
    pub eu: Option<bool>,
    #[serde(rename = "RegID", skip_serializing_if = "Option::is_none")]
    pub reg_id: Option<i64>,
    #[serde(rename = "FirstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "FirstName2", skip_serializing_if = "Option::is_none")]
    pub first_name2: Option<String>,
    #[serde(rename = "LastName2", skip_serializing_if = "Option::is_none")]
    pub last_name2: Option<String>,
    #[serde(rename = "Born", skip_serializing_if = "Option::is_none")]
    pub born: Option<i64>,
    #[serde(rename = "Cap", skip_serializing_if = "Option::is_none")]
    pub cap: Option<i64>,
    #[serde(rename = "Cap2", skip_serializing_if = "Option::is_none")]
    pub cap2: Option<i64>,
}
