//! Match record types - normalized records, identity keys, nested entries

mod entries;
mod game_key;
mod match_record;

pub use entries::{GamePlanEntry, PeriodEntry, PlayerEntry};
pub use game_key::GameKey;
pub use match_record::MatchRecord;
