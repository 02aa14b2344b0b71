//! # dsv-core
//!
//! Domain layer for the DSV live ticker: normalized match records, identity
//! keys, the field-allowlist schemas, the record normalizer, and the
//! in-memory game store. This crate has no async code and performs no I/O.

pub mod error;
pub mod normalize;
pub mod record;
pub mod schema;
pub mod store;

// Re-export commonly used types at crate root
pub use error::DomainError;
pub use normalize::{normalize_game, repair_text};
pub use record::{GameKey, GamePlanEntry, MatchRecord, PeriodEntry, PlayerEntry};
pub use store::GameStore;
