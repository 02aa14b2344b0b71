//! Local rebroadcast of the selected match record

mod server;
mod slot;

pub use server::BroadcastServer;
pub use slot::{BroadcastSlot, EMPTY_PLACEHOLDER};
