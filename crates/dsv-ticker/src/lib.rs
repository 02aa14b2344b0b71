//! # dsv-ticker
//!
//! Live water polo ticker over a SignalR hub: connects, normalizes game
//! events into stable records and mirrors a selected game to a local
//! WebSocket broadcast.

pub mod broadcast;
pub mod dispatcher;
pub mod hub;
pub mod shutdown;
pub mod summary;
pub mod supervisor;
