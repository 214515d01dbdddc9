//! Session persistence and lifecycle events.

pub mod cache;
pub mod events;
