//! Concurrent registry of live games.
//!
//! Games are addressed by an opaque `GameId`. Each game sits behind its own
//! lock, so actions on different games never contend.

pub mod registry;

pub use registry::SessionRegistry;
