//! Core types: player IDs, RNG, configuration, errors.
//!
//! These are shared by the pool allocator and the session controller.
//! Games tune behavior via `SessionConfig` rather than modifying the core.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{SelectionPolicy, SessionConfig, DEFAULT_HAND_SIZE};
pub use error::{Result, SessionError};
pub use player::PlayerId;
pub use rng::DrawRng;
