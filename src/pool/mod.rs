//! Shared card pools and the hand allocator.
//!
//! Each side has one `Pool` of undrawn cards. `draw` picks a random hand
//! without touching the pool; the caller then removes the hand from the
//! pool with `Pool::remove_drawn`. Cards never return to a pool except
//! through a session reset.

pub mod allocator;
pub mod card_pool;

pub use allocator::{draw, Hand};
pub use card_pool::Pool;
