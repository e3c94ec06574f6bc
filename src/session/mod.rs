//! Session controller: players, selections, reveal, reset.
//!
//! ## Key Types
//!
//! - `Session`: Owns the catalog, both pools, the players and the RNG
//! - `Player`: Two hands and one optional selection per side
//! - `SelectionChange`: What a selection call did
//! - `Pairing`: The revealed attacker/defender pair
//! - `SessionView`: Serializable snapshot for presentation layers
//!
//! ## Player Lifecycle
//!
//! ```text
//! no selection  ->  one side selected  ->  both selected (revealed)
//! ```
//!
//! Under `SelectionPolicy::Reversible` any step can be undone by picking
//! the selected card again. Under `SelectionPolicy::LockIn` the steps only
//! move forward until `Session::reset`.

mod player;
mod state;
mod view;

pub use player::{Pairing, Player, SelectionChange};
pub use state::Session;
pub use view::{CardView, PairingView, PlayerView, SessionView};
