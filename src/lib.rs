//! # card-pairing
//!
//! Card pool allocation and per-player selection state for a small
//! pairing party game. Each player is dealt attacker (공) and defender (수)
//! cards from two shared pools, picks one card from each hand, and the pair
//! is revealed once both sides are chosen.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: All game state lives in a [`Session`] value that is
//!    mutated through `&mut self`. There is no global state.
//!
//! 2. **Injectable Randomness**: Draws take a seedable [`DrawRng`], so every
//!    deal is reproducible from its seed.
//!
//! 3. **Configuration Over Forking**: The selection toggle behavior is a
//!    [`SelectionPolicy`] in [`SessionConfig`], not a separate component.
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG, configuration, errors
//! - `cards`: Card data and the static catalog
//! - `pool`: Shared pools and the hand allocator
//! - `session`: The session controller and its read-only view
//!
//! ## Example
//!
//! ```
//! use card_pairing::{Session, SessionConfig, Side};
//!
//! let mut session = Session::new(SessionConfig::default().with_seed(7));
//! let player = session.add_player().unwrap();
//! assert_eq!(session.remaining(Side::Attacker), 4);
//!
//! let attacker = session.player(player).unwrap().hand(Side::Attacker)[0].id.clone();
//! let defender = session.player(player).unwrap().hand(Side::Defender)[1].id.clone();
//! session.select_card(player, Side::Attacker, &attacker).unwrap();
//! assert!(session.reveal(player).is_none());
//!
//! session.select_card(player, Side::Defender, &defender).unwrap();
//! let pairing = session.reveal(player).unwrap();
//! assert_eq!(pairing.attacker.id, attacker);
//! assert_eq!(pairing.defender.id, defender);
//! ```

pub mod core;
pub mod cards;
pub mod pool;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    DrawRng, PlayerId,
    SelectionPolicy, SessionConfig, DEFAULT_HAND_SIZE,
    Result, SessionError,
};

pub use crate::cards::{Card, CardCatalog, CardId, Side};

pub use crate::pool::{draw, Hand, Pool};

pub use crate::session::{
    Pairing, Player, SelectionChange, Session,
    CardView, PairingView, PlayerView, SessionView,
};
