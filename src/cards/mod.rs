//! Card system: definitions, sides, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: String identifier, unique across both sides
//! - `Side`: Attacker (공) or defender (수)
//! - `Card`: Immutable card data (id, name, trait)
//! - `CardCatalog`: The fixed card list each session deals from

pub mod catalog;
pub mod definition;

pub use catalog::CardCatalog;
pub use definition::{Card, CardId, Side};
