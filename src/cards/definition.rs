//! Card definitions - static card data.
//!
//! A `Card` never changes once it is in a catalog. Sessions only move
//! clones of it between pools and hands.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card, e.g. `"g1"`.
///
/// Ids are unique across both sides of a catalog.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The two disjoint card categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 공
    Attacker,
    /// 수
    Defender,
}

impl Side {
    /// Both sides, attacker first.
    pub const ALL: [Side; 2] = [Side::Attacker, Side::Defender];

    /// Short label used at the table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Side::Attacker => "공",
            Side::Defender => "수",
        }
    }

    /// Lowercase English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Side::Attacker => "attacker",
            Side::Defender => "defender",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static card data.
///
/// ## Example
///
/// ```
/// use card_pairing::cards::{Card, CardId};
///
/// let card = Card::new("g1", "차도남 검사", "항상 차가운 눈빛을 가진 천재");
/// assert_eq!(card.id, CardId::new("g1"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// One-line character trait.
    #[serde(rename = "trait")]
    pub description: String,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            description: description.into(),
        }
    }
}
