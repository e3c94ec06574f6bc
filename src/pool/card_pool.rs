//! The shared pool of undrawn cards for one side.

use serde::Serialize;

use crate::cards::{Card, CardCatalog, CardId, Side};
use crate::core::{DrawRng, Result, SessionError};

use super::allocator::{draw, Hand};

/// Undrawn cards of one side, in catalog order.
///
/// ## Usage
///
/// ```
/// use card_pairing::{CardCatalog, DrawRng, Pool, Side};
///
/// let mut pool = Pool::full(&CardCatalog::standard(), Side::Defender);
/// let mut rng = DrawRng::new(5);
///
/// let hand = pool.draw(2, &mut rng);
/// assert_eq!(pool.len(), 6); // drawing alone leaves the pool intact
///
/// pool.remove_drawn(&hand);
/// assert_eq!(pool.len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pool {
    side: Side,
    cards: Vec<Card>,
}

impl Pool {
    /// Create a pool from explicit cards.
    pub fn new(side: Side, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            side,
            cards: cards.into_iter().collect(),
        }
    }

    /// Create a pool holding every catalog card of `side`.
    #[must_use]
    pub fn full(catalog: &CardCatalog, side: Side) -> Self {
        Self::new(side, catalog.cards(side).iter().cloned())
    }

    /// Which side this pool deals.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Cards still available, in catalog order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards still available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pool is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check if a card is still available.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.iter().any(|c| &c.id == id)
    }

    /// Fail with `InsufficientCards` unless at least `required` cards remain.
    pub fn ensure(&self, required: usize) -> Result<()> {
        if self.cards.len() < required {
            return Err(SessionError::InsufficientCards {
                side: self.side,
                remaining: self.cards.len(),
                required,
            });
        }
        Ok(())
    }

    /// Draw a random hand without removing it. See [`draw`].
    pub fn draw(&self, count: usize, rng: &mut DrawRng) -> Hand {
        draw(&self.cards, count, rng)
    }

    /// Remove every card in `hand` from the pool, matching by ID.
    ///
    /// Returns how many cards were removed.
    pub fn remove_drawn(&mut self, hand: &[Card]) -> usize {
        let before = self.cards.len();
        self.cards.retain(|c| !hand.iter().any(|h| h.id == c.id));
        before - self.cards.len()
    }
}
