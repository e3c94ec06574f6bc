//! Random hand allocation.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{DrawRng, DEFAULT_HAND_SIZE};

/// Cards dealt to one player from one pool.
///
/// SmallVec keeps the default two-card hand inline.
pub type Hand = SmallVec<[Card; DEFAULT_HAND_SIZE]>;

/// Draw up to `count` distinct cards from `pool`.
///
/// Every size-`count` subset of `pool` is equally likely. The pool itself is
/// not modified. When `pool` has `count` or fewer cards, all of them are
/// returned in pool order.
///
/// ```
/// use card_pairing::{draw, Card, DrawRng};
///
/// let pool = vec![
///     Card::new("a", "A", ""),
///     Card::new("b", "B", ""),
///     Card::new("c", "C", ""),
/// ];
/// let mut rng = DrawRng::new(1);
///
/// assert_eq!(draw(&pool, 2, &mut rng).len(), 2);
/// assert_eq!(draw(&pool[..1], 2, &mut rng).len(), 1);
/// ```
pub fn draw(pool: &[Card], count: usize, rng: &mut DrawRng) -> Hand {
    if pool.len() <= count {
        return pool.iter().cloned().collect();
    }

    rng.sample_indices(pool.len(), count)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect()
}
