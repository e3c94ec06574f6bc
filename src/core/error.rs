//! Session errors.

use crate::cards::{CardId, Side};

use super::player::PlayerId;

/// Errors returned by session operations.
///
/// A failed operation never leaves the session partially modified.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A pool holds fewer cards than a new hand needs.
    /// Only clears after a reset, since pools never grow otherwise.
    #[error("not enough {side} cards left: {remaining} remaining, {required} required")]
    InsufficientCards {
        side: Side,
        remaining: usize,
        required: usize,
    },

    #[error("{0} does not exist")]
    UnknownPlayer(PlayerId),

    #[error("card {card} is not in {player}'s {side} hand")]
    CardNotInHand {
        player: PlayerId,
        side: Side,
        card: CardId,
    },

    #[error("card {0} is not in the catalog")]
    UnknownCard(CardId),
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SessionError::InsufficientCards {
            side: Side::Defender,
            remaining: 1,
            required: 2,
        };
        assert_eq!(
            err.to_string(),
            "not enough defender cards left: 1 remaining, 2 required"
        );

        let err = SessionError::CardNotInHand {
            player: PlayerId::new(1),
            side: Side::Attacker,
            card: CardId::new("g3"),
        };
        assert_eq!(err.to_string(), "card g3 is not in Player 1's attacker hand");

        assert_eq!(
            SessionError::UnknownPlayer(PlayerId::new(4)).to_string(),
            "Player 4 does not exist"
        );
        assert_eq!(
            SessionError::UnknownCard(CardId::new("x9")).to_string(),
            "card x9 is not in the catalog"
        );
    }
}
