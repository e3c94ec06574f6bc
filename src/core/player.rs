//! Player identification.
//!
//! Players are numbered in the order they join a session, starting at 0.
//! IDs are only meaningful within the session that issued them and are
//! reused after a reset.

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// Player indices are 0-based: the first player added is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The 1-based seat number shown to people at the table.
    #[must_use]
    pub const fn seat(self) -> u32 {
        self.0 + 1
    }

    /// Build an ID from a 1-based seat number. Returns `None` for seat 0.
    #[must_use]
    pub const fn from_seat(seat: u32) -> Option<Self> {
        if seat == 0 {
            None
        } else {
            Some(Self(seat - 1))
        }
    }

    /// Iterate over the IDs of the first `player_count` players.
    ///
    /// ```
    /// use card_pairing::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u32).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_seat_numbers() {
        assert_eq!(PlayerId::new(0).seat(), 1);
        assert_eq!(PlayerId::new(2).seat(), 3);

        assert_eq!(PlayerId::from_seat(1), Some(PlayerId::new(0)));
        assert_eq!(PlayerId::from_seat(3), Some(PlayerId::new(2)));
        assert_eq!(PlayerId::from_seat(0), None);
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[3], PlayerId::new(3));

        assert_eq!(PlayerId::all(0).count(), 0);
    }

    #[test]
    fn test_player_id_serialization() {
        let id = PlayerId::new(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");

        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
