//! Per-player hands and selections.

use serde::Serialize;

use crate::cards::{Card, CardId, Side};
use crate::core::{PlayerId, Result, SelectionPolicy, SessionError};
use crate::pool::Hand;

/// Outcome of a selection call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    /// The side had no selection; the card is now selected.
    Selected,
    /// Another card was selected and has been swapped out.
    Replaced { previous: CardId },
    /// The selected card was picked again and is now deselected.
    Cleared,
    /// The side is locked in; nothing changed.
    Ignored,
}

/// A player's revealed attacker/defender pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pairing<'a> {
    pub attacker: &'a Card,
    pub defender: &'a Card,
}

/// One player's hands and selections.
///
/// A selection, when set, always names a card in that side's hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    id: PlayerId,
    attacker_hand: Hand,
    defender_hand: Hand,
    selected_attacker: Option<CardId>,
    selected_defender: Option<CardId>,
}

impl Player {
    /// Create a player with both selections empty.
    #[must_use]
    pub fn new(id: PlayerId, attacker_hand: Hand, defender_hand: Hand) -> Self {
        Self {
            id,
            attacker_hand,
            defender_hand,
            selected_attacker: None,
            selected_defender: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The hand dealt from `side`'s pool.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[Card] {
        match side {
            Side::Attacker => &self.attacker_hand,
            Side::Defender => &self.defender_hand,
        }
    }

    /// Check if `card` is in the hand for `side`.
    #[must_use]
    pub fn holds(&self, side: Side, card: &CardId) -> bool {
        self.hand(side).iter().any(|c| &c.id == card)
    }

    /// ID of the selected card on `side`, if any.
    #[must_use]
    pub fn selected_id(&self, side: Side) -> Option<&CardId> {
        match side {
            Side::Attacker => self.selected_attacker.as_ref(),
            Side::Defender => self.selected_defender.as_ref(),
        }
    }

    /// The selected card on `side`, if any.
    #[must_use]
    pub fn selected(&self, side: Side) -> Option<&Card> {
        let id = self.selected_id(side)?;
        self.hand(side).iter().find(|c| &c.id == id)
    }

    /// True once both sides have a selection.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.selected_attacker.is_some() && self.selected_defender.is_some()
    }

    /// The revealed pair, present exactly when both sides are selected.
    #[must_use]
    pub fn pairing(&self) -> Option<Pairing<'_>> {
        Some(Pairing {
            attacker: self.selected(Side::Attacker)?,
            defender: self.selected(Side::Defender)?,
        })
    }

    /// Apply a pick of `card` on `side` under `policy`.
    ///
    /// Rejects cards outside the hand without changing anything.
    pub fn select(
        &mut self,
        side: Side,
        card: &CardId,
        policy: SelectionPolicy,
    ) -> Result<SelectionChange> {
        if !self.holds(side, card) {
            return Err(SessionError::CardNotInHand {
                player: self.id,
                side,
                card: card.clone(),
            });
        }

        let slot = match side {
            Side::Attacker => &mut self.selected_attacker,
            Side::Defender => &mut self.selected_defender,
        };

        let change = match (policy, slot.take()) {
            (_, None) => {
                *slot = Some(card.clone());
                SelectionChange::Selected
            }
            (SelectionPolicy::LockIn, Some(current)) => {
                *slot = Some(current);
                SelectionChange::Ignored
            }
            (SelectionPolicy::Reversible, Some(current)) if &current == card => {
                SelectionChange::Cleared
            }
            (SelectionPolicy::Reversible, Some(previous)) => {
                *slot = Some(card.clone());
                SelectionChange::Replaced { previous }
            }
        };

        Ok(change)
    }
}
