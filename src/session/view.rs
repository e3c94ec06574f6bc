//! Read-only session snapshot for presentation layers.
//!
//! Everything a front-end needs to draw the table: remaining counts,
//! whether a player can join, each hand with its highlighted card, and the
//! revealed pair.

use serde::Serialize;

use crate::cards::{Card, CardId, Side};
use crate::core::PlayerId;

use super::player::Player;
use super::state::Session;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub attackers_remaining: usize,
    pub defenders_remaining: usize,
    pub can_add_player: bool,
    pub players: Vec<PlayerView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub attacker_hand: Vec<CardView>,
    pub defender_hand: Vec<CardView>,
    /// Present once both sides are selected.
    pub revealed: Option<PairingView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: CardId,
    pub name: String,
    #[serde(rename = "trait")]
    pub description: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PairingView {
    pub attacker: Card,
    pub defender: Card,
}

impl SessionView {
    pub(crate) fn of(session: &Session) -> Self {
        Self {
            attackers_remaining: session.remaining(Side::Attacker),
            defenders_remaining: session.remaining(Side::Defender),
            can_add_player: session.can_add_player(),
            players: session.players().iter().map(PlayerView::of).collect(),
        }
    }
}

impl PlayerView {
    fn of(player: &Player) -> Self {
        Self {
            id: player.id(),
            attacker_hand: hand_view(player, Side::Attacker),
            defender_hand: hand_view(player, Side::Defender),
            revealed: player.pairing().map(|p| PairingView {
                attacker: p.attacker.clone(),
                defender: p.defender.clone(),
            }),
        }
    }

    /// The hand for `side`.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[CardView] {
        match side {
            Side::Attacker => &self.attacker_hand,
            Side::Defender => &self.defender_hand,
        }
    }
}

fn hand_view(player: &Player, side: Side) -> Vec<CardView> {
    let selected = player.selected_id(side);
    player
        .hand(side)
        .iter()
        .map(|card| CardView {
            id: card.id.clone(),
            name: card.name.clone(),
            description: card.description.clone(),
            selected: selected == Some(&card.id),
        })
        .collect()
}
