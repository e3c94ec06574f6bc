//! The session controller.

use im::Vector;
use log::{debug, info, warn};

use crate::cards::{Card, CardCatalog, CardId, Side};
use crate::core::{DrawRng, PlayerId, Result, SessionConfig, SessionError};
use crate::pool::Pool;

use super::player::{Pairing, Player, SelectionChange};
use super::view::SessionView;

/// All state of one game: catalog, pools, players and RNG.
///
/// Uses an `im` vector for players so cloning a session is O(1).
///
/// ## Usage
///
/// ```
/// use card_pairing::{Session, SessionConfig, SessionError, Side};
///
/// let mut session = Session::new(SessionConfig::default().with_seed(1));
///
/// for _ in 0..3 {
///     session.add_player().unwrap();
/// }
/// assert_eq!(session.remaining(Side::Attacker), 0);
/// assert!(matches!(
///     session.add_player(),
///     Err(SessionError::InsufficientCards { .. })
/// ));
///
/// session.reset();
/// assert_eq!(session.player_count(), 0);
/// assert_eq!(session.remaining(Side::Defender), 6);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    catalog: CardCatalog,
    attackers: Pool,
    defenders: Pool,
    players: Vector<Player>,
    rng: DrawRng,
}

impl Session {
    /// Create a session over the standard catalog.
    ///
    /// Seeds the RNG from `config.seed`, or from entropy when unset.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_catalog(config, CardCatalog::standard())
    }

    /// Create a session over a custom catalog.
    ///
    /// Panics if `config.hand_size` is zero.
    #[must_use]
    pub fn with_catalog(config: SessionConfig, catalog: CardCatalog) -> Self {
        config.validate();
        let rng = config.seed.map_or_else(DrawRng::from_entropy, DrawRng::new);
        info!(
            "session created: seed {}, policy {:?}, hand size {}",
            rng.seed(),
            config.policy,
            config.hand_size
        );

        Self {
            attackers: Pool::full(&catalog, Side::Attacker),
            defenders: Pool::full(&catalog, Side::Defender),
            players: Vector::new(),
            config,
            catalog,
            rng,
        }
    }

    /// Replace the random source (builder pattern).
    ///
    /// `config().seed` follows the new RNG's seed.
    #[must_use]
    pub fn with_rng(mut self, rng: DrawRng) -> Self {
        info!("session RNG replaced: seed {} -> {}", self.rng.seed(), rng.seed());
        self.config.seed = Some(rng.seed());
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Seed of the random source, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Pools ===

    /// The pool of undrawn cards for `side`.
    #[must_use]
    pub fn pool(&self, side: Side) -> &Pool {
        match side {
            Side::Attacker => &self.attackers,
            Side::Defender => &self.defenders,
        }
    }

    /// Number of undrawn cards on `side`.
    #[must_use]
    pub fn remaining(&self, side: Side) -> usize {
        self.pool(side).len()
    }

    /// True exactly when `add_player` would succeed.
    #[must_use]
    pub fn can_add_player(&self) -> bool {
        let required = self.config.hand_size;
        self.attackers.len() >= required && self.defenders.len() >= required
    }

    // === Players ===

    /// Players in the order they joined.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Deal a new player one hand from each pool.
    ///
    /// Fails with `InsufficientCards` if either pool holds fewer than
    /// `hand_size` cards; the session is then left untouched.
    pub fn add_player(&mut self) -> Result<PlayerId> {
        let required = self.config.hand_size;
        if let Err(err) = self
            .attackers
            .ensure(required)
            .and_then(|()| self.defenders.ensure(required))
        {
            warn!("cannot add player: {}", err);
            return Err(err);
        }

        let id = PlayerId::new(self.players.len() as u32);
        let attacker_hand = self.attackers.draw(required, &mut self.rng);
        let defender_hand = self.defenders.draw(required, &mut self.rng);

        self.attackers.remove_drawn(&attacker_hand);
        self.defenders.remove_drawn(&defender_hand);

        debug!(
            "{} dealt attackers [{}] and defenders [{}]; {}/{} left",
            id,
            join_ids(&attacker_hand),
            join_ids(&defender_hand),
            self.attackers.len(),
            self.defenders.len()
        );

        self.players
            .push_back(Player::new(id, attacker_hand, defender_hand));
        Ok(id)
    }

    /// Pick `card` from `player`'s hand for `side` under the configured policy.
    ///
    /// Only that player's selection on that side can change.
    pub fn select_card(
        &mut self,
        player: PlayerId,
        side: Side,
        card: &CardId,
    ) -> Result<SelectionChange> {
        let policy = self.config.policy;
        let target = self
            .players
            .get_mut(player.index())
            .ok_or(SessionError::UnknownPlayer(player))?;

        let change = target.select(side, card, policy)?;
        debug!("{} {} pick {}: {:?}", player, side, card, change);
        Ok(change)
    }

    /// Like [`Session::select_card`], with the side looked up from the catalog.
    pub fn select_by_id(&mut self, player: PlayerId, card: &CardId) -> Result<SelectionChange> {
        let side = self
            .catalog
            .side_of(card)
            .ok_or_else(|| SessionError::UnknownCard(card.clone()))?;
        self.select_card(player, side, card)
    }

    /// The revealed pair for `player`, once both sides are selected.
    #[must_use]
    pub fn reveal(&self, player: PlayerId) -> Option<Pairing<'_>> {
        self.player(player)?.pairing()
    }

    /// Remove every player and refill both pools from the catalog.
    ///
    /// The RNG keeps its position, so the next round deals differently.
    pub fn reset(&mut self) {
        self.players.clear();
        self.attackers = Pool::full(&self.catalog, Side::Attacker);
        self.defenders = Pool::full(&self.catalog, Side::Defender);
        info!("session reset");
    }

    /// Snapshot for presentation layers.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView::of(self)
    }
}

fn join_ids(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
