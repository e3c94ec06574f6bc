//! Card catalog for the two sides.
//!
//! The `CardCatalog` stores every card a session can deal, split by side,
//! in a fixed order. It provides lookup by `CardId` and is what `reset`
//! restores the pools from.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId, Side};

const ATTACKER_CARDS: [(&str, &str, &str); 6] = [
    ("g1", "차도남 검사", "항상 차가운 눈빛을 가진 천재"),
    ("g2", "초딩같은 연예인", "까불까불하지만 집착 강함"),
    ("g3", "불량 고등학생", "말은 거칠지만 손은 따뜻함"),
    ("g4", "능글맞은 재벌 3세", "돈과 재치가 넘치는 능구렁이"),
    ("g5", "엄격한 의사", "환자에겐 차갑지만 진심은 따뜻함"),
    ("g6", "무뚝뚝한 형사", "말보다는 행동으로 보여주는 타입"),
];

const DEFENDER_CARDS: [(&str, &str, &str); 6] = [
    ("s1", "츤데레 대학생", "겉은 새침하지만 속은 여려움"),
    ("s2", "괴팍한 천재 요리사", "칼보다 입이 더 빠름"),
    ("s3", "조용한 웹툰 작가", "대사 한 마디에 모든 감정을 담는다"),
    ("s4", "엉뚱한 비서", "실수투성이지만 위기에 강함"),
    ("s5", "야무진 고등학생", "어른보다 더 어른스러운 철두철미함"),
    ("s6", "당찬 사업가", "야망 넘치고 솔직한 성격의 소유자"),
];

/// Catalog of card definitions, ordered per side.
///
/// ## Example
///
/// ```
/// use card_pairing::cards::{Card, CardCatalog, CardId, Side};
///
/// let catalog = CardCatalog::new()
///     .with_card(Side::Attacker, Card::new("a1", "Knight", "Brave"))
///     .with_card(Side::Defender, Card::new("d1", "Wall", "Sturdy"));
///
/// assert_eq!(catalog.side_of(&CardId::new("d1")), Some(Side::Defender));
/// assert_eq!(catalog.get(&CardId::new("a1")).unwrap().name, "Knight");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    attackers: Vec<Card>,
    defenders: Vec<Card>,
    sides: FxHashMap<CardId, Side>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog: six attacker and six defender characters.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for (id, name, description) in ATTACKER_CARDS {
            catalog.register(Side::Attacker, Card::new(id, name, description));
        }
        for (id, name, description) in DEFENDER_CARDS {
            catalog.register(Side::Defender, Card::new(id, name, description));
        }
        catalog
    }

    /// Register a card on one side.
    ///
    /// Panics if a card with the same ID already exists on either side.
    pub fn register(&mut self, side: Side, card: Card) {
        if self.sides.contains_key(&card.id) {
            panic!("Card {} already registered", card.id);
        }
        self.sides.insert(card.id.clone(), side);
        self.cards_mut(side).push(card);
    }

    /// Register a card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, side: Side, card: Card) -> Self {
        self.register(side, card);
        self
    }

    /// All cards of one side, in registration order.
    #[must_use]
    pub fn cards(&self, side: Side) -> &[Card] {
        match side {
            Side::Attacker => &self.attackers,
            Side::Defender => &self.defenders,
        }
    }

    fn cards_mut(&mut self, side: Side) -> &mut Vec<Card> {
        match side {
            Side::Attacker => &mut self.attackers,
            Side::Defender => &mut self.defenders,
        }
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        let side = self.side_of(id)?;
        self.cards(side).iter().find(|c| &c.id == id)
    }

    /// Which side a card belongs to.
    #[must_use]
    pub fn side_of(&self, id: &CardId) -> Option<Side> {
        self.sides.get(id).copied()
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.sides.contains_key(id)
    }

    /// Total number of cards on both sides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sides.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = CardCatalog::standard();

        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.cards(Side::Attacker).len(), 6);
        assert_eq!(catalog.cards(Side::Defender).len(), 6);

        let first = &catalog.cards(Side::Attacker)[0];
        assert_eq!(first.id, CardId::new("g1"));
        assert_eq!(first.name, "차도남 검사");

        let last = &catalog.cards(Side::Defender)[5];
        assert_eq!(last.id, CardId::new("s6"));
    }

    #[test]
    fn test_sides_are_disjoint() {
        let catalog = CardCatalog::standard();

        for card in catalog.cards(Side::Attacker) {
            assert_eq!(catalog.side_of(&card.id), Some(Side::Attacker));
        }
        for card in catalog.cards(Side::Defender) {
            assert_eq!(catalog.side_of(&card.id), Some(Side::Defender));
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = CardCatalog::standard();

        let card = catalog.get(&CardId::new("s3")).unwrap();
        assert_eq!(card.name, "조용한 웹툰 작가");

        assert!(catalog.contains(&CardId::new("g6")));
        assert!(!catalog.contains(&CardId::new("g7")));
        assert!(catalog.get(&CardId::new("g7")).is_none());
        assert_eq!(catalog.side_of(&CardId::new("g7")), None);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let _ = CardCatalog::new()
            .with_card(Side::Attacker, Card::new("x", "A", ""))
            .with_card(Side::Defender, Card::new("x", "B", ""));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = CardCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.cards(Side::Attacker).is_empty());
    }
}
