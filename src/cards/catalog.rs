//! Card catalog for definition lookup.
//!
//! The `CardCatalog` holds the host-supplied cards for one draft. It keeps
//! insertion order (so seeded generation is reproducible) and an id index
//! for O(1) lookup.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId};
use crate::core::CatalogError;

/// Read-only view of the host's card catalog.
///
/// ## Example
///
/// ```
/// use card_draft::cards::{Card, CardCatalog, CardId, Category};
///
/// let zeus = Card::new(CardId::random(), "Zeus", Category::God, 5);
/// let id = zeus.id;
///
/// let catalog = CardCatalog::from_cards(vec![zeus]).unwrap();
/// assert_eq!(catalog.get(id).unwrap().name, "Zeus");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of cards.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.insert(card)?;
        }
        Ok(catalog)
    }

    /// Add a card. Fails if a card with the same ID already exists.
    pub fn insert(&mut self, card: Card) -> Result<(), CatalogError> {
        if self.index.contains_key(&card.id) {
            return Err(CatalogError::DuplicateId(card.id));
        }
        self.index.insert(card.id, self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Resolve a list of IDs to cards.
    ///
    /// Returns the first ID that is not in the catalog on failure.
    pub fn resolve(&self, ids: impl IntoIterator<Item = CardId>) -> Result<Vec<&Card>, CardId> {
        ids.into_iter().map(|id| self.get(id).ok_or(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;

    fn card(name: &str, category: Category, cost: u32) -> Card {
        Card::new(CardId::random(), name, category, cost)
    }

    #[test]
    fn test_insert_and_get() {
        let hero = card("Perseus", Category::Hero, 3);
        let id = hero.id;
        let catalog = CardCatalog::from_cards(vec![hero]).unwrap();

        assert_eq!(catalog.get(id).unwrap().name, "Perseus");
        assert!(catalog.contains(id));
        assert!(catalog.get(CardId::random()).is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let hero = card("Perseus", Category::Hero, 3);
        let copy = hero.clone();

        let err = CardCatalog::from_cards(vec![hero, copy]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(_)));
    }

    #[test]
    fn test_iter_keeps_insertion_order() {
        let catalog = CardCatalog::from_cards(vec![
            card("Goblin A", Category::Troop, 1),
            card("Zeus", Category::God, 5),
            card("Goblin B", Category::Troop, 1),
        ])
        .unwrap();

        let names: Vec<_> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Goblin A", "Zeus", "Goblin B"]);
    }

    #[test]
    fn test_resolve() {
        let a = card("A", Category::Troop, 1);
        let b = card("B", Category::Troop, 2);
        let ids = [a.id, b.id];
        let catalog = CardCatalog::from_cards(vec![a, b]).unwrap();

        let cards = catalog.resolve(ids).unwrap();
        assert_eq!(cards.len(), 2);

        let missing = CardId::random();
        assert_eq!(catalog.resolve([ids[0], missing]).unwrap_err(), missing);
    }
}
