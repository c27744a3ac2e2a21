//! Per-category card supply and the variant exclusivity rules.
//!
//! A `Supply` is the shrinking list of cards still eligible for one
//! category during pool generation. Every draw removes the drawn card, so
//! each card is offered at most once.

use crate::cards::Card;
use crate::core::DraftRng;

/// Titan names that share a unit with a monster. Selecting the titan
/// removes the monster version from the supply.
pub const TITAN_MONSTER_PAIRS: &[&str] = &["Fenrir", "Ammit", "Kraken"];

/// Hero names printed in several variants. Selecting one removes the others.
pub const HERO_VARIANTS: &[&str] = &["Achilles", "Heracles", "Lagertha"];

/// First token from `tokens` contained in `name`, if any.
#[must_use]
pub fn matching_token(name: &str, tokens: &[&'static str]) -> Option<&'static str> {
    tokens.iter().copied().find(|token| name.contains(token))
}

/// Outcome of one budget-constrained draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Draw<'a> {
    /// The card fit the remaining budget and joins the pool.
    Added(&'a Card),
    /// Nothing fit; this card was discarded from the supply to make progress.
    Discarded(&'a Card),
}

impl<'a> Draw<'a> {
    #[must_use]
    pub fn card(self) -> &'a Card {
        match self {
            Draw::Added(card) | Draw::Discarded(card) => card,
        }
    }
}

/// Remaining candidates of one category.
#[derive(Clone, Debug, Default)]
pub struct Supply<'a> {
    cards: Vec<&'a Card>,
}

impl<'a> Supply<'a> {
    #[must_use]
    pub fn new(cards: Vec<&'a Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Draw one card uniformly at random, ignoring cost.
    pub fn draw(&mut self, rng: &mut DraftRng) -> Option<&'a Card> {
        rng.take(&mut self.cards)
    }

    /// Draw one card that costs at most `remaining`.
    ///
    /// When cards remain but none is affordable, one unaffordable card is
    /// discarded instead so repeated calls always shrink the supply.
    /// Returns `None` only when the supply is empty.
    pub fn draw_within(&mut self, rng: &mut DraftRng, remaining: u32) -> Option<Draw<'a>> {
        if self.cards.is_empty() {
            return None;
        }

        let affordable: Vec<usize> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.cost <= remaining)
            .map(|(i, _)| i)
            .collect();

        if let Some(&index) = rng.choose(&affordable) {
            Some(Draw::Added(self.cards.swap_remove(index)))
        } else {
            self.draw(rng).map(Draw::Discarded)
        }
    }

    /// Remove every card whose name contains `token`.
    ///
    /// Returns the number of cards removed.
    pub fn remove_token(&mut self, token: &str) -> usize {
        let before = self.cards.len();
        self.cards.retain(|card| !card.name.contains(token));
        before - self.cards.len()
    }

    /// Apply an exclusivity rule after `selected` was taken: if its name
    /// carries one of `tokens`, drop every remaining card sharing that token.
    pub fn exclude_variants_of(&mut self, selected: &Card, tokens: &[&'static str]) -> usize {
        match matching_token(&selected.name, tokens) {
            Some(token) => self.remove_token(token),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Category};

    fn monster(name: &str, cost: u32) -> Card {
        Card::new(CardId::random(), name, Category::Monster, cost)
    }

    #[test]
    fn test_matching_token() {
        assert_eq!(matching_token("Fenrir, the Unbound", TITAN_MONSTER_PAIRS), Some("Fenrir"));
        assert_eq!(matching_token("Young Achilles", HERO_VARIANTS), Some("Achilles"));
        assert_eq!(matching_token("Minotaur", TITAN_MONSTER_PAIRS), None);
    }

    #[test]
    fn test_draw_within_prefers_affordable() {
        let cards = vec![monster("Cheap", 1), monster("Pricey", 9)];
        let mut rng = DraftRng::new(3);

        for seed in 0..20 {
            let mut rng_i = DraftRng::new(seed);
            let mut supply = Supply::new(cards.iter().collect());
            let draw = supply.draw_within(&mut rng_i, 2).unwrap();
            assert_eq!(draw, Draw::Added(&cards[0]));
            assert_eq!(supply.len(), 1);
        }

        let mut supply = Supply::new(vec![&cards[1]]);
        assert_eq!(supply.draw_within(&mut rng, 2), Some(Draw::Discarded(&cards[1])));
        assert!(supply.is_empty());
        assert_eq!(supply.draw_within(&mut rng, 2), None);
    }

    #[test]
    fn test_exclude_variants() {
        let cards = vec![
            monster("Fenrir Pup", 3),
            monster("Fenrir", 4),
            monster("Kraken Spawn", 2),
        ];
        let titan = Card::new(CardId::random(), "Fenrir the Titan", Category::Titan, 0);

        let mut supply = Supply::new(cards.iter().collect());
        assert_eq!(supply.exclude_variants_of(&titan, TITAN_MONSTER_PAIRS), 2);
        assert_eq!(supply.len(), 1);

        let plain = Card::new(CardId::random(), "Cronus", Category::Titan, 0);
        assert_eq!(supply.exclude_variants_of(&plain, TITAN_MONSTER_PAIRS), 0);
    }
}
