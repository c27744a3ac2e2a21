//! Pick and finish legality.
//!
//! Pure predicates over a snapshot of one player's picks. The turn engine
//! calls them before every transition, and hosts can call them directly to
//! disable UI affordances without touching session state.
//!
//! Pick rules, first failure wins:
//!
//! 1. The card must fit the player's remaining points.
//! 2. At most one god per player.
//! 3. At most one monster costing exactly five per player.
//! 4. While the player holds no god, a non-god pick must leave enough points
//!    for the cheapest god still available. Skipped when no god is available.
//!
//! Finish rules: the player holds a god and has spent exactly the allowed
//! points.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Category};

/// Why a pick or finish request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalityReason {
    NotEnoughPoints,
    GodLimitReached,
    MonsterFiveCostLimitReached,
    MustReservePointsForGod,
    MustPickGodCard,
    MustUseAllPoints,
}

impl std::fmt::Display for LegalityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            LegalityReason::NotEnoughPoints => "not enough points",
            LegalityReason::GodLimitReached => "god card limit reached",
            LegalityReason::MonsterFiveCostLimitReached => "five-cost monster limit reached",
            LegalityReason::MustReservePointsForGod => "points must be reserved for a god card",
            LegalityReason::MustPickGodCard => "a god card must be picked",
            LegalityReason::MustUseAllPoints => "all points must be used",
        };
        f.write_str(text)
    }
}

/// Outcome of a legality check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "reason")]
pub enum LegalityResult {
    Allowed,
    Rejected(LegalityReason),
}

impl LegalityResult {
    #[must_use]
    pub fn is_ok(self) -> bool {
        matches!(self, LegalityResult::Allowed)
    }

    #[must_use]
    pub fn reason(self) -> Option<LegalityReason> {
        match self {
            LegalityResult::Allowed => None,
            LegalityResult::Rejected(reason) => Some(reason),
        }
    }

    /// Convert into a `Result` for `?` propagation.
    pub fn into_result(self) -> Result<(), LegalityReason> {
        match self {
            LegalityResult::Allowed => Ok(()),
            LegalityResult::Rejected(reason) => Err(reason),
        }
    }
}

/// Summary of one player's picks, the input every rule is built from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCardStats {
    pub gods: usize,
    pub five_cost_monsters: usize,
    pub other_monsters: usize,
    pub others: usize,
    pub total_cost: u32,
    pub remaining_points: u32,
}

impl PlayerCardStats {
    /// Summarize a player's picks against their allowed points.
    pub fn collect<'a>(player_cards: impl IntoIterator<Item = &'a Card>, allowed_points: u32) -> Self {
        let mut stats = Self::default();
        for card in player_cards {
            stats.total_cost += card.cost;
            match card.category {
                Category::God => stats.gods += 1,
                Category::Monster if card.cost == 5 => stats.five_cost_monsters += 1,
                Category::Monster => stats.other_monsters += 1,
                _ => stats.others += 1,
            }
        }
        stats.remaining_points = allowed_points.saturating_sub(stats.total_cost);
        stats
    }

    /// Number of cards summarized.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.gods + self.five_cost_monsters + self.other_monsters + self.others
    }
}

/// Cheapest god among the available cards.
fn min_god_cost<'a>(available_cards: impl IntoIterator<Item = &'a Card>) -> Option<u32> {
    available_cards
        .into_iter()
        .filter(|card| card.is(Category::God))
        .map(|card| card.cost)
        .min()
}

/// Check whether `card` may be added to a player's picks.
///
/// `available_cards` is the pool still on offer; it is only consulted for
/// the god reservation rule.
pub fn can_pick<'a, 'b>(
    card: &Card,
    player_cards: impl IntoIterator<Item = &'a Card>,
    allowed_points: u32,
    available_cards: impl IntoIterator<Item = &'b Card>,
) -> LegalityResult {
    let stats = PlayerCardStats::collect(player_cards, allowed_points);

    if card.cost > stats.remaining_points {
        return LegalityResult::Rejected(LegalityReason::NotEnoughPoints);
    }

    if card.is(Category::God) && stats.gods >= 1 {
        return LegalityResult::Rejected(LegalityReason::GodLimitReached);
    }

    if card.is_five_cost_monster() && stats.five_cost_monsters >= 1 {
        return LegalityResult::Rejected(LegalityReason::MonsterFiveCostLimitReached);
    }

    if stats.gods == 0 && !card.is(Category::God) {
        if let Some(min_god) = min_god_cost(available_cards) {
            // Rule 1 passed, so this cannot underflow.
            let after_pick = stats.remaining_points - card.cost;
            if after_pick < min_god {
                return LegalityResult::Rejected(LegalityReason::MustReservePointsForGod);
            }
        }
    }

    LegalityResult::Allowed
}

/// Check whether a player's picks complete their draft.
pub fn can_finish<'a>(
    player_cards: impl IntoIterator<Item = &'a Card>,
    allowed_points: u32,
) -> LegalityResult {
    let stats = PlayerCardStats::collect(player_cards, allowed_points);

    if stats.gods == 0 {
        return LegalityResult::Rejected(LegalityReason::MustPickGodCard);
    }

    if stats.total_cost != allowed_points {
        return LegalityResult::Rejected(LegalityReason::MustUseAllPoints);
    }

    LegalityResult::Allowed
}
