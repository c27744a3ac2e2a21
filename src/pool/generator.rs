//! Randomized, constrained pool generation.
//!
//! The pool is built in four phases:
//!
//! 1. Titans, drawn without replacement. A titan sharing a unit with a
//!    monster removes that monster from the monster supply.
//! 2. Gods, drawn without replacement.
//! 3. Troop attachments, drawn without replacement.
//! 4. Budget fill: monsters, heroes and troops are drawn in rotation until
//!    their summed cost reaches the draft budget exactly, or a whole round
//!    adds nothing because no remaining card fits.
//!
//! Only phase 4 spends budget; the first three are free.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::supply::{Draw, Supply, HERO_VARIANTS, TITAN_MONSTER_PAIRS};
use crate::cards::{Card, CardCatalog, CardId, Category};
use crate::core::{DraftRng, PoolConfig, PoolError};

/// Ceiling on budget-fill iterations.
pub const MAX_DRAFT_ITERATIONS: usize = 10_000;

/// The frozen set of cards offered to both players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolResult {
    /// Selected card IDs in selection order: titans, gods, attachments, budget fill.
    pub card_ids: Vec<CardId>,

    /// Summed cost of the monster, hero and troop entries.
    pub total_cost: u32,

    pub selected_count: usize,
}

impl PoolResult {
    /// Build a result from stored IDs, e.g. when the host reloads a draft.
    #[must_use]
    pub fn new(card_ids: Vec<CardId>, total_cost: u32) -> Self {
        let selected_count = card_ids.len();
        Self {
            card_ids,
            total_cost,
            selected_count,
        }
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.card_ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.card_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card_ids.is_empty()
    }
}

/// Eligible cards split by category.
#[derive(Default)]
struct Supplies<'a> {
    titans: Supply<'a>,
    gods: Supply<'a>,
    attachments: Supply<'a>,
    monsters: Supply<'a>,
    heroes: Supply<'a>,
    troops: Supply<'a>,
}

impl<'a> Supplies<'a> {
    fn partition(cards: impl Iterator<Item = &'a Card>) -> Self {
        let mut buckets: [Vec<&'a Card>; 6] = Default::default();
        for card in cards {
            let slot = match card.category {
                Category::Titan => 0,
                Category::God => 1,
                Category::TroopAttachment => 2,
                Category::Monster => 3,
                Category::Hero => 4,
                Category::Troop => 5,
                Category::ArtOfWar => continue,
            };
            buckets[slot].push(card);
        }
        let [titans, gods, attachments, monsters, heroes, troops] = buckets;
        Self {
            titans: Supply::new(titans),
            gods: Supply::new(gods),
            attachments: Supply::new(attachments),
            monsters: Supply::new(monsters),
            heroes: Supply::new(heroes),
            troops: Supply::new(troops),
        }
    }

    fn budgeted_exhausted(&self) -> bool {
        self.monsters.is_empty() && self.heroes.is_empty() && self.troops.is_empty()
    }
}

/// Generate a draft pool from the catalog.
///
/// Zero-cost cards and cards rejected by the origin filter never enter the
/// pool. Randomness comes only from `rng`, so a fixed seed reproduces the
/// same pool for the same catalog.
///
/// ## Errors
///
/// - [`PoolError::InvalidConfig`] for a zero budget or an empty origin filter.
/// - [`PoolError::NotEnoughUnits`] when every budgeted category runs dry
///   before the budget is reached.
///
/// A pool whose remaining cards are all too expensive for the leftover
/// budget is returned as is, with `total_cost` below the budget.
/// - [`PoolError::IterationLimitExceeded`] when the fill loop does not settle
///   within [`MAX_DRAFT_ITERATIONS`].
pub fn generate_pool(
    catalog: &CardCatalog,
    config: &PoolConfig,
    rng: &mut DraftRng,
) -> Result<PoolResult, PoolError> {
    config.validate()?;

    let mut supplies = Supplies::partition(
        catalog
            .iter()
            .filter(|card| card.cost > 0 && config.origin_filter.allows(card)),
    );
    debug!(
        titans = supplies.titans.len(),
        gods = supplies.gods.len(),
        monsters = supplies.monsters.len(),
        heroes = supplies.heroes.len(),
        troops = supplies.troops.len(),
        budget = config.draft_budget,
        "generating draft pool"
    );

    let mut card_ids = Vec::new();

    for _ in 0..config.titans_amount {
        let Some(titan) = supplies.titans.draw(rng) else {
            break;
        };
        let removed = supplies.monsters.exclude_variants_of(titan, TITAN_MONSTER_PAIRS);
        trace!(card = %titan.id, name = %titan.name, removed, "selected titan");
        card_ids.push(titan.id);
    }

    card_ids.extend(draw_free(&mut supplies.gods, config.gods_amount, rng));
    card_ids.extend(draw_free(&mut supplies.attachments, config.troop_attachment_amount, rng));

    let (fill_ids, total_cost) = fill_budget(&mut supplies, config.draft_budget, rng)?;
    card_ids.extend(fill_ids);

    debug!(selected = card_ids.len(), total_cost, "draft pool generated");
    Ok(PoolResult::new(card_ids, total_cost))
}

/// Draw up to `amount` cards without replacement.
fn draw_free(supply: &mut Supply<'_>, amount: usize, rng: &mut DraftRng) -> Vec<CardId> {
    (0..amount)
        .map_while(|_| supply.draw(rng))
        .map(|card| card.id)
        .collect()
}

/// Rotate through monsters, heroes and troops until `budget` is spent or a
/// round adds no card.
fn fill_budget(
    supplies: &mut Supplies<'_>,
    budget: u32,
    rng: &mut DraftRng,
) -> Result<(Vec<CardId>, u32), PoolError> {
    let mut selected = Vec::new();
    let mut spent = 0u32;
    let mut iterations = 0usize;

    while spent < budget {
        if iterations >= MAX_DRAFT_ITERATIONS {
            warn!(spent, budget, "budget fill hit the iteration ceiling");
            return Err(PoolError::IterationLimitExceeded { limit: MAX_DRAFT_ITERATIONS });
        }
        iterations += 1;
        let mut added_this_round = false;

        for category in [Category::Monster, Category::Hero, Category::Troop] {
            if spent == budget {
                break;
            }
            let supply = match category {
                Category::Monster => &mut supplies.monsters,
                Category::Hero => &mut supplies.heroes,
                _ => &mut supplies.troops,
            };
            let Some(draw) = supply.draw_within(rng, budget - spent) else {
                continue;
            };
            if category == Category::Hero {
                supply.exclude_variants_of(draw.card(), HERO_VARIANTS);
            }
            match draw {
                Draw::Added(card) => {
                    trace!(card = %card.id, cost = card.cost, ?category, "added to pool");
                    spent += card.cost;
                    selected.push(card.id);
                    added_this_round = true;
                }
                Draw::Discarded(card) => {
                    trace!(card = %card.id, cost = card.cost, ?category, "discarded, over budget");
                }
            }
        }

        if spent < budget && supplies.budgeted_exhausted() {
            debug!(spent, budget, "budgeted supply exhausted");
            return Err(PoolError::NotEnoughUnits { reached: spent, budget });
        }
        if !added_this_round {
            debug!(spent, budget, "no affordable card left, pool under budget");
            break;
        }
    }

    Ok((selected, spent))
}
