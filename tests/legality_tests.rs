//! Legality rule integration tests.
//!
//! Hands here are built the way a host would see them: a player's picked
//! cards plus the cards still on offer.

use card_draft::cards::{Card, CardId, Category};
use card_draft::rules::{can_finish, can_pick, LegalityReason, LegalityResult, PlayerCardStats};

fn card(name: &str, category: Category, cost: u32) -> Card {
    Card::new(CardId::random(), name, category, cost)
}

/// With a god already held, the reservation rule no longer applies.
#[test]
fn test_god_holder_may_spend_freely() {
    let hand = vec![card("Zeus", Category::God, 5), card("Cerberus", Category::Monster, 5)];
    let available = vec![card("Hera", Category::God, 5), card("Hoplite", Category::Troop, 4)];
    let troop = &available[1];

    assert_eq!(can_pick(troop, &hand, 18, &available), LegalityResult::Allowed);

    let mut after = hand.clone();
    after.push(troop.clone());
    assert_eq!(PlayerCardStats::collect(&after, 18).remaining_points, 4);
}

/// The same pick is refused while the player still needs a god.
#[test]
fn test_godless_player_must_reserve() {
    let hand = vec![card("Cerberus", Category::Monster, 5), card("Harpy", Category::Monster, 5)];
    let available = vec![card("Hera", Category::God, 5), card("Hoplite", Category::Troop, 4)];

    assert_eq!(
        can_pick(&available[1], &hand, 18, &available).reason(),
        Some(LegalityReason::MustReservePointsForGod)
    );
    // Hera herself fits.
    assert!(can_pick(&available[0], &hand, 18, &available).is_ok());
}

/// The cheapest available god sets the reserve.
#[test]
fn test_reserve_uses_cheapest_god() {
    let hand: Vec<Card> = Vec::new();
    let available = vec![card("Poseidon", Category::God, 9), card("Ares", Category::God, 3)];
    let monster = card("Minotaur", Category::Monster, 5);

    // 10 - 5 = 5 >= 3.
    assert!(can_pick(&monster, &hand, 10, &available).is_ok());
    // 7 - 5 = 2 < 3.
    assert_eq!(
        can_pick(&monster, &hand, 7, &available).reason(),
        Some(LegalityReason::MustReservePointsForGod)
    );
}

/// Rules are checked in a fixed order; the first failure is reported.
#[test]
fn test_rule_order() {
    let hand = vec![card("Zeus", Category::God, 5), card("Cerberus", Category::Monster, 5)];

    let hydra = card("Hydra", Category::Monster, 5);
    assert_eq!(
        can_pick(&hydra, &hand, 14, &Vec::<Card>::new()).reason(),
        Some(LegalityReason::NotEnoughPoints)
    );
    assert_eq!(
        can_pick(&hydra, &hand, 15, &Vec::<Card>::new()).reason(),
        Some(LegalityReason::MonsterFiveCostLimitReached)
    );
}

/// Finishing needs a god and the exact allowance.
#[test]
fn test_finish_requirements() {
    let mut hand = vec![card("Cerberus", Category::Monster, 5), card("Hoplite", Category::Troop, 8)];
    assert_eq!(can_finish(&hand, 18).reason(), Some(LegalityReason::MustPickGodCard));

    hand.push(card("Zeus", Category::God, 4));
    assert_eq!(can_finish(&hand, 18).reason(), Some(LegalityReason::MustUseAllPoints));

    hand.push(card("Peltast", Category::Troop, 1));
    assert_eq!(can_finish(&hand, 18), LegalityResult::Allowed);
}
