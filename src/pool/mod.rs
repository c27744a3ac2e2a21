//! Draft pool generation.
//!
//! - `generate_pool`: catalog + `PoolConfig` + RNG -> `PoolResult`
//! - `Supply`: shrinking per-category candidate list
//! - Exclusivity tokens for titan/monster pairs and hero variants

pub mod generator;
pub mod supply;

pub use generator::{generate_pool, PoolResult, MAX_DRAFT_ITERATIONS};
pub use supply::{matching_token, Draw, Supply, HERO_VARIANTS, TITAN_MONSTER_PAIRS};
