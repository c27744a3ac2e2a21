//! Legality rules for picks and draft completion.
//!
//! Every function here is pure: it reads a snapshot of one player's picks
//! and never touches session state.

pub mod legality;

pub use legality::{can_finish, can_pick, LegalityReason, LegalityResult, PlayerCardStats};
