//! Typed, versioned draft history.
//!
//! The host stores a draft's picks between calls. `DraftHistory` is the only
//! shape the core accepts back: it is parsed from JSON or a compact binary
//! encoding and validated before a session is rebuilt from it.

use chrono::{DateTime, Utc};
use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{HistoryError, PlayerId, Seat, SeatMap};
use crate::pool::PoolResult;

/// One recorded pick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    pub card_id: CardId,
    pub player_id: PlayerId,
    /// 1-based, dense across the whole draft.
    pub pick_number: u32,
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only list of picks.
///
/// Backed by `im::Vector`, so cloning a session with its history is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftHistory {
    version: u32,
    picks: Vector<Pick>,
}

impl DraftHistory {
    /// Format version written by this crate.
    pub const CURRENT_VERSION: u32 = 1;

    #[must_use]
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            picks: Vector::new(),
        }
    }

    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Iterate over picks in order.
    pub fn iter(&self) -> impl Iterator<Item = &Pick> {
        self.picks.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Pick> {
        self.picks.last()
    }

    /// Number the next pick will carry.
    #[must_use]
    pub fn next_pick_number(&self) -> u32 {
        self.picks.len() as u32 + 1
    }

    #[must_use]
    pub fn contains_card(&self, card_id: CardId) -> bool {
        self.picks.iter().any(|pick| pick.card_id == card_id)
    }

    /// Picks made by one player, in order.
    pub fn picks_by(&self, player: PlayerId) -> impl Iterator<Item = &Pick> {
        self.picks.iter().filter(move |pick| pick.player_id == player)
    }

    /// Append a pick with the next dense number.
    pub(crate) fn push(&mut self, card_id: CardId, player_id: PlayerId, timestamp: DateTime<Utc>) -> &Pick {
        let pick_number = self.next_pick_number();
        self.picks.push_back(Pick {
            card_id,
            player_id,
            pick_number,
            timestamp,
        });
        &self.picks[self.picks.len() - 1]
    }

    // === Host boundary ===

    /// Parse and validate a JSON-encoded history.
    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        let history: Self = serde_json::from_str(json)?;
        history.validate()?;
        Ok(history)
    }

    pub fn to_json(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate a binary-encoded history.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HistoryError> {
        let history: Self = bincode::deserialize(bytes)?;
        history.validate()?;
        Ok(history)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, HistoryError> {
        Ok(bincode::serialize(self)?)
    }

    /// Check the invariants that hold for any history on its own: supported
    /// version, dense pick numbers from 1, and no card picked twice.
    pub fn validate(&self) -> Result<(), HistoryError> {
        if self.version != Self::CURRENT_VERSION {
            return Err(HistoryError::UnsupportedVersion {
                found: self.version,
                expected: Self::CURRENT_VERSION,
            });
        }

        let mut seen = FxHashSet::default();
        for (expected, pick) in (1u32..).zip(self.picks.iter()) {
            if pick.pick_number != expected {
                return Err(HistoryError::NonDensePickNumbers {
                    expected,
                    found: pick.pick_number,
                });
            }
            if !seen.insert(pick.card_id) {
                return Err(HistoryError::DuplicateCard(pick.card_id));
            }
        }
        Ok(())
    }

    /// Check the history against the draft it belongs to: every card is in
    /// the pool, every pick was made by a bound player, and turns alternated
    /// starting from `first_turn`.
    pub fn validate_against(
        &self,
        pool: &PoolResult,
        players: &SeatMap<PlayerId>,
        first_turn: Seat,
    ) -> Result<(), HistoryError> {
        self.validate()?;

        let mut turn = first_turn;
        for pick in self.picks.iter() {
            if !pool.contains(pick.card_id) {
                return Err(HistoryError::CardNotInPool(pick.card_id));
            }
            match players.seat_of(&pick.player_id) {
                None => {
                    return Err(HistoryError::NotAParticipant {
                        pick_number: pick.pick_number,
                    })
                }
                Some(seat) if seat != turn => {
                    return Err(HistoryError::OutOfTurn {
                        pick_number: pick.pick_number,
                    })
                }
                Some(_) => {}
            }
            turn = turn.other();
        }
        Ok(())
    }
}

impl Default for DraftHistory {
    fn default() -> Self {
        Self::new()
    }
}
