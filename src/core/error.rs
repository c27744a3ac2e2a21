//! Error types for every core operation.
//!
//! All variants are expected outcomes the host can recover from. Messages
//! are developer-facing; display text is the host's concern.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::PlayerId;
use crate::rules::LegalityReason;

/// Failures of [`generate_pool`](crate::pool::generate_pool).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Every budgeted category ran dry before the budget was reached.
    #[error("not enough units for the draft budget: reached {reached} of {budget}")]
    NotEnoughUnits { reached: u32, budget: u32 },

    /// The budget fill loop did not settle within the iteration ceiling.
    #[error("draft generation exceeded {limit} iterations")]
    IterationLimitExceeded { limit: usize },

    #[error("invalid pool configuration: {0}")]
    InvalidConfig(#[from] PoolConfigError),
}

/// Pool settings generation cannot work with.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolConfigError {
    #[error("draft budget must be positive")]
    ZeroBudget,

    #[error("origin filter must name at least one origin")]
    EmptyOriginFilter,
}

/// Failures of [`DraftSession::pick_card`](crate::draft::DraftSession::pick_card).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickError {
    #[error("draft is not in progress")]
    SessionNotInProgress,

    #[error("player is not a participant of this draft")]
    PlayerNotParticipant,

    #[error("it is not this player's turn")]
    NotYourTurn,

    #[error("{0} is not in the draft pool")]
    CardNotInPool(CardId),

    #[error("{0} has already been picked")]
    AlreadyPicked(CardId),

    /// The pool references a card the supplied catalog does not contain.
    #[error("{0} is missing from the card catalog")]
    UnknownCard(CardId),

    #[error("pick rejected: {0}")]
    Illegal(LegalityReason),
}

/// Failures of reset requests and their host-level resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResetError {
    #[error("draft is not in progress")]
    SessionNotInProgress,

    #[error("player is not a participant of this draft")]
    PlayerNotParticipant,

    #[error("no reset has been requested for this draft")]
    SessionNotResetRequested,
}

/// Failures of [`DraftSession::finish_draft`](crate::draft::DraftSession::finish_draft).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FinishError {
    #[error("draft is not in progress")]
    SessionNotInProgress,

    #[error("player is not a participant of this draft")]
    PlayerNotParticipant,

    #[error("{0} is missing from the card catalog")]
    UnknownCard(CardId),

    #[error("finish rejected: {0}")]
    Illegal(LegalityReason),
}

/// Failures at the host/core seam when loading a stored draft history.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("unsupported draft history version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("pick numbers must be dense from 1: expected {expected}, found {found}")]
    NonDensePickNumbers { expected: u32, found: u32 },

    #[error("{0} appears more than once in the draft history")]
    DuplicateCard(CardId),

    #[error("{0} in the draft history is not in the pool")]
    CardNotInPool(CardId),

    #[error("pick {pick_number} was made by a player outside this draft")]
    NotAParticipant { pick_number: u32 },

    #[error("pick {pick_number} was made out of turn")]
    OutOfTurn { pick_number: u32 },

    #[error("invalid draft history JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid draft history encoding: {0}")]
    Binary(#[from] bincode::Error),
}

/// Failures when opening a draft session or restoring a stored one.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("a draft needs two distinct players")]
    SamePlayerTwice,

    #[error("allowed points must be positive")]
    ZeroAllowedPoints,

    #[error("{0} is missing from the card catalog")]
    UnknownCard(CardId),

    #[error("{player} has spent {spent} of {allowed} allowed points")]
    OverBudget { player: PlayerId, spent: u32, allowed: u32 },

    #[error("inconsistent draft state: {0}")]
    InconsistentState(&'static str),

    #[error(transparent)]
    History(#[from] HistoryError),
}

/// Failures when building a card catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{0} is registered more than once")]
    DuplicateId(CardId),
}

/// Failures when loading draft settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid draft settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("allowed points must be positive")]
    ZeroAllowedPoints,

    #[error(transparent)]
    Pool(#[from] PoolConfigError),
}
