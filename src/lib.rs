//! # card-draft
//!
//! Core of a two-player card draft: pool generation, pick legality and the
//! turn engine.
//!
//! ## Design Principles
//!
//! 1. **Host Owns I/O**: The crate never touches storage, sockets or
//!    clocks it wasn't handed. Catalogs, player IDs and stored histories
//!    come in as plain values.
//!
//! 2. **Deterministic Randomness**: Every random choice goes through
//!    `DraftRng`, so a fixed seed reproduces the same pool and opening seat.
//!
//! 3. **Validate at the Seam**: Stored histories are typed and versioned,
//!    and are checked before a session is rebuilt from them.
//!
//! ## Architecture
//!
//! - **Value Transitions**: Session operations borrow the current session
//!   and return a new one. A rejected operation leaves the caller's value
//!   unchanged.
//!
//! - **Persistent Data Structures**: Pick history is an `im::Vector`, so
//!   returning a new session per transition is O(1) in history length.
//!
//! ## Modules
//!
//! - `core`: Players and seats, RNG, configuration, errors
//! - `cards`: Catalog entries and the catalog view
//! - `pool`: Randomized, budget-constrained pool generation
//! - `rules`: Pick and finish legality
//! - `draft`: Draft sessions and pick history

pub mod core;
pub mod cards;
pub mod pool;
pub mod rules;
pub mod draft;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, Seat, SeatMap,
    DraftRng,
    DraftSettings, OriginFilter, PoolConfig,
    CatalogError, ConfigError, FinishError, HistoryError, PickError, PoolConfigError, PoolError,
    ResetError, SessionError,
};

pub use crate::cards::{Card, CardCatalog, CardId, Category, Origin};

pub use crate::pool::{generate_pool, PoolResult, MAX_DRAFT_ITERATIONS};

pub use crate::rules::{can_finish, can_pick, LegalityReason, LegalityResult, PlayerCardStats};

pub use crate::draft::{
    finish_draft, pick_card, request_reset,
    DraftHistory, DraftId, DraftSession, DraftSnapshot, DraftStatus, Pick,
};
