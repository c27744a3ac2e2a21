//! Core types: players and seats, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by the pool generator,
//! the legality rules and the turn engine.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, Seat, SeatMap};
pub use rng::DraftRng;
pub use config::{
    DraftSettings, OriginFilter, PoolConfig, DEFAULT_ALLOWED_POINTS, DEFAULT_DRAFT_BUDGET,
    DEFAULT_GODS_AMOUNT, DEFAULT_TITANS_AMOUNT, DEFAULT_TROOP_ATTACHMENT_AMOUNT,
};
pub use error::{
    CatalogError, ConfigError, FinishError, HistoryError, PickError, PoolConfigError, PoolError,
    ResetError, SessionError,
};
