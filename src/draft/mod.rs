//! Draft sessions and their pick history.
//!
//! ## Key Types
//!
//! - `DraftSession`: Two-player state machine over a frozen pool
//! - `DraftStatus`: In progress, reset requested, or finished
//! - `DraftHistory`: Versioned, validated list of picks
//! - `DraftSnapshot`: Storage form of a session

pub mod history;
pub mod session;

pub use history::{DraftHistory, Pick};
pub use session::{
    finish_draft, pick_card, request_reset, DraftId, DraftSession, DraftSnapshot, DraftStatus, Hand,
};
