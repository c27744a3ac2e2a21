//! Card system: catalog entries and the catalog view.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for catalog cards
//! - `Category`: Unit category (titan, god, monster, hero, troop, ...)
//! - `Card`: Immutable catalog entry
//! - `CardCatalog`: Ordered, indexed view of the host's catalog

pub mod catalog;
pub mod definition;

pub use catalog::CardCatalog;
pub use definition::{Card, CardId, Category, Origin};
