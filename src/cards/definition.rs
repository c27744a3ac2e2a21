//! Card definitions - static catalog data.
//!
//! A `Card` is a read-only catalog entry supplied by the host. The core only
//! reads its category, cost, name (for variant matching) and origin.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a catalog card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub Uuid);

impl CardId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random card ID.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Unit category of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Titan,
    God,
    Monster,
    Hero,
    Troop,
    TroopAttachment,
    ArtOfWar,
}

impl Category {
    /// Categories whose cost counts against the pool's draft budget.
    #[must_use]
    pub const fn is_budgeted(self) -> bool {
        matches!(self, Category::Monster | Category::Hero | Category::Troop)
    }
}

/// Origin (expansion) tag of a card.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Origin(pub String);

impl Origin {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Origin {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// Immutable catalog entry.
///
/// ## Example
///
/// ```
/// use card_draft::cards::{Card, CardId, Category};
///
/// let god = Card::new(CardId::random(), "Zeus", Category::God, 5)
///     .with_origin("MBP Core");
///
/// assert!(god.is(Category::God));
/// assert_eq!(god.origin.as_ref().map(|o| o.as_str()), Some("MBP Core"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub category: Category,
    pub cost: u32,
    #[serde(default)]
    pub origin: Option<Origin>,
}

impl Card {
    /// Create a card without an origin tag.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, category: Category, cost: u32) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            cost,
            origin: None,
        }
    }

    /// Set the origin tag (builder pattern).
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<Origin>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Check the card's category.
    #[must_use]
    pub fn is(&self, category: Category) -> bool {
        self.category == category
    }

    /// True for a monster costing exactly five, which is capped per player.
    #[must_use]
    pub fn is_five_cost_monster(&self) -> bool {
        self.category == Category::Monster && self.cost == 5
    }
}
