//! Draft configuration types.
//!
//! The host configures a draft by providing:
//! - `PoolConfig`: how the shared pool is generated
//! - `DraftSettings`: the pool config plus the per-player point budget
//!
//! Both are plain values with builder methods and serde support, so hosts
//! can keep them in whatever store they already use.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, PoolConfigError};
use crate::cards::{Card, Origin};

/// Default cost budget for the budgeted part of the pool.
pub const DEFAULT_DRAFT_BUDGET: u32 = 40;
/// Default number of gods offered.
pub const DEFAULT_GODS_AMOUNT: usize = 4;
/// Default number of titans offered.
pub const DEFAULT_TITANS_AMOUNT: usize = 0;
/// Default number of troop attachments offered.
pub const DEFAULT_TROOP_ATTACHMENT_AMOUNT: usize = 0;
/// Default per-player point budget.
pub const DEFAULT_ALLOWED_POINTS: u32 = 18;

/// Which card origins may enter the pool.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "origins")]
pub enum OriginFilter {
    /// No filtering. Cards without an origin are allowed.
    #[default]
    All,
    /// Only cards whose origin is in the set. Cards without an origin are dropped.
    Only(BTreeSet<Origin>),
}

impl OriginFilter {
    /// Build a filter from origin tags.
    pub fn only<I, O>(origins: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<Origin>,
    {
        Self::Only(origins.into_iter().map(Into::into).collect())
    }

    /// Check whether a card passes the filter.
    #[must_use]
    pub fn allows(&self, card: &Card) -> bool {
        match self {
            OriginFilter::All => true,
            OriginFilter::Only(origins) => card
                .origin
                .as_ref()
                .is_some_and(|origin| origins.contains(origin)),
        }
    }
}

/// Configuration for pool generation.
///
/// Titans, gods and troop attachments are free: only monsters, heroes and
/// troops count against `draft_budget`.
///
/// ## Example
///
/// ```
/// use card_draft::core::PoolConfig;
///
/// let config = PoolConfig::new(40)
///     .with_gods(4)
///     .with_titans(2)
///     .with_origins(["MBR Core", "Asgard"]);
///
/// assert_eq!(config.draft_budget, 40);
/// assert_eq!(config.titans_amount, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Total cost of the monster, hero and troop part of the pool.
    pub draft_budget: u32,

    /// Number of gods to offer.
    #[serde(default)]
    pub gods_amount: usize,

    /// Number of titans to offer.
    #[serde(default)]
    pub titans_amount: usize,

    /// Number of troop attachments to offer.
    #[serde(default)]
    pub troop_attachment_amount: usize,

    #[serde(default)]
    pub origin_filter: OriginFilter,
}

impl PoolConfig {
    /// Create a config with the given budget and no free categories.
    #[must_use]
    pub fn new(draft_budget: u32) -> Self {
        Self {
            draft_budget,
            gods_amount: 0,
            titans_amount: 0,
            troop_attachment_amount: 0,
            origin_filter: OriginFilter::All,
        }
    }

    #[must_use]
    pub fn with_gods(mut self, amount: usize) -> Self {
        self.gods_amount = amount;
        self
    }

    #[must_use]
    pub fn with_titans(mut self, amount: usize) -> Self {
        self.titans_amount = amount;
        self
    }

    #[must_use]
    pub fn with_troop_attachments(mut self, amount: usize) -> Self {
        self.troop_attachment_amount = amount;
        self
    }

    /// Restrict the pool to the given origins.
    #[must_use]
    pub fn with_origins<I, O>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<Origin>,
    {
        self.origin_filter = OriginFilter::only(origins);
        self
    }

    /// Check the config for values generation cannot work with.
    pub fn validate(&self) -> Result<(), PoolConfigError> {
        if self.draft_budget == 0 {
            return Err(PoolConfigError::ZeroBudget);
        }
        if matches!(&self.origin_filter, OriginFilter::Only(origins) if origins.is_empty()) {
            return Err(PoolConfigError::EmptyOriginFilter);
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DRAFT_BUDGET)
            .with_gods(DEFAULT_GODS_AMOUNT)
            .with_titans(DEFAULT_TITANS_AMOUNT)
            .with_troop_attachments(DEFAULT_TROOP_ATTACHMENT_AMOUNT)
    }
}

/// Complete draft settings as stored by the host per game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSettings {
    /// Cap on each player's own summed pick cost.
    pub allowed_points: u32,

    #[serde(flatten)]
    pub pool: PoolConfig,
}

impl DraftSettings {
    #[must_use]
    pub fn new(allowed_points: u32, pool: PoolConfig) -> Self {
        Self { allowed_points, pool }
    }

    /// Parse and validate settings stored as JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_points == 0 {
            return Err(ConfigError::ZeroAllowedPoints);
        }
        Ok(self.pool.validate()?)
    }
}

impl Default for DraftSettings {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_POINTS, PoolConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Category};

    #[test]
    fn test_pool_config_builder() {
        let config = PoolConfig::new(30)
            .with_gods(2)
            .with_titans(1)
            .with_troop_attachments(3);

        assert_eq!(config.draft_budget, 30);
        assert_eq!(config.gods_amount, 2);
        assert_eq!(config.titans_amount, 1);
        assert_eq!(config.troop_attachment_amount, 3);
        assert_eq!(config.origin_filter, OriginFilter::All);
    }

    #[test]
    fn test_defaults() {
        let settings = DraftSettings::default();
        assert_eq!(settings.allowed_points, 18);
        assert_eq!(settings.pool.draft_budget, 40);
        assert_eq!(settings.pool.gods_amount, 4);
        assert_eq!(settings.pool.titans_amount, 0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_origin_filter() {
        let asg = Card::new(CardId::random(), "Fenrir", Category::Monster, 4).with_origin("ASG");
        let cht = Card::new(CardId::random(), "Typhon", Category::Monster, 4).with_origin("CHT");
        let none = Card::new(CardId::random(), "Hydra", Category::Monster, 4);

        assert!(OriginFilter::All.allows(&asg));
        assert!(OriginFilter::All.allows(&none));

        let filter = OriginFilter::only(["ASG"]);
        assert!(filter.allows(&asg));
        assert!(!filter.allows(&cht));
        assert!(!filter.allows(&none));
    }

    #[test]
    fn test_validate_rejects_zero_budget() {
        assert_eq!(PoolConfig::new(0).validate(), Err(PoolConfigError::ZeroBudget));
        assert!(PoolConfig::new(1).validate().is_ok());
        let empty: [&str; 0] = [];
        assert_eq!(
            PoolConfig::new(1).with_origins(empty).validate(),
            Err(PoolConfigError::EmptyOriginFilter)
        );
    }

    #[test]
    fn test_settings_from_json() {
        let json = r#"{
            "allowed_points": 20,
            "draft_budget": 36,
            "gods_amount": 3,
            "origin_filter": { "kind": "only", "origins": ["ASG", "DUA"] }
        }"#;

        let settings = DraftSettings::from_json(json).unwrap();
        assert_eq!(settings.allowed_points, 20);
        assert_eq!(settings.pool.draft_budget, 36);
        assert_eq!(settings.pool.gods_amount, 3);
        assert_eq!(settings.pool.titans_amount, 0);
        assert_eq!(settings.pool.origin_filter, OriginFilter::only(["ASG", "DUA"]));
    }

    #[test]
    fn test_settings_from_json_rejects_zero_points() {
        let json = r#"{ "allowed_points": 0, "draft_budget": 36 }"#;
        assert!(matches!(
            DraftSettings::from_json(json),
            Err(ConfigError::ZeroAllowedPoints)
        ));

        let json = r#"{ "allowed_points": 18, "draft_budget": 0 }"#;
        assert!(matches!(
            DraftSettings::from_json(json),
            Err(ConfigError::Pool(PoolConfigError::ZeroBudget))
        ));
    }
}
