//! Storefront session configuration.

use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;
use crate::money::Currency;
use crate::search::SortKey;

/// Default stock level below which a product is flagged as low.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

/// What a search for blank text returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BlankQueryPolicy {
    /// Every product, in catalog order.
    #[default]
    #[serde(alias = "all")]
    AllProducts,
    /// Nothing.
    #[serde(alias = "none")]
    NoProducts,
}

/// Storefront configuration.
///
/// Every field has a default, so an empty document is valid:
///
/// ```toml
/// currency = "USD"
/// low_stock_threshold = 10
/// blank_query = "all"
/// default_sort = "newest"
/// seed_demo_catalog = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Currency every catalog price must use.
    pub currency: Currency,

    /// Stock strictly below this is reported as low.
    pub low_stock_threshold: i64,

    /// Result of searching for blank text.
    pub blank_query: BlankQueryPolicy,

    /// Sort applied when a listing does not pick one.
    pub default_sort: SortKey,

    /// Start the session with the demo catalog.
    pub seed_demo_catalog: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            blank_query: BlankQueryPolicy::AllProducts,
            default_sort: SortKey::Newest,
            seed_demo_catalog: false,
        }
    }
}

impl StorefrontConfig {
    /// Parse from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, StorefrontError> {
        let config: Self = toml::from_str(text)?;
        config.validate()
    }

    /// Parse from JSON text.
    pub fn from_json(text: &str) -> Result<Self, StorefrontError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, StorefrontError> {
        toml::to_string_pretty(self).map_err(|e| StorefrontError::Config(e.to_string()))
    }

    fn validate(self) -> Result<Self, StorefrontError> {
        if self.low_stock_threshold < 0 {
            return Err(StorefrontError::Config(format!(
                "low_stock_threshold must not be negative, got {}",
                self.low_stock_threshold
            )));
        }
        Ok(self)
    }
}
