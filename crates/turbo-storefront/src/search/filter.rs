//! Price range filter.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Inclusive price bounds. A missing bound is open.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PriceRange {
    pub min: Option<Money>,
    pub max: Option<Money>,
}

impl PriceRange {
    /// Range with no bounds.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Inclusive range `[min, max]`.
    pub fn between(min: Money, max: Money) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn at_least(min: Money) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: Money) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Check `min <= price <= max` on the minor-unit amount.
    pub fn contains(&self, price: &Money) -> bool {
        let above_min = self
            .min
            .map(|min| price.amount_cents >= min.amount_cents)
            .unwrap_or(true);
        let below_max = self
            .max
            .map(|max| price.amount_cents <= max.amount_cents)
            .unwrap_or(true);
        above_min && below_max
    }
}
