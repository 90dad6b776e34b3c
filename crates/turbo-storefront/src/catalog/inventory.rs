//! Inventory figures for the admin dashboard.

use crate::catalog::Product;
use crate::error::StorefrontError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Snapshot of catalog-wide stock and value figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventorySummary {
    /// Number of products.
    pub product_count: usize,
    /// Number of featured products.
    pub featured_count: usize,
    /// Number of distinct categories.
    pub category_count: usize,
    /// Products with no stock.
    pub out_of_stock_count: usize,
    /// Products below the low-stock threshold, sold-out ones included.
    pub low_stock_count: usize,
    /// Sum of price x stock.
    pub total_value: Money,
}

impl InventorySummary {
    /// Compute the summary over `products`.
    pub fn compute(
        products: &[Product],
        low_stock_threshold: i64,
        currency: Currency,
    ) -> Result<Self, StorefrontError> {
        let mut categories: Vec<&str> = Vec::new();
        let mut summary = Self {
            product_count: products.len(),
            featured_count: 0,
            category_count: 0,
            out_of_stock_count: 0,
            low_stock_count: 0,
            total_value: Money::zero(currency),
        };

        for product in products {
            let value = product.inventory_value().ok_or(StorefrontError::Overflow)?;
            summary.total_value = summary
                .total_value
                .try_add(&value)
                .ok_or(StorefrontError::Overflow)?;

            if product.featured {
                summary.featured_count += 1;
            }
            if !product.is_in_stock() {
                summary.out_of_stock_count += 1;
            }
            if product.stock < low_stock_threshold {
                summary.low_stock_count += 1;
            }
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }

        summary.category_count = categories.len();
        Ok(summary)
    }
}
