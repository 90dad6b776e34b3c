//! Resolved cart lines and cart totals.

use crate::catalog::Product;
use crate::error::StorefrontError;
use crate::money::{Currency, Money};
use serde::Serialize;

/// A cart line joined with its live product.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CartLineView<'a> {
    /// The product as it currently is in the catalog.
    pub product: &'a Product,
    /// Units held.
    pub quantity: i64,
}

impl CartLineView<'_> {
    /// Current unit price.
    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// Quantity x current price.
    pub fn subtotal(&self) -> Result<Money, StorefrontError> {
        self.product
            .price
            .try_multiply(self.quantity)
            .ok_or(StorefrontError::Overflow)
    }

    /// Check if the line holds all available stock, or more after a stock drop.
    pub fn at_stock_limit(&self) -> bool {
        self.quantity >= self.product.stock
    }

    /// Check if stock fell below the stored quantity since it was set.
    pub fn exceeds_stock(&self) -> bool {
        self.quantity > self.product.stock
    }
}

/// Everything the cart page shows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartSummary<'a> {
    pub lines: Vec<CartLineView<'a>>,
    /// Sum of quantities.
    pub item_count: i64,
    /// Sum of line subtotals.
    pub total: Money,
}

impl<'a> CartSummary<'a> {
    pub fn from_lines(
        lines: Vec<CartLineView<'a>>,
        currency: Currency,
    ) -> Result<Self, StorefrontError> {
        let mut total = Money::zero(currency);
        for line in &lines {
            total = total
                .try_add(&line.subtotal()?)
                .ok_or(StorefrontError::Overflow)?;
        }
        let item_count = lines.iter().try_fold(0i64, |count, line| {
            count
                .checked_add(line.quantity)
                .ok_or(StorefrontError::Overflow)
        })?;
        Ok(Self {
            lines,
            item_count,
            total,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
