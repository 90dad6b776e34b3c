//! Product types.

use crate::error::StorefrontError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier, fixed at creation.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Image URL or asset reference.
    pub image: String,
    /// Free-text category label.
    pub category: String,
    /// Units in stock.
    pub stock: i64,
    /// Whether the product is shown on the home page.
    pub featured: bool,
}

impl Product {
    pub(crate) fn from_new(id: ProductId, data: NewProduct) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
            price: data.price,
            image: data.image,
            category: data.category,
            stock: data.stock,
            featured: data.featured,
        }
    }

    /// Check if at least one unit can be put in a cart.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Stock badge for this product.
    pub fn stock_status(&self, low_stock_threshold: i64) -> StockStatus {
        StockStatus::classify(self.stock, low_stock_threshold)
    }

    /// Value of the units on hand (price x stock).
    pub fn inventory_value(&self) -> Option<Money> {
        self.price.try_multiply(self.stock)
    }

    /// Case-insensitive substring match on name, description or category.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

/// Fields for a product that has not been assigned an id yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Money,
    #[serde(default)]
    pub image: String,
    pub category: String,
    pub stock: i64,
    #[serde(default)]
    pub featured: bool,
}

impl NewProduct {
    /// Create product data with the required fields.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        stock: i64,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            category: category.into(),
            stock,
            featured: false,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Mark the product as featured.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub(crate) fn validate(&self, currency: Currency) -> Result<(), StorefrontError> {
        check_price(&self.price, currency)?;
        check_stock(self.stock)
    }
}

/// A partial update. Only fields set to `Some` are merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl ProductUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    /// Check if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn validate(&self, currency: Currency) -> Result<(), StorefrontError> {
        if let Some(price) = &self.price {
            check_price(price, currency)?;
        }
        if let Some(stock) = self.stock {
            check_stock(stock)?;
        }
        Ok(())
    }

    /// Merge the set fields into `product`. The id is never touched.
    pub(crate) fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(featured) = self.featured {
            product.featured = featured;
        }
    }
}

/// Stock badge shown next to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Classify a stock level. Anything strictly below the threshold is low.
    pub fn classify(stock: i64, low_stock_threshold: i64) -> Self {
        if stock <= 0 {
            StockStatus::OutOfStock
        } else if stock < low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }
}

fn check_price(price: &Money, currency: Currency) -> Result<(), StorefrontError> {
    if price.currency != currency {
        return Err(StorefrontError::CurrencyMismatch {
            expected: currency.code().to_string(),
            got: price.currency.code().to_string(),
        });
    }
    if price.is_negative() {
        return Err(StorefrontError::validation(format!(
            "price must not be negative, got {}",
            price.amount_cents
        )));
    }
    Ok(())
}

fn check_stock(stock: i64) -> Result<(), StorefrontError> {
    if stock < 0 {
        return Err(StorefrontError::validation(format!(
            "stock must not be negative, got {}",
            stock
        )));
    }
    Ok(())
}
