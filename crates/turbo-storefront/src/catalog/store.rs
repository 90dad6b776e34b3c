//! The catalog store: authoritative product set and its read-only views.

use tracing::{debug, info, warn};

use crate::catalog::{InventorySummary, NewProduct, Product, ProductUpdate};
use crate::config::{BlankQueryPolicy, StorefrontConfig};
use crate::error::StorefrontError;
use crate::ids::{IdSequence, ProductId};
use crate::money::{Currency, Money};
use crate::search::ListingQuery;

/// Owns every product in the session, in catalog (insertion) order.
///
/// All derived views (categories, listings, featured products) are
/// recomputed from the product list on each call, so they can never be
/// stale after a mutation.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
    ids: IdSequence,
    currency: Currency,
    blank_query: BlankQueryPolicy,
    low_stock_threshold: i64,
    revision: u64,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(&StorefrontConfig::default())
    }
}

impl CatalogStore {
    /// Create an empty catalog.
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            products: Vec::new(),
            ids: IdSequence::products(),
            currency: config.currency,
            blank_query: config.blank_query,
            low_stock_threshold: config.low_stock_threshold,
            revision: 0,
        }
    }

    /// Add a batch of products, stopping at the first invalid one.
    pub fn seed(
        &mut self,
        items: impl IntoIterator<Item = NewProduct>,
    ) -> Result<Vec<ProductId>, StorefrontError> {
        items
            .into_iter()
            .map(|data| self.add_product(data).map(|p| p.id))
            .collect()
    }

    /// Add a product and assign it a fresh id.
    ///
    /// The product is appended to the end of catalog order.
    pub fn add_product(&mut self, data: NewProduct) -> Result<Product, StorefrontError> {
        if let Err(e) = data.validate(self.currency) {
            warn!(name = %data.name, error = %e, "rejected new product");
            return Err(e);
        }

        let product = Product::from_new(self.ids.next_id(), data);
        info!(
            product_id = %product.id,
            category = %product.category,
            price = %product.price,
            stock = product.stock,
            "product added"
        );
        self.products.push(product.clone());
        self.bump();
        Ok(product)
    }

    /// Merge the set fields of `update` into an existing product.
    ///
    /// Cart lines holding this product are left alone even when stock drops
    /// below their quantity.
    pub fn update_product(
        &mut self,
        id: &ProductId,
        update: ProductUpdate,
    ) -> Result<Product, StorefrontError> {
        if let Err(e) = update.validate(self.currency) {
            warn!(product_id = %id, error = %e, "rejected product update");
            return Err(e);
        }

        let Some(product) = self.products.iter_mut().find(|p| &p.id == id) else {
            warn!(product_id = %id, "update for unknown product");
            return Err(StorefrontError::ProductNotFound(id.clone()));
        };

        update.apply_to(product);
        let updated = product.clone();
        info!(product_id = %id, "product updated");
        self.bump();
        Ok(updated)
    }

    /// Remove a product. Removing an absent id is a no-op.
    pub fn delete_product(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| &p.id == id)?;
        let removed = self.products.remove(index);
        info!(product_id = %id, "product deleted");
        self.bump();
        Some(removed)
    }

    /// Look up a product by id.
    pub fn get_product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Featured products in catalog order.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Products whose category equals `category` exactly (case-sensitive).
    pub fn products_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Case-insensitive substring search over name, description and category.
    ///
    /// Non-blank text is matched as given, whitespace included. Blank text is
    /// answered according to the configured [`BlankQueryPolicy`].
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        if query.trim().is_empty() {
            return match self.blank_query {
                BlankQueryPolicy::AllProducts => self.products.iter().collect(),
                BlankQueryPolicy::NoProducts => Vec::new(),
            };
        }

        let needle = query.to_lowercase();
        let matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.matches_text(&needle))
            .collect();
        debug!(query, matches = matches.len(), "search");
        matches
    }

    /// Distinct category labels in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// Run a listing query: search, then category, then price range, then sort.
    ///
    /// A query without search text starts from the full catalog.
    pub fn list(&self, query: &ListingQuery) -> Vec<&Product> {
        let candidates = match query.search_text() {
            Some(text) => self.search_products(text),
            None => self.products.iter().collect(),
        };

        let mut results: Vec<&Product> = candidates
            .into_iter()
            .filter(|p| query.admits(p))
            .collect();
        query.sort.apply(&mut results);

        debug!(
            search = query.search_text().unwrap_or(""),
            category = query.category.as_deref().unwrap_or(""),
            sort = %query.sort,
            results = results.len(),
            "listing"
        );
        results
    }

    /// Highest price in the catalog, zero when empty.
    pub fn max_price(&self) -> Money {
        self.products
            .iter()
            .map(|p| p.price)
            .max_by_key(|price| price.amount_cents)
            .unwrap_or_else(|| Money::zero(self.currency))
    }

    /// Products with stock strictly below the low-stock threshold, including
    /// sold-out ones.
    pub fn low_stock_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.stock < self.low_stock_threshold)
            .collect()
    }

    /// Aggregate figures for the admin dashboard.
    pub fn inventory_summary(&self) -> Result<InventorySummary, StorefrontError> {
        InventorySummary::compute(&self.products, self.low_stock_threshold, self.currency)
    }

    /// Catalog currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn low_stock_threshold(&self) -> i64 {
        self.low_stock_threshold
    }

    /// Counter that changes on every successful mutation.
    ///
    /// Renderers poll this to decide whether their views need refreshing.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
