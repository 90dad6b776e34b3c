//! Session handle owning one catalog and one cart.

use tracing::info;

use crate::cart::{CartLineView, CartStore, CartSummary};
use crate::catalog::{demo_products, CatalogStore, Product};
use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::search::ListingQuery;

/// Change counters for both stores.
///
/// A renderer keeps the last value it drew from and redraws when the current
/// value differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Revision {
    pub catalog: u64,
    pub cart: u64,
}

/// One shopper's session: the catalog, the cart built from it, and the
/// configuration both were created with.
///
/// Presentation code holds this handle and passes it (or the store it needs)
/// to whatever renders a view.
///
/// # Example
///
/// ```
/// use turbo_storefront::prelude::*;
///
/// let mut store = Storefront::new(StorefrontConfig::default()).unwrap();
/// let lamp = store
///     .catalog_mut()
///     .add_product(NewProduct::new("Desk Lamp", "Home", Money::usd(1999), 3))
///     .unwrap();
///
/// store.add_to_cart(&lamp.id);
/// store.add_to_cart(&lamp.id);
/// assert_eq!(store.cart_count().unwrap(), 2);
/// assert_eq!(store.cart_total().unwrap(), Money::usd(3998));
/// ```
#[derive(Debug, Clone)]
pub struct Storefront {
    config: StorefrontConfig,
    catalog: CatalogStore,
    cart: CartStore,
}

impl Storefront {
    /// Start a session. Seeds the demo catalog when the config asks for it.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorefrontError> {
        let mut catalog = CatalogStore::new(&config);
        if config.seed_demo_catalog {
            let ids = catalog.seed(demo_products(config.currency))?;
            info!(products = ids.len(), "seeded demo catalog");
        }
        Ok(Self {
            config,
            catalog,
            cart: CartStore::new(),
        })
    }

    /// Start a session with the demo catalog and default settings.
    pub fn demo() -> Result<Self, StorefrontError> {
        Self::new(StorefrontConfig {
            seed_demo_catalog: true,
            ..StorefrontConfig::default()
        })
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Mutable catalog access for admin screens.
    pub fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Current change counters.
    pub fn revision(&self) -> Revision {
        Revision {
            catalog: self.catalog.revision(),
            cart: self.cart.revision(),
        }
    }

    /// A listing query preloaded with the configured default sort.
    pub fn listing_query(&self) -> ListingQuery {
        ListingQuery::new().with_sort(self.config.default_sort)
    }

    /// Run a listing query against the catalog.
    pub fn list(&self, query: &ListingQuery) -> Vec<&Product> {
        self.catalog.list(query)
    }

    pub fn add_to_cart(&mut self, product_id: &ProductId) -> Option<i64> {
        self.cart.add_item(&self.catalog, product_id)
    }

    pub fn set_cart_quantity(&mut self, product_id: &ProductId, quantity: i64) -> Option<i64> {
        self.cart.update_quantity(&self.catalog, product_id, quantity)
    }

    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> bool {
        self.cart.remove_item(product_id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn cart_total(&self) -> Result<Money, StorefrontError> {
        self.cart.total(&self.catalog)
    }

    pub fn cart_count(&self) -> Result<i64, StorefrontError> {
        self.cart.count(&self.catalog)
    }

    pub fn cart_lines(&self) -> Vec<CartLineView<'_>> {
        self.cart.lines(&self.catalog)
    }

    pub fn cart_summary(&self) -> Result<CartSummary<'_>, StorefrontError> {
        self.cart.summary(&self.catalog)
    }
}
