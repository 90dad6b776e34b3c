//! Single-session storefront state for TurboCommerce.
//!
//! This crate holds the in-memory model behind a storefront's pages:
//!
//! - **Catalog**: products, CRUD, featured and per-category views, search,
//!   the listing query engine and inventory figures
//! - **Cart**: lines keyed by product, stock-clamped quantities, live totals
//! - **Storefront**: a session handle owning one catalog and one cart
//!
//! The cart never stores prices. Totals, counts and line listings read the
//! catalog on every call, so a price change shows up immediately and lines
//! whose product was deleted simply drop out of every view.
//!
//! # Example
//!
//! ```rust
//! use turbo_storefront::prelude::*;
//!
//! let mut store = Storefront::demo().unwrap();
//!
//! let query = store
//!     .listing_query()
//!     .with_category("Electronics")
//!     .with_sort(SortKey::PriceAsc);
//! let cheapest = store.list(&query)[0].id.clone();
//!
//! store.add_to_cart(&cheapest);
//! assert_eq!(store.cart_count().unwrap(), 1);
//! println!("Total: {}", store.cart_total().unwrap());
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod storefront;

pub use config::{BlankQueryPolicy, StorefrontConfig};
pub use error::StorefrontError;
pub use ids::ProductId;
pub use money::{Currency, Money};
pub use storefront::{Revision, Storefront};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{BlankQueryPolicy, StorefrontConfig};
    pub use crate::error::StorefrontError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};
    pub use crate::storefront::{Revision, Storefront};

    // Catalog
    pub use crate::catalog::{
        CatalogStore, InventorySummary, NewProduct, Product, ProductUpdate, StockStatus,
    };

    // Cart
    pub use crate::cart::{CartLine, CartLineView, CartStore, CartSummary};

    // Search
    pub use crate::search::{ListingQuery, PriceRange, SortKey};
}
