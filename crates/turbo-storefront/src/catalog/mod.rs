//! Product catalog module.
//!
//! Contains the product types, the catalog store and its inventory views.

mod inventory;
mod product;
mod seed;
mod store;

pub use inventory::InventorySummary;
pub use product::{NewProduct, Product, ProductUpdate, StockStatus};
pub use seed::demo_products;
pub use store::CatalogStore;
