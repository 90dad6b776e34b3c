//! Shopping cart module.
//!
//! Contains the cart store, its lines, and the resolved views used for
//! rendering and totals.

mod cart;
mod pricing;

pub use cart::{CartLine, CartStore};
pub use pricing::{CartLineView, CartSummary};
