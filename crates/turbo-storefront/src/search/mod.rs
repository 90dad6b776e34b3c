//! Listing search module.
//!
//! Contains the listing query, sort keys and the price range filter.

mod filter;
mod query;

pub use filter::PriceRange;
pub use query::{compare_names, ListingQuery, SortKey, UnknownSortKey};
