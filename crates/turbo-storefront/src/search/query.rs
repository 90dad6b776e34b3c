//! Listing query builder and sort keys.

use crate::catalog::Product;
use crate::search::PriceRange;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep the order produced by the filter stages.
    ///
    /// Products carry no creation time, so "newest" cannot reorder anything;
    /// it leaves catalog order in place.
    #[default]
    Newest,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Name,
    ];

    /// The key as used in query strings (e.g., "price-asc").
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Name => "name",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Name => "Name",
        }
    }

    /// Sort in place. The sort is stable, so ties keep their incoming order.
    pub fn apply(&self, products: &mut [&Product]) {
        match self {
            SortKey::Newest => {}
            SortKey::PriceAsc => {
                products.sort_by_key(|p| p.price.amount_cents);
            }
            SortKey::PriceDesc => {
                products.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents));
            }
            SortKey::Name => {
                products.sort_by(|a, b| compare_names(&a.name, &b.name));
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "price-asc" | "price-low" => Ok(SortKey::PriceAsc),
            "price-desc" | "price-high" => Ok(SortKey::PriceDesc),
            "name" => Ok(SortKey::Name),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

/// Human ordering for product names.
///
/// Names compare by base letters first, ignoring case and accents, so
/// "Éclair" sorts among the e's. Accents and then case break ties, with the
/// plain lowercase form first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| {
            let lower_a = a.chars().flat_map(char::to_lowercase);
            let lower_b = b.chars().flat_map(char::to_lowercase);
            lower_a.cmp(lower_b)
        })
        .then_with(|| b.cmp(a))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// A listing query: optional search text, optional category, price range
/// and sort key.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ListingQuery {
    /// Text query. Blank text counts as no search.
    pub search: Option<String>,
    /// Exact category label.
    pub category: Option<String>,
    /// Inclusive price bounds.
    pub price_range: PriceRange,
    /// Sort applied after filtering.
    pub sort: SortKey,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text. Blank text clears the search.
    pub fn with_search(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        self.search = if q.trim().is_empty() { None } else { Some(q) };
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Search text if it is non-blank.
    pub fn search_text(&self) -> Option<&str> {
        self.search
            .as_deref()
            .filter(|q| !q.trim().is_empty())
    }

    /// Check the category and price stages for one product.
    pub fn admits(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map(|c| product.category == c)
            .unwrap_or(true);
        category_ok && self.price_range.contains(&product.price)
    }
}
