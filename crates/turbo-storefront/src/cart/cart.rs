//! Cart store and cart lines.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cart::{CartLineView, CartSummary};
use crate::catalog::CatalogStore;
use crate::error::StorefrontError;
use crate::ids::ProductId;
use crate::money::Money;

/// One product's presence in the cart.
///
/// The line only references the product. Price and stock are read from the
/// catalog whenever the cart is rendered or totalled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Referenced product.
    pub product_id: ProductId,
    /// Units held, at least 1.
    pub quantity: i64,
}

/// The session's cart.
///
/// Every mutation clamps the stored quantity to `[1, stock]` using the stock
/// at the time of the call. A later stock reduction in the catalog does not
/// shrink stored quantities; the next mutation of that line corrects it.
///
/// Lines whose product has been deleted from the catalog stay stored but are
/// skipped by every read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    lines: Vec<CartLine>,
    #[serde(skip)]
    revision: u64,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Creates the line when absent and the product has stock; otherwise
    /// increments by one up to the product's current stock. Unknown and
    /// sold-out products are ignored. Returns the stored quantity afterwards.
    pub fn add_item(&mut self, catalog: &CatalogStore, product_id: &ProductId) -> Option<i64> {
        let Some(stock) = catalog.get_product(product_id).map(|p| p.stock) else {
            debug!(product_id = %product_id, "add for unknown product ignored");
            return self.quantity_of(product_id);
        };

        if let Some(line) = self.line_mut(product_id) {
            if line.quantity < stock {
                line.quantity += 1;
                let quantity = line.quantity;
                debug!(product_id = %product_id, quantity, "cart line incremented");
                self.bump();
            }
            return self.quantity_of(product_id);
        }

        if stock < 1 {
            debug!(product_id = %product_id, "add for sold-out product ignored");
            return None;
        }

        self.lines.push(CartLine {
            product_id: product_id.clone(),
            quantity: 1,
        });
        debug!(product_id = %product_id, "cart line created");
        self.bump();
        Some(1)
    }

    /// Set a line's quantity, clamped to `[1, stock]`.
    ///
    /// A quantity of zero or less removes the line. A missing line is created.
    /// When the product is unknown or sold out no line can satisfy the bounds,
    /// so any stored line is removed. Returns the stored quantity afterwards.
    pub fn update_quantity(
        &mut self,
        catalog: &CatalogStore,
        product_id: &ProductId,
        quantity: i64,
    ) -> Option<i64> {
        if quantity <= 0 {
            self.remove_item(product_id);
            return None;
        }

        let stock = catalog
            .get_product(product_id)
            .map(|p| p.stock)
            .unwrap_or(0);
        if stock < 1 {
            self.remove_item(product_id);
            return None;
        }

        let clamped = quantity.clamp(1, stock);
        if let Some(line) = self.line_mut(product_id) {
            if line.quantity == clamped {
                return Some(clamped);
            }
            line.quantity = clamped;
        } else {
            self.lines.push(CartLine {
                product_id: product_id.clone(),
                quantity: clamped,
            });
        }
        debug!(product_id = %product_id, requested = quantity, quantity = clamped, "cart quantity set");
        self.bump();
        Some(clamped)
    }

    /// Remove a line. Removing an absent line is a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        let removed = self.lines.len() < len_before;
        if removed {
            debug!(product_id = %product_id, "cart line removed");
            self.bump();
        }
        removed
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        if !self.lines.is_empty() {
            self.lines.clear();
            self.bump();
        }
    }

    /// Sum of quantity x current price over lines whose product still exists.
    pub fn total(&self, catalog: &CatalogStore) -> Result<Money, StorefrontError> {
        self.lines(catalog)
            .iter()
            .try_fold(Money::zero(catalog.currency()), |total, line| {
                total
                    .try_add(&line.subtotal()?)
                    .ok_or(StorefrontError::Overflow)
            })
    }

    /// Sum of quantities over lines whose product still exists.
    pub fn count(&self, catalog: &CatalogStore) -> Result<i64, StorefrontError> {
        self.lines(catalog).iter().try_fold(0i64, |count, line| {
            count
                .checked_add(line.quantity)
                .ok_or(StorefrontError::Overflow)
        })
    }

    /// Lines whose product still exists, paired with that product.
    pub fn lines<'a>(&self, catalog: &'a CatalogStore) -> Vec<CartLineView<'a>> {
        self.lines
            .iter()
            .filter_map(|line| {
                catalog.get_product(&line.product_id).map(|product| CartLineView {
                    product,
                    quantity: line.quantity,
                })
            })
            .collect()
    }

    /// Count, total and lines in one pass for the cart page.
    pub fn summary<'a>(
        &self,
        catalog: &'a CatalogStore,
    ) -> Result<CartSummary<'a>, StorefrontError> {
        CartSummary::from_lines(self.lines(catalog), catalog.currency())
    }

    /// Check if the cart has no line with a live product.
    pub fn is_empty(&self, catalog: &CatalogStore) -> bool {
        self.lines
            .iter()
            .all(|l| catalog.get_product(&l.product_id).is_none())
    }

    /// Stored quantity for a product, dangling lines included.
    pub fn quantity_of(&self, product_id: &ProductId) -> Option<i64> {
        self.lines
            .iter()
            .find(|l| &l.product_id == product_id)
            .map(|l| l.quantity)
    }

    /// Check if one more unit of this product can be added.
    pub fn can_increment(&self, catalog: &CatalogStore, product_id: &ProductId) -> bool {
        let Some(product) = catalog.get_product(product_id) else {
            return false;
        };
        self.quantity_of(product_id).unwrap_or(0) < product.stock
    }

    /// Every stored line, dangling lines included.
    pub fn stored_lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Counter that changes on every mutation that altered the cart.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| &l.product_id == product_id)
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{NewProduct, ProductUpdate};

    fn setup() -> (CatalogStore, ProductId, ProductId) {
        let mut catalog = CatalogStore::default();
        let a = catalog
            .add_product(NewProduct::new("A", "X", Money::usd(1000), 2))
            .unwrap();
        let b = catalog
            .add_product(NewProduct::new("B", "X", Money::usd(2000), 0))
            .unwrap();
        (catalog, a.id, b.id)
    }

    #[test]
    fn test_add_clamps_to_stock() {
        let (catalog, a, b) = setup();
        let mut cart = CartStore::new();

        assert_eq!(cart.add_item(&catalog, &a), Some(1));
        assert_eq!(cart.add_item(&catalog, &a), Some(2));
        assert_eq!(cart.total(&catalog).unwrap(), Money::usd(2000));

        assert_eq!(cart.add_item(&catalog, &a), Some(2));
        assert_eq!(cart.add_item(&catalog, &b), None);
        assert_eq!(cart.stored_lines().len(), 1);

        assert!(cart.remove_item(&a));
        assert!(cart.is_empty(&catalog));
        assert_eq!(cart.count(&catalog).unwrap(), 0);
    }

    #[test]
    fn test_add_unknown_product() {
        let (catalog, _, _) = setup();
        let mut cart = CartStore::new();
        assert_eq!(cart.add_item(&catalog, &ProductId::new("prod-99")), None);
        assert!(cart.stored_lines().is_empty());
        assert_eq!(cart.revision(), 0);
    }

    #[test]
    fn test_update_quantity_clamps() {
        let (catalog, a, _) = setup();
        let mut cart = CartStore::new();

        assert_eq!(cart.update_quantity(&catalog, &a, 7), Some(2));
        assert_eq!(cart.quantity_of(&a), Some(2));

        assert_eq!(cart.update_quantity(&catalog, &a, 1), Some(1));
        assert_eq!(cart.update_quantity(&catalog, &a, 0), None);
        assert_eq!(cart.quantity_of(&a), None);
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let (catalog, a, _) = setup();
        let mut cart = CartStore::new();
        cart.add_item(&catalog, &a);
        assert_eq!(cart.update_quantity(&catalog, &a, -4), None);
        assert!(cart.stored_lines().is_empty());
    }

    #[test]
    fn test_update_quantity_sold_out_keeps_no_line() {
        let (catalog, _, b) = setup();
        let mut cart = CartStore::new();
        assert_eq!(cart.update_quantity(&catalog, &b, 3), None);
        assert!(cart.stored_lines().is_empty());
    }

    #[test]
    fn test_total_tracks_price_changes() {
        let (mut catalog, a, _) = setup();
        let mut cart = CartStore::new();
        cart.add_item(&catalog, &a);
        cart.add_item(&catalog, &a);
        let revision = cart.revision();

        catalog
            .update_product(&a, ProductUpdate::new().price(Money::usd(1500)))
            .unwrap();

        assert_eq!(cart.total(&catalog).unwrap(), Money::usd(3000));
        assert_eq!(cart.revision(), revision);
    }

    #[test]
    fn test_stock_drop_is_not_retroactive() {
        let (mut catalog, a, _) = setup();
        let mut cart = CartStore::new();
        cart.update_quantity(&catalog, &a, 2);

        catalog
            .update_product(&a, ProductUpdate::new().stock(1))
            .unwrap();
        assert_eq!(cart.quantity_of(&a), Some(2));
        assert_eq!(cart.count(&catalog).unwrap(), 2);
        assert!(!cart.can_increment(&catalog, &a));

        // The next add neither increments nor shrinks the drifted line.
        assert_eq!(cart.add_item(&catalog, &a), Some(2));
        // Setting a quantity applies the new bound.
        assert_eq!(cart.update_quantity(&catalog, &a, 2), Some(1));
    }

    #[test]
    fn test_dangling_lines_are_hidden() {
        let (mut catalog, a, _) = setup();
        let c = catalog
            .add_product(NewProduct::new("C", "Y", Money::usd(500), 5))
            .unwrap()
            .id;
        let mut cart = CartStore::new();
        cart.add_item(&catalog, &a);
        cart.add_item(&catalog, &c);

        catalog.delete_product(&a);

        assert_eq!(cart.stored_lines().len(), 2);
        assert_eq!(cart.count(&catalog).unwrap(), 1);
        assert_eq!(cart.total(&catalog).unwrap(), Money::usd(500));
        let lines = cart.lines(&catalog);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product.id, c);

        assert!(cart.remove_item(&a));
        assert_eq!(cart.stored_lines().len(), 1);
    }

    #[test]
    fn test_clear() {
        let (catalog, a, _) = setup();
        let mut cart = CartStore::new();
        cart.add_item(&catalog, &a);
        cart.clear();

        assert_eq!(cart.count(&catalog).unwrap(), 0);
        assert_eq!(cart.total(&catalog).unwrap(), Money::usd(0));
        assert!(cart.stored_lines().is_empty());
    }

    #[test]
    fn test_revision_only_moves_on_change() {
        let (catalog, a, _) = setup();
        let mut cart = CartStore::new();
        cart.clear();
        cart.remove_item(&a);
        assert_eq!(cart.revision(), 0);

        cart.add_item(&catalog, &a);
        cart.update_quantity(&catalog, &a, 1);
        assert_eq!(cart.revision(), 1);
    }

    #[test]
    fn test_count_overflow_is_an_error() {
        let mut catalog = CatalogStore::default();
        let mut cart = CartStore::new();
        for name in ["Bulk A", "Bulk B"] {
            let id = catalog
                .add_product(NewProduct::new(name, "X", Money::usd(0), i64::MAX))
                .unwrap()
                .id;
            cart.update_quantity(&catalog, &id, i64::MAX);
        }

        assert_eq!(cart.count(&catalog), Err(StorefrontError::Overflow));
        assert_eq!(cart.total(&catalog), Ok(Money::usd(0)));
    }
}
