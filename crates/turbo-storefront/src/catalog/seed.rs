//! Starter catalog for new sessions and demos.

use crate::catalog::NewProduct;
use crate::money::{Currency, Money};

const IMAGE_QUERY: &str = "?auto=compress&cs=tinysrgb&w=500";

fn pexels(photo: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg{IMAGE_QUERY}"
    )
}

/// The six-product demo catalog, priced in `currency`.
pub fn demo_products(currency: Currency) -> Vec<NewProduct> {
    let price = |cents| Money::new(cents, currency);
    vec![
        NewProduct::new("Wireless Bluetooth Headphones", "Electronics", price(29999), 50)
            .with_description(
                "Premium quality wireless headphones with noise cancellation and 30-hour battery life.",
            )
            .with_image(pexels(3394650))
            .featured(),
        NewProduct::new("Smart Fitness Watch", "Electronics", price(39999), 30)
            .with_description(
                "Track your health and fitness with this advanced smartwatch featuring heart rate monitoring.",
            )
            .with_image(pexels(393047))
            .featured(),
        NewProduct::new("Minimalist Backpack", "Fashion", price(8999), 25)
            .with_description(
                "Stylish and functional backpack perfect for work, travel, and everyday use.",
            )
            .with_image(pexels(2905238)),
        NewProduct::new("Organic Coffee Beans", "Food & Beverage", price(2499), 100)
            .with_description(
                "Premium organic coffee beans sourced from sustainable farms around the world.",
            )
            .with_image(pexels(894695))
            .featured(),
        NewProduct::new("Wireless Phone Charger", "Electronics", price(4999), 75)
            .with_description("Fast wireless charging pad compatible with all Qi-enabled devices.")
            .with_image(pexels(4316839)),
        NewProduct::new("Ceramic Plant Pot Set", "Home & Garden", price(3499), 40)
            .with_description("Beautiful set of 3 ceramic plant pots perfect for indoor gardening.")
            .with_image(pexels(4503821)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    #[test]
    fn test_demo_catalog_seeds() {
        let mut store = CatalogStore::default();
        let ids = store.seed(demo_products(Currency::USD)).unwrap();

        assert_eq!(ids.len(), 6);
        assert_eq!(store.featured_products().len(), 3);
        assert_eq!(
            store.categories(),
            vec!["Electronics", "Fashion", "Food & Beverage", "Home & Garden"]
        );
        assert!(store.products()[0].image.contains("3394650"));
    }
}
