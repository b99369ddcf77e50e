//! Test-only catalog fixtures and a trivial `Suggester` used by unit and
//! behaviour tests across the workspace.

use crate::{GiftCriteria, Product, ProductStatus, Suggester, Suggestion};

/// Build an approved product with the given tags.
#[must_use]
pub fn approved_product(id: &str, price: f64, tags: &[&str]) -> Product {
    Product::new(id, price, ProductStatus::Approved).with_tags(tags.iter().copied())
}

/// A small storefront catalog mixing statuses, prices and tag styles.
///
/// Prices assume a budget around `1000.0`.
#[must_use]
pub fn sample_catalog() -> Vec<Product> {
    vec![
        approved_product("ring", 1100.0, &["jewelry", "luxury", "elegant"])
            .with_name("Silver ring")
            .with_instant_delivery(true),
        approved_product("mug", 450.0, &["kitchen", "personalized", "practical"])
            .with_name("Photo mug"),
        approved_product("vase", 980.0, &["Home-Decor", "handmade"]).with_name("Clay vase"),
        approved_product("planter", 700.0, &["plants", "eco-friendly"]).with_name("Herb planter"),
        approved_product("lamp", 2600.0, &["home-decor", "modern"]).with_name("Floor lamp"),
        Product::new("draft-frame", 1000.0, ProductStatus::Pending)
            .with_tags(["art", "personalized"])
            .with_name("Name frame"),
        Product::new("banned-kit", 1000.0, ProductStatus::Rejected)
            .with_tags(["toys"])
            .with_name("Toy kit"),
        approved_product("socks", 1990.0, &[]).with_name("Plain socks"),
    ]
}

/// `Suggester` that lists every approved product with a flat score.
#[derive(Debug, Copy, Clone, Default)]
pub struct ApprovedOnlySuggester;

impl Suggester for ApprovedOnlySuggester {
    fn suggest<'a>(&self, criteria: &GiftCriteria, catalog: &'a [Product]) -> Vec<Suggestion<'a>> {
        catalog
            .iter()
            .filter(|product| product.is_approved())
            .map(|product| {
                Suggestion::new(product, "A thoughtful gift choice.", 50.0, criteria.occasion())
            })
            .collect()
    }
}
