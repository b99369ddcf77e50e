//! Ranked gift suggestions.

use serde::Serialize;

use crate::Product;

/// A product recommended for a set of criteria.
///
/// The suggestion borrows the catalog entry; engines never copy or mutate
/// products.
///
/// # Examples
/// ```
/// use giftwise_core::{Product, ProductStatus, Suggestion};
///
/// let product = Product::new("p-1", 250.0, ProductStatus::Approved).with_tags(["art"]);
/// let suggestion = Suggestion::new(&product, "A thoughtful gift choice.", 62.5, "birthday");
///
/// assert_eq!(suggestion.product.id, "p-1");
/// assert_eq!(suggestion.tags, ["art"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion<'a> {
    /// Recommended catalog entry.
    pub product: &'a Product,
    /// Natural-language justification; never empty.
    pub reason: String,
    /// Match quality in `0.0..=100.0`; higher is better.
    pub match_score: f64,
    /// Occasion echoed from the criteria.
    pub occasion: String,
    /// Product tags echoed for display.
    pub tags: Vec<String>,
}

impl<'a> Suggestion<'a> {
    /// Construct a suggestion, copying the product's tags for display.
    #[must_use]
    pub fn new(
        product: &'a Product,
        reason: impl Into<String>,
        match_score: f64,
        occasion: impl Into<String>,
    ) -> Self {
        Self {
            product,
            reason: reason.into(),
            match_score,
            occasion: occasion.into(),
            tags: product.tags.iter().cloned().collect(),
        }
    }
}
