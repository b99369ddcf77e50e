//! Proptest strategies for gift suggestion property-based tests.
//!
//! Catalog strategies mix statuses, tag vocabularies and prices spread
//! around a budget so every pipeline stage (filter, threshold, truncation)
//! is exercised.

use giftwise_core::{GiftCriteria, Product, ProductStatus};
use proptest::prelude::*;

/// Tags drawn from the scorer's keyword vocabulary plus a few unrelated ones.
const TAG_POOL: &[&str] = &[
    "jewelry",
    "Home-Decor",
    "art",
    "kitchen",
    "plants",
    "handmade",
    "personalized",
    "luxury",
    "toys",
    "modern",
    "socks",
    "stationery",
];

const OCCASIONS: &[&str] = &["birthday", "Diwali", "wedding", "graduation", "picnic"];
const RELATIONS: &[&str] = &["spouse", "friend", "colleague", "neighbor", "cousin"];
const AGE_GROUPS: &[&str] = &["kids", "teens", "adults", "seniors", "unknown"];
const INTERESTS: &[&str] = &["cooking", "art", "gardening", "fashion", "chess"];
const PERSONALITIES: &[&str] = &["creative", "minimalist", "nature-lover", "grumpy"];

fn pick(pool: &'static [&'static str]) -> impl Strategy<Value = &'static str> {
    proptest::sample::select(pool)
}

/// Strategy for a catalog status, weighted towards approved listings.
fn status_strategy() -> impl Strategy<Value = ProductStatus> {
    prop_oneof![
        6 => Just(ProductStatus::Approved),
        1 => Just(ProductStatus::Pending),
        1 => Just(ProductStatus::Rejected),
    ]
}

/// Strategy for a single product priced between zero and three budgets.
fn product_strategy(budget: f64) -> impl Strategy<Value = Product> {
    (
        0.0_f64..3.0_f64,
        proptest::sample::subsequence(TAG_POOL, 0..4),
        any::<bool>(),
        status_strategy(),
    )
        .prop_map(move |(ratio, tags, instant, status)| {
            Product::new(String::new(), budget * ratio, status)
                .with_tags(tags)
                .with_instant_delivery(instant)
        })
}

/// Strategy for a catalog with unique product identifiers.
pub fn catalog_strategy(budget: f64, max_len: usize) -> impl Strategy<Value = Vec<Product>> {
    proptest::collection::vec(product_strategy(budget), 0..=max_len).prop_map(|products| {
        products
            .into_iter()
            .enumerate()
            .map(|(index, mut product)| {
                product.id = format!("p-{index}");
                product
            })
            .collect()
    })
}

/// Strategy for validated criteria with optional preferences.
pub fn criteria_strategy(budget: f64) -> impl Strategy<Value = GiftCriteria> {
    (
        pick(OCCASIONS),
        pick(RELATIONS),
        pick(AGE_GROUPS),
        proptest::sample::subsequence(INTERESTS, 0..3),
        proptest::option::of(pick(PERSONALITIES)),
    )
        .prop_filter_map(
            "criteria must validate",
            move |(occasion, relation, age_group, interests, personality)| {
                let builder =
                    GiftCriteria::builder(occasion, relation, age_group, budget).interests(interests);
                let builder = match personality {
                    Some(value) => builder.personality(value),
                    None => builder,
                };
                builder.build().ok()
            },
        )
}
