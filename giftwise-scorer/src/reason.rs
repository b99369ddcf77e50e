//! Natural-language justifications attached to each suggestion.
#![forbid(unsafe_code)]

use giftwise_core::Product;

use crate::scorer::LookupKeys;
use crate::tables::{OCCASION_REASONS, RELATION_REASONS, lookup};

const INSTANT_DELIVERY: &str = "Available for instant delivery";
const HANDMADE: &str = "Uniquely handmade with care";
const PERSONALIZED: &str = "Can be personalized for extra meaning";
pub(crate) const FALLBACK_REASON: &str = "A thoughtful gift choice.";

/// Explain why `product` suits the request.
///
/// Sentences appear in a fixed order: occasion, relation, instant delivery,
/// handmade, personalised. Tag checks are exact matches.
pub(crate) fn reason_for(product: &Product, keys: &LookupKeys) -> String {
    let sentences: Vec<&str> = [
        lookup(OCCASION_REASONS, &keys.occasion),
        lookup(RELATION_REASONS, &keys.relation),
        product.instant_delivery_eligible.then_some(INSTANT_DELIVERY),
        product.has_tag("handmade").then_some(HANDMADE),
        product.has_tag("personalized").then_some(PERSONALIZED),
    ]
    .into_iter()
    .flatten()
    .collect();

    if sentences.is_empty() {
        return FALLBACK_REASON.to_owned();
    }
    let mut reason = sentences.join(". ");
    reason.push('.');
    reason
}
