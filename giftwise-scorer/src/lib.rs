//! Rule-based gift suggestion scoring for Giftwise.
//!
//! The crate ranks a product catalog against a recipient description using
//! fixed preference tables and an additive score out of 100:
//! - **Budget fit** (up to 30 points) measures how close the price is to the
//!   requested budget.
//! - **Category match** (25 points) fires when any product tag contains a
//!   keyword associated with the occasion, relationship or age group.
//! - **Interest match** (20 points) and **personality match** (15 points)
//!   apply only when those optional preferences are supplied.
//! - **Quality** (up to 10 points) rewards instant delivery and approval.
//!
//! Only approved products priced within the relation-adjusted budget plus
//! headroom are considered, and only those scoring above the threshold are
//! returned. [`GiftSuggestionScorer`] implements the
//! [`Suggester`](giftwise_core::Suggester) trait.
//!
//! The table accessors ([`list_occasions`] and friends) let form builders
//! offer exactly the keys the scorer understands.
//!
//! # Examples
//!
//! ```
//! use giftwise_core::{GiftCriteria, Product, ProductStatus, Suggester};
//! use giftwise_scorer::{GiftSuggestionScorer, list_occasions};
//!
//! # fn main() -> Result<(), giftwise_core::CriteriaError> {
//! assert!(list_occasions().contains(&"housewarming"));
//!
//! let criteria = GiftCriteria::builder("housewarming", "friend", "adults", 800.0)
//!     .interest("gardening")
//!     .build()?;
//! let catalog = vec![
//!     Product::new("fern", 750.0, ProductStatus::Approved).with_tags(["plants"]),
//! ];
//! let suggestions = GiftSuggestionScorer::new().suggest(&criteria, &catalog);
//! assert_eq!(suggestions.len(), 1);
//! assert_eq!(
//!     suggestions.first().map(|s| s.reason.as_str()),
//!     Some("Great addition to their new home. A thoughtful gift for your dear friend."),
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod reason;
mod scorer;
mod tables;
mod types;

pub use error::SuggestionLimitsError;
pub use scorer::{GiftSuggestionScorer, relation_budget_multiplier};
pub use types::{ScoreBreakdown, SuggestionLimits};

use tables::{
    AGE_GROUP_CATEGORIES, INTEREST_CATEGORIES, OCCASION_CATEGORIES, PERSONALITY_CATEGORIES,
    POPULAR_OCCASIONS, RELATION_PREFERENCES, TRENDING_CATEGORIES, keys,
};

/// Occasions with category preferences, in curated order.
#[must_use]
pub fn list_occasions() -> Vec<&'static str> {
    keys(OCCASION_CATEGORIES)
}

/// Relationships with category preferences and budget multipliers.
#[must_use]
pub fn list_relations() -> Vec<&'static str> {
    keys(RELATION_PREFERENCES)
}

/// Recipient age buckets.
#[must_use]
pub fn list_age_groups() -> Vec<&'static str> {
    keys(AGE_GROUP_CATEGORIES)
}

/// Personality archetypes.
#[must_use]
pub fn list_personalities() -> Vec<&'static str> {
    keys(PERSONALITY_CATEGORIES)
}

/// Interests with category keywords.
#[must_use]
pub fn list_interests() -> Vec<&'static str> {
    keys(INTEREST_CATEGORIES)
}

/// Categories currently promoted on the storefront.
#[must_use]
pub const fn trending_categories() -> &'static [&'static str] {
    TRENDING_CATEGORIES
}

/// Occasions surfaced first in pickers.
#[must_use]
pub const fn popular_occasions() -> &'static [&'static str] {
    POPULAR_OCCASIONS
}
