//! Facade crate for the Giftwise suggestion engine.
//!
//! This crate re-exports the core domain types and the rule-based
//! [`GiftSuggestionScorer`] so callers can depend on a single crate.
//!
//! # Examples
//!
//! ```
//! use giftwise::{GiftCriteria, GiftSuggestionScorer, Product, ProductStatus, Suggester};
//!
//! # fn main() -> Result<(), giftwise::CriteriaError> {
//! let criteria = GiftCriteria::builder("birthday", "friend", "adults", 1000.0).build()?;
//! let catalog = vec![Product::new("p-1", 1000.0, ProductStatus::Approved)];
//! let suggestions = GiftSuggestionScorer::new().suggest(&criteria, &catalog);
//! assert_eq!(suggestions.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use giftwise_core::{
    CriteriaError, GiftCriteria, GiftCriteriaBuilder, Product, ProductStatus,
    ProductStatusParseError, Suggester, Suggestion, Tags,
};

pub use giftwise_scorer::{
    GiftSuggestionScorer, ScoreBreakdown, SuggestionLimits, SuggestionLimitsError,
    list_age_groups, list_interests, list_occasions, list_personalities, list_relations,
    popular_occasions, relation_budget_multiplier, trending_categories,
};
