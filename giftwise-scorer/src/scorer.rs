//! Rule-based gift suggestion scoring.
//!
//! The scorer ranks a catalog in five passes: the relation adjusts the
//! budget, unaffordable or unapproved products are dropped, each survivor
//! is scored with additive components, weak matches are discarded, and the
//! rest are sorted and truncated. Reason text is generated for the
//! survivors only.
#![forbid(unsafe_code)]

use giftwise_core::{GiftCriteria, Product, Suggester, Suggestion};
use log::{debug, trace, warn};

use crate::reason::reason_for;
use crate::tables::{
    AGE_GROUP_CATEGORIES, INTEREST_CATEGORIES, OCCASION_CATEGORIES, PERSONALITY_CATEGORIES,
    RELATION_PREFERENCES, lookup,
};
use crate::{ScoreBreakdown, SuggestionLimits, SuggestionLimitsError};

const BUDGET_FIT_POINTS: f64 = 30.0;
const CATEGORY_POINTS: f64 = 25.0;
const INTEREST_POINTS: f64 = 20.0;
const PERSONALITY_POINTS: f64 = 15.0;
const INSTANT_DELIVERY_POINTS: f64 = 5.0;
const APPROVED_POINTS: f64 = 5.0;
const DEFAULT_BUDGET_MULTIPLIER: f64 = 1.0;

/// Criteria fields normalised for table lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LookupKeys {
    pub(crate) occasion: String,
    pub(crate) relation: String,
    pub(crate) age_group: String,
    pub(crate) interests: Vec<String>,
    pub(crate) personality: Option<String>,
}

impl LookupKeys {
    pub(crate) fn from_criteria(criteria: &GiftCriteria) -> Self {
        Self {
            occasion: normalise(criteria.occasion()),
            relation: normalise(criteria.relation()),
            age_group: normalise(criteria.age_group()),
            interests: criteria.interests().iter().map(|i| normalise(i)).collect(),
            personality: criteria.personality().map(normalise),
        }
    }

    /// Union of occasion, relation and age-group keywords.
    fn category_keywords(&self) -> impl Iterator<Item = &'static str> + Clone {
        let occasion = lookup(OCCASION_CATEGORIES, &self.occasion).unwrap_or_default();
        let relation = lookup(RELATION_PREFERENCES, &self.relation)
            .map(|preference| preference.categories)
            .unwrap_or_default();
        let age_group = lookup(AGE_GROUP_CATEGORIES, &self.age_group).unwrap_or_default();
        occasion
            .iter()
            .chain(relation)
            .chain(age_group)
            .copied()
    }
}

fn normalise(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Return the spend multiplier for a relationship, `1.0` when unknown.
///
/// # Examples
/// ```
/// use giftwise_scorer::relation_budget_multiplier;
///
/// assert_eq!(relation_budget_multiplier("Spouse"), 1.5);
/// assert_eq!(relation_budget_multiplier("pen-pal"), 1.0);
/// ```
#[must_use]
pub fn relation_budget_multiplier(relation: &str) -> f64 {
    lookup(RELATION_PREFERENCES, &normalise(relation))
        .map_or(DEFAULT_BUDGET_MULTIPLIER, |preference| preference.budget_multiplier)
}

/// Deterministic, rule-based gift recommender.
///
/// # Examples
/// ```
/// use giftwise_core::{GiftCriteria, Product, ProductStatus, Suggester};
/// use giftwise_scorer::GiftSuggestionScorer;
///
/// # fn main() -> Result<(), giftwise_core::CriteriaError> {
/// let criteria = GiftCriteria::builder("anniversary", "spouse", "adults", 2000.0)
///     .personality("luxury-loving")
///     .build()?;
/// let catalog = vec![
///     Product::new("necklace", 2200.0, ProductStatus::Approved).with_tags(["jewelry"]),
///     Product::new("mug", 300.0, ProductStatus::Approved).with_tags(["kitchen"]),
/// ];
///
/// let suggestions = GiftSuggestionScorer::new().suggest(&criteria, &catalog);
/// assert_eq!(suggestions.first().map(|s| s.product.id.as_str()), Some("necklace"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GiftSuggestionScorer {
    limits: SuggestionLimits,
}

impl GiftSuggestionScorer {
    /// Construct a scorer with [`SuggestionLimits::DEFAULT`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limits: SuggestionLimits::DEFAULT,
        }
    }

    /// Construct a scorer with custom limits.
    ///
    /// # Errors
    /// Returns [`SuggestionLimitsError`] when the limits fail validation.
    pub fn with_limits(limits: SuggestionLimits) -> Result<Self, SuggestionLimitsError> {
        Ok(Self {
            limits: limits.validate()?,
        })
    }

    /// Limits applied when ranking.
    #[must_use]
    pub const fn limits(&self) -> SuggestionLimits {
        self.limits
    }

    /// Highest price that survives the affordability filter.
    ///
    /// The relation multiplier widens or narrows the candidate pool but does
    /// not influence the budget-fit component.
    #[expect(
        clippy::float_arithmetic,
        reason = "the ceiling scales the budget by two multipliers"
    )]
    #[must_use]
    pub fn affordability_ceiling(&self, criteria: &GiftCriteria) -> f64 {
        criteria.budget()
            * relation_budget_multiplier(criteria.relation())
            * self.limits.affordability_headroom
    }

    /// Score one product against `criteria`, component by component.
    ///
    /// Filtering is not applied; callers wanting the ranked list should use
    /// [`Suggester::suggest`].
    #[must_use]
    pub fn score_product(&self, criteria: &GiftCriteria, product: &Product) -> ScoreBreakdown {
        let keys = LookupKeys::from_criteria(criteria);
        breakdown(&keys, criteria.budget(), product)
    }

    fn is_candidate(product: &Product, ceiling: f64) -> bool {
        if !product.price.is_finite() {
            warn!(
                "Skipped product {}: price {} is not finite",
                product.id, product.price
            );
            return false;
        }
        product.is_approved() && product.price <= ceiling
    }
}

impl Suggester for GiftSuggestionScorer {
    fn suggest<'a>(&self, criteria: &GiftCriteria, catalog: &'a [Product]) -> Vec<Suggestion<'a>> {
        let keys = LookupKeys::from_criteria(criteria);
        let ceiling = self.affordability_ceiling(criteria);

        let candidates: Vec<&Product> = catalog
            .iter()
            .filter(|product| Self::is_candidate(product, ceiling))
            .collect();
        let candidate_count = candidates.len();

        let mut ranked: Vec<(&Product, f64)> = candidates
            .into_iter()
            .map(|product| {
                let parts = breakdown(&keys, criteria.budget(), product);
                trace!("Scored product {}: {parts:?}", product.id);
                (product, <Self as Suggester>::sanitise(parts.total()))
            })
            .filter(|&(_, score)| score > self.limits.min_score)
            .collect();
        let eligible_count = ranked.len();

        // `sort_by` is stable, so ties keep catalog order.
        ranked.sort_by(|left, right| right.1.total_cmp(&left.1));
        ranked.truncate(self.limits.max_suggestions);

        debug!(
            "Ranked gift suggestions: catalog={}, affordable={candidate_count}, eligible={eligible_count}, returned={}",
            catalog.len(),
            ranked.len()
        );

        ranked
            .into_iter()
            .map(|(product, score)| {
                Suggestion::new(product, reason_for(product, &keys), score, criteria.occasion())
            })
            .collect()
    }
}

fn breakdown(keys: &LookupKeys, budget: f64, product: &Product) -> ScoreBreakdown {
    let tags: Vec<String> = product.tags.iter().map(|tag| tag.to_lowercase()).collect();

    let category = award(
        CATEGORY_POINTS,
        tags_match(&tags, keys.category_keywords()),
    );

    let interest = award(
        INTEREST_POINTS,
        keys.interests.iter().any(|interest| {
            let keywords = lookup(INTEREST_CATEGORIES, interest).unwrap_or_default();
            tags_match(&tags, keywords.iter().copied())
        }),
    );

    let personality = award(
        PERSONALITY_POINTS,
        keys.personality.as_deref().is_some_and(|personality| {
            let keywords = lookup(PERSONALITY_CATEGORIES, personality).unwrap_or_default();
            tags_match(&tags, keywords.iter().copied())
        }),
    );

    ScoreBreakdown {
        budget_fit: budget_fit(product.price, budget),
        category,
        interest,
        personality,
        quality: quality(product),
    }
}

/// Linear closeness of `price` to the raw budget: 30 at an exact match,
/// 0 at twice (or zero times) the budget and beyond.
#[expect(
    clippy::float_arithmetic,
    reason = "budget fit is a linear distance on currency amounts"
)]
const fn budget_fit(price: f64, budget: f64) -> f64 {
    (BUDGET_FIT_POINTS - (price - budget).abs() / budget * BUDGET_FIT_POINTS).max(0.0)
}

#[expect(
    clippy::float_arithmetic,
    reason = "quality sums two fixed bonuses"
)]
const fn quality(product: &Product) -> f64 {
    award(INSTANT_DELIVERY_POINTS, product.instant_delivery_eligible)
        + award(APPROVED_POINTS, product.is_approved())
}

const fn award(points: f64, matched: bool) -> f64 {
    if matched { points } else { 0.0 }
}

/// Report whether any lower-cased tag contains any keyword.
fn tags_match<'k>(tags: &[String], keywords: impl Iterator<Item = &'k str> + Clone) -> bool {
    tags.iter()
        .any(|tag| keywords.clone().any(|keyword| tag.contains(keyword)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1000.0, 1000.0, 30.0)]
    #[case(2000.0, 1000.0, 0.0)]
    #[case(0.0, 1000.0, 0.0)]
    #[case(500.0, 1000.0, 15.0)]
    #[case(1500.0, 1000.0, 15.0)]
    #[case(5000.0, 1000.0, 0.0)]
    fn budget_fit_is_linear_in_distance(
        #[case] price: f64,
        #[case] budget: f64,
        #[case] expected: f64,
    ) {
        assert!((budget_fit(price, budget) - expected).abs() < 1e-9);
    }

    #[rstest]
    fn normalisation_trims_and_lower_cases() {
        assert_eq!(normalise("  Mothers-Day "), "mothers-day");
    }

    #[rstest]
    fn tag_matching_uses_substrings() {
        let tags = vec!["vintage-jewelry-box".to_owned()];
        assert!(tags_match(&tags, ["jewelry"].into_iter()));
        assert!(!tags_match(&tags, ["luxury"].into_iter()));
        assert!(!tags_match(&[], ["jewelry"].into_iter()));
    }

    #[rstest]
    fn unknown_keys_contribute_no_keywords() {
        let criteria =
            GiftCriteria::new("picnic", "cousin", "toddlers", 100.0).expect("valid criteria");
        let keys = LookupKeys::from_criteria(&criteria);
        assert_eq!(keys.category_keywords().count(), 0);
    }

    #[rstest]
    fn category_keywords_union_all_three_tables() {
        let criteria = GiftCriteria::new("holi", "neighbor", "kids", 100.0).expect("criteria");
        let keys = LookupKeys::from_criteria(&criteria);
        let keywords: Vec<&str> = keys.category_keywords().collect();
        assert_eq!(keywords.len(), 4 + 3 + 4);
        assert!(keywords.contains(&"colorful"));
        assert!(keywords.contains(&"toys"));
    }
}
