//! Public configuration and output types for gift scoring.
#![forbid(unsafe_code)]

use giftwise_core::MAX_MATCH_SCORE;

use crate::SuggestionLimitsError;

/// Ranking limits applied after scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestionLimits {
    /// Maximum number of suggestions returned.
    pub max_suggestions: usize,
    /// Products must score strictly above this value to be suggested.
    pub min_score: f64,
    /// Multiplier applied to the relation-adjusted budget to form the
    /// affordability ceiling.
    pub affordability_headroom: f64,
}

impl SuggestionLimits {
    /// Storefront defaults: twelve suggestions, a threshold of 30 points and
    /// 20% price headroom.
    pub const DEFAULT: Self = Self {
        max_suggestions: 12,
        min_score: 30.0,
        affordability_headroom: 1.2,
    };

    /// Validate the limits and return a copy.
    ///
    /// # Errors
    /// Returns [`SuggestionLimitsError`] when no suggestions are requested,
    /// the threshold lies outside `0.0..=100.0`, or the headroom is not a
    /// finite multiplier of at least `1.0`.
    pub fn validate(self) -> Result<Self, SuggestionLimitsError> {
        if self.max_suggestions == 0 {
            return Err(SuggestionLimitsError::ZeroMaxSuggestions);
        }
        if !self.min_score.is_finite() || !(0.0..=MAX_MATCH_SCORE).contains(&self.min_score) {
            return Err(SuggestionLimitsError::InvalidMinScore {
                value: self.min_score,
            });
        }
        if !self.affordability_headroom.is_finite() || self.affordability_headroom < 1.0 {
            return Err(SuggestionLimitsError::InvalidHeadroom {
                value: self.affordability_headroom,
            });
        }
        Ok(self)
    }
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Points awarded to one product, component by component.
///
/// Components are bounded individually: budget fit `0..=30`, category 0 or
/// 25, interest 0 or 20, personality 0 or 15, quality `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBreakdown {
    /// Closeness of the price to the raw budget.
    pub budget_fit: f64,
    /// Occasion, relation or age-group keyword matched a tag.
    pub category: f64,
    /// An interest keyword matched a tag.
    pub interest: f64,
    /// A personality keyword matched a tag.
    pub personality: f64,
    /// Instant delivery and approval bonuses.
    pub quality: f64,
}

impl ScoreBreakdown {
    /// Sum of all components, before sanitising.
    #[expect(
        clippy::float_arithmetic,
        reason = "the match score is an additive sum of components"
    )]
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.budget_fit + self.category + self.interest + self.personality + self.quality
    }
}
