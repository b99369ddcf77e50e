//! Error types raised while configuring the gift suggestion scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when [`SuggestionLimits`](crate::SuggestionLimits) are
/// unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SuggestionLimitsError {
    /// At least one suggestion must be requested.
    #[error("max_suggestions must be at least 1")]
    ZeroMaxSuggestions,
    /// The eligibility threshold was outside the score range.
    #[error("min_score must be a finite value within 0..=100, got {value}")]
    InvalidMinScore {
        /// Rejected threshold.
        value: f64,
    },
    /// The affordability headroom would shrink the adjusted budget.
    #[error("affordability_headroom must be finite and at least 1.0, got {value}")]
    InvalidHeadroom {
        /// Rejected multiplier.
        value: f64,
    },
}
