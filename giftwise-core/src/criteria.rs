//! Gift criteria: who the gift is for and how much the giver wants to spend.
//!
//! Criteria are validated once on construction. String fields are kept as
//! supplied; engines normalise them for table lookups so the original
//! occasion can be echoed back in suggestions.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned when building [`GiftCriteria`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    /// The budget was NaN or infinite.
    #[error("budget must be a finite amount")]
    NonFiniteBudget,
    /// The budget was zero or negative.
    #[error("budget must be positive, got {budget}")]
    NonPositiveBudget {
        /// Rejected budget value.
        budget: f64,
    },
}

/// A gift request describing the occasion, recipient and spend.
///
/// # Examples
/// ```
/// use giftwise_core::GiftCriteria;
///
/// # fn main() -> Result<(), giftwise_core::CriteriaError> {
/// let criteria = GiftCriteria::builder("Birthday", "friend", "adults", 1500.0)
///     .interest("cooking")
///     .personality("creative")
///     .build()?;
/// assert_eq!(criteria.occasion(), "Birthday");
/// assert_eq!(criteria.interests(), ["cooking"]);
/// assert_eq!(criteria.personality(), Some("creative"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCriteria")]
pub struct GiftCriteria {
    occasion: String,
    relation: String,
    age_group: String,
    budget: f64,
    interests: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    personality: Option<String>,
}

impl GiftCriteria {
    /// Validate and construct criteria without optional preferences.
    ///
    /// # Errors
    /// Returns [`CriteriaError`] when `budget` is not a finite, positive
    /// amount.
    pub fn new(
        occasion: impl Into<String>,
        relation: impl Into<String>,
        age_group: impl Into<String>,
        budget: f64,
    ) -> Result<Self, CriteriaError> {
        Self::builder(occasion, relation, age_group, budget).build()
    }

    /// Start building criteria; optional preferences are added on the
    /// returned builder.
    #[must_use]
    pub fn builder(
        occasion: impl Into<String>,
        relation: impl Into<String>,
        age_group: impl Into<String>,
        budget: f64,
    ) -> GiftCriteriaBuilder {
        GiftCriteriaBuilder {
            occasion: occasion.into(),
            relation: relation.into(),
            age_group: age_group.into(),
            budget,
            interests: Vec::new(),
            personality: None,
        }
    }

    /// Occasion as supplied by the caller.
    #[must_use]
    pub fn occasion(&self) -> &str {
        &self.occasion
    }

    /// Relationship of the giver to the recipient.
    #[must_use]
    pub fn relation(&self) -> &str {
        &self.relation
    }

    /// Recipient age bucket.
    #[must_use]
    pub fn age_group(&self) -> &str {
        &self.age_group
    }

    /// Target spend; always finite and positive.
    #[must_use]
    pub const fn budget(&self) -> f64 {
        self.budget
    }

    /// Recipient interests, blank entries removed.
    #[must_use]
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Recipient personality archetype, if any.
    #[must_use]
    pub fn personality(&self) -> Option<&str> {
        self.personality.as_deref()
    }
}

/// Builder for [`GiftCriteria`].
#[derive(Debug, Clone)]
pub struct GiftCriteriaBuilder {
    occasion: String,
    relation: String,
    age_group: String,
    budget: f64,
    interests: Vec<String>,
    personality: Option<String>,
}

impl GiftCriteriaBuilder {
    /// Add a single interest.
    #[must_use]
    pub fn interest(mut self, interest: impl Into<String>) -> Self {
        self.interests.push(interest.into());
        self
    }

    /// Add several interests.
    #[must_use]
    pub fn interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests.extend(interests.into_iter().map(Into::into));
        self
    }

    /// Set the personality archetype.
    #[must_use]
    pub fn personality(mut self, personality: impl Into<String>) -> Self {
        self.personality = Some(personality.into());
        self
    }

    /// Validate the collected fields.
    ///
    /// Blank interests are dropped and a blank personality is treated as
    /// absent.
    ///
    /// # Errors
    /// Returns [`CriteriaError`] when the budget is not a finite, positive
    /// amount.
    pub fn build(self) -> Result<GiftCriteria, CriteriaError> {
        let budget = validate_budget(self.budget)?;
        let supplied = self.interests.len();
        let interests: Vec<String> = self
            .interests
            .into_iter()
            .filter(|interest| !interest.trim().is_empty())
            .collect();
        if interests.len() < supplied {
            debug!(
                "Dropped {} blank interests from gift criteria",
                supplied.saturating_sub(interests.len())
            );
        }
        let personality = self.personality.filter(|value| !value.trim().is_empty());
        Ok(GiftCriteria {
            occasion: self.occasion,
            relation: self.relation,
            age_group: self.age_group,
            budget,
            interests,
            personality,
        })
    }
}

fn validate_budget(budget: f64) -> Result<f64, CriteriaError> {
    if !budget.is_finite() {
        return Err(CriteriaError::NonFiniteBudget);
    }
    if budget <= 0.0 {
        return Err(CriteriaError::NonPositiveBudget { budget });
    }
    Ok(budget)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCriteria {
    occasion: String,
    relation: String,
    age_group: String,
    budget: f64,
    #[serde(default)]
    interests: Vec<String>,
    #[serde(default)]
    personality: Option<String>,
}

impl TryFrom<RawCriteria> for GiftCriteria {
    type Error = CriteriaError;

    fn try_from(raw: RawCriteria) -> Result<Self, Self::Error> {
        let builder = Self::builder(raw.occasion, raw.relation, raw.age_group, raw.budget)
            .interests(raw.interests);
        match raw.personality {
            Some(personality) => builder.personality(personality).build(),
            None => builder.build(),
        }
    }
}
