//! Rank catalog products for a gift request.
//!
//! The `Suggester` trait turns [`GiftCriteria`](crate::GiftCriteria) and a
//! borrowed catalog into ranked [`Suggestion`](crate::Suggestion)s.

use crate::{GiftCriteria, Product, Suggestion};

/// Upper bound of a suggestion's match score.
pub const MAX_MATCH_SCORE: f64 = 100.0;

/// Recommend products from a catalog.
///
/// Implementations must be thread-safe (`Send` + `Sync`) and total: every
/// validated request produces a result, and "no matches" is an empty
/// vector rather than an error.
///
/// Implementations must:
/// - Produce finite scores within `0.0..=100.0`.
/// - Return suggestions ordered by descending score.
/// - Borrow products from `catalog` without copying them.
///
/// Use [`Suggester::sanitise`] to apply the score guards.
///
/// # Examples
///
/// ```rust
/// use giftwise_core::{GiftCriteria, Product, ProductStatus, Suggester, Suggestion};
///
/// struct EveryApproved;
///
/// impl Suggester for EveryApproved {
///     fn suggest<'a>(&self, criteria: &GiftCriteria, catalog: &'a [Product]) -> Vec<Suggestion<'a>> {
///         catalog
///             .iter()
///             .filter(|product| product.is_approved())
///             .map(|product| Suggestion::new(product, "A thoughtful gift choice.", 50.0, criteria.occasion()))
///             .collect()
///     }
/// }
///
/// # fn main() -> Result<(), giftwise_core::CriteriaError> {
/// let criteria = GiftCriteria::new("birthday", "friend", "adults", 100.0)?;
/// let catalog = [
///     Product::new("a", 90.0, ProductStatus::Approved),
///     Product::new("b", 90.0, ProductStatus::Pending),
/// ];
/// assert_eq!(EveryApproved.suggest(&criteria, &catalog).len(), 1);
/// # Ok(())
/// # }
/// ```
pub trait Suggester: Send + Sync {
    /// Return ranked suggestions for `criteria` drawn from `catalog`.
    fn suggest<'a>(&self, criteria: &GiftCriteria, catalog: &'a [Product]) -> Vec<Suggestion<'a>>;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=100.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, MAX_MATCH_SCORE)
    }
}
