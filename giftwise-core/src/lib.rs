//! Core domain types for the Giftwise suggestion engine.
//!
//! The crate defines the catalog model ([`Product`]), the caller's request
//! ([`GiftCriteria`]), ranked output ([`Suggestion`]) and the [`Suggester`]
//! trait implemented by recommendation engines. Constructors that accept
//! caller input return `Result` so invalid criteria surface at the boundary
//! rather than inside scoring.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod criteria;
pub mod product;
pub mod suggester;
pub mod suggestion;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use criteria::{CriteriaError, GiftCriteria, GiftCriteriaBuilder};
pub use product::{Product, ProductStatus, ProductStatusParseError, Tags};
pub use suggester::{MAX_MATCH_SCORE, Suggester};
pub use suggestion::Suggestion;
