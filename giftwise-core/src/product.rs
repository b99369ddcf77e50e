//! Catalog products offered as gift candidates.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Free-form product tags.
///
/// Tags form a set; insertion order carries no meaning and duplicates
/// collapse.
pub type Tags = BTreeSet<String>;

/// Moderation state of a catalog listing.
///
/// # Examples
/// ```
/// use giftwise_core::ProductStatus;
///
/// assert_eq!(ProductStatus::Approved.as_str(), "approved");
/// assert_eq!("Rejected".parse::<ProductStatus>(), Ok(ProductStatus::Rejected));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ProductStatus {
    /// Awaiting moderation.
    Pending,
    /// Visible to buyers.
    Approved,
    /// Refused by a moderator.
    Rejected,
}

impl ProductStatus {
    /// Return the status as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ProductStatus {
    type Error = ProductStatusParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Error returned when parsing an unknown [`ProductStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown product status '{0}'")]
pub struct ProductStatusParseError(pub String);

impl FromStr for ProductStatus {
    type Err = ProductStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(ProductStatusParseError(s.to_owned())),
        }
    }
}

/// A listing in the gift catalog.
///
/// Only `price`, `tags`, `instant_delivery_eligible` and `status` feed
/// scoring. The remaining fields travel with the product so renderers can
/// display a suggestion without a second lookup.
///
/// # Examples
/// ```
/// use giftwise_core::{Product, ProductStatus};
///
/// let product = Product::new("p-1", 499.0, ProductStatus::Approved)
///     .with_tags(["handmade", "home-decor"])
///     .with_instant_delivery(true);
///
/// assert!(product.is_approved());
/// assert!(product.has_tag("handmade"));
/// assert_eq!(product.tags.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,
    /// Price in the storefront currency.
    pub price: f64,
    /// Descriptive tags matched against category keywords.
    #[serde(default)]
    pub tags: Tags,
    /// Whether the seller can deliver the same day.
    #[serde(default)]
    pub instant_delivery_eligible: bool,
    /// Moderation state.
    pub status: ProductStatus,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Listing seller identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
    /// Listing seller display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_name: Option<String>,
    /// Primary storefront category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// City the seller ships from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Free-form listing description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Construct an untagged product without display metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, price: f64, status: ProductStatus) -> Self {
        Self {
            id: id.into(),
            price,
            tags: Tags::new(),
            instant_delivery_eligible: false,
            status,
            name: String::new(),
            seller_id: None,
            seller_name: None,
            category: None,
            city: None,
            description: None,
        }
    }

    /// Replace the tag set while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set instant delivery eligibility while consuming `self`.
    #[must_use]
    pub const fn with_instant_delivery(mut self, eligible: bool) -> Self {
        self.instant_delivery_eligible = eligible;
        self
    }

    /// Set the display name while consuming `self`.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Report whether the listing is visible to buyers.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self.status, ProductStatus::Approved)
    }

    /// Report whether the product carries exactly `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}
