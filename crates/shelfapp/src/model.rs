//! # Data Model
//!
//! A [`Product`] is one catalog entry. Products live inside a [`Catalog`], which maps a
//! category key to the ordered list of products in that category. The order inside a
//! category is the display (rank) order and always equals insertion order.
//!
//! ## Identity
//!
//! Product ids are **per category**: `shoes/1` and `books/1` are different products.
//! Ids are assigned by the store as `1 + max(existing ids)` within the target category,
//! see [`next_id`]. A category whose largest id is `u64::MAX` accepts no more products.
//!
//! ## Boundary Payloads
//!
//! Callers never build a [`Product`] directly. Input arrives as a [`ProductDraft`]
//! (every optional field is an `Option`), is checked with [`ProductDraft::validate`],
//! and is turned into a fully formed [`NewProduct`] by [`ProductDraft::into_new_product`],
//! which applies the documented defaults and the discount rule. The store only ever
//! sees fully formed payloads.

use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Image used when a product has no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=300";

/// The full persisted state: category key → ordered products.
///
/// Keys are kept sorted so the serialized document has a stable order.
pub type Catalog = BTreeMap<String, Vec<Product>>;

fn default_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub original_price: f64,
    #[serde(default)]
    pub sale_price: f64,
    #[serde(default)]
    pub discount: i64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u64,
    #[serde(default = "default_image")]
    pub image: String,
    pub affiliate_link: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub badge: String,
    pub category: String,
}

impl Product {
    /// Attach a store-assigned id to a fully formed payload.
    pub fn from_new(id: u64, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            original_price: new.original_price,
            sale_price: new.sale_price,
            discount: new.discount,
            rating: new.rating,
            reviews: new.reviews,
            image: new.image,
            affiliate_link: new.affiliate_link,
            features: new.features,
            badge: new.badge,
            category: new.category,
        }
    }
}

/// A product without an id. Every field is present; defaults were applied upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub original_price: f64,
    pub sale_price: f64,
    pub discount: i64,
    pub rating: f64,
    pub reviews: u64,
    pub image: String,
    pub affiliate_link: String,
    pub features: Vec<String>,
    pub badge: String,
    pub category: String,
}

/// Raw create payload as it arrives from a caller (HTTP body, CLI flags).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub category: Option<String>,
    pub name: Option<String>,
    pub affiliate_link: Option<String>,
    pub original_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub rating: Option<f64>,
    pub reviews: Option<u64>,
    pub image: Option<String>,
    pub features: Option<Vec<String>>,
    pub badge: Option<String>,
    pub discount: Option<i64>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

impl ProductDraft {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        affiliate_link: impl Into<String>,
    ) -> Self {
        Self {
            category: Some(category.into()),
            name: Some(name.into()),
            affiliate_link: Some(affiliate_link.into()),
            ..Default::default()
        }
    }

    /// Rejects drafts missing a required field or carrying out-of-range numbers.
    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.name) || is_blank(&self.affiliate_link) || is_blank(&self.category) {
            return Err(ShelfError::Validation(
                "Name, affiliateLink, and category are required".to_string(),
            ));
        }
        for (field, price) in [
            ("originalPrice", self.original_price),
            ("salePrice", self.sale_price),
        ] {
            if price.is_some_and(|p| !p.is_finite() || p < 0.0) {
                return Err(ShelfError::Validation(format!(
                    "{field} must be a non-negative number"
                )));
            }
        }
        if self
            .rating
            .is_some_and(|r| !r.is_finite() || !(0.0..=5.0).contains(&r))
        {
            return Err(ShelfError::Validation(
                "rating must be between 0 and 5".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate, then fill in defaults and derive the discount.
    pub fn into_new_product(self, placeholder_image: &str) -> Result<NewProduct> {
        self.validate()?;

        let discount = compute_discount(self.original_price, self.sale_price, self.discount);
        let image = self
            .image
            .filter(|img| !img.trim().is_empty())
            .unwrap_or_else(|| placeholder_image.to_string());

        Ok(NewProduct {
            name: self.name.unwrap_or_default(),
            original_price: self.original_price.unwrap_or(0.0),
            sale_price: self.sale_price.unwrap_or(0.0),
            discount,
            rating: self.rating.unwrap_or(0.0),
            reviews: self.reviews.unwrap_or(0),
            image,
            affiliate_link: self.affiliate_link.unwrap_or_default(),
            features: self.features.unwrap_or_default(),
            badge: self.badge.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
        })
    }
}

/// Percentage off, rounded to the nearest integer with halves going up.
///
/// Derived only when both prices are given and nonzero; a zero price counts as
/// not given. Otherwise the supplied discount (or 0) is used.
pub fn compute_discount(original: Option<f64>, sale: Option<f64>, supplied: Option<i64>) -> i64 {
    match (original, sale) {
        (Some(original), Some(sale)) if original != 0.0 && sale != 0.0 => {
            (100.0 * (original - sale) / original + 0.5).floor() as i64
        }
        _ => supplied.unwrap_or(0),
    }
}

/// Next id for a category: one past the largest existing id, or 1.
///
/// `None` when the largest id is already `u64::MAX`.
pub fn next_id(products: &[Product]) -> Option<u64> {
    match products.iter().map(|p| p.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Splits a comma separated feature list, dropping blank entries.
pub fn split_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64) -> Product {
        Product::from_new(
            id,
            ProductDraft::new("shoes", "Runner", "https://example.com/r")
                .into_new_product(PLACEHOLDER_IMAGE)
                .unwrap(),
        )
    }

    #[test]
    fn discount_is_derived_from_prices() {
        assert_eq!(compute_discount(Some(200.0), Some(150.0), None), 25);
        assert_eq!(compute_discount(Some(3.0), Some(2.0), Some(90)), 33);
        assert_eq!(compute_discount(Some(8.0), Some(7.0), None), 13);
    }

    #[test]
    fn zero_sale_price_counts_as_not_given() {
        assert_eq!(compute_discount(Some(200.0), Some(0.0), Some(7)), 7);
        assert_eq!(compute_discount(Some(200.0), Some(0.0), None), 0);
    }

    #[test]
    fn discount_halves_round_up() {
        // sale above original gives a negative discount of exactly -2.5
        assert_eq!(compute_discount(Some(100.0), Some(102.5), None), -2);
        assert_eq!(compute_discount(Some(8.0), Some(7.0), None), 13);
    }

    #[test]
    fn discount_falls_back_when_original_price_is_zero_or_missing() {
        assert_eq!(compute_discount(Some(0.0), Some(50.0), Some(10)), 10);
        assert_eq!(compute_discount(None, Some(50.0), None), 0);
        assert_eq!(compute_discount(Some(100.0), None, Some(5)), 5);
        assert_eq!(compute_discount(None, None, None), 0);
    }

    #[test]
    fn next_id_is_max_plus_one() {
        assert_eq!(next_id(&[]), Some(1));
        assert_eq!(next_id(&[product(1), product(2)]), Some(3));
        assert_eq!(next_id(&[product(7), product(3)]), Some(8));
    }

    #[test]
    fn next_id_is_exhausted_at_u64_max() {
        assert_eq!(next_id(&[product(3), product(u64::MAX)]), None);
    }

    #[test]
    fn draft_defaults_are_applied() {
        let new = ProductDraft::new("books", "Novel", "https://example.com/n")
            .into_new_product(PLACEHOLDER_IMAGE)
            .unwrap();
        assert_eq!(new.image, PLACEHOLDER_IMAGE);
        assert_eq!(new.rating, 0.0);
        assert_eq!(new.reviews, 0);
        assert_eq!(new.badge, "");
        assert!(new.features.is_empty());
        assert_eq!(new.discount, 0);
    }

    #[test]
    fn blank_image_uses_placeholder() {
        let draft = ProductDraft {
            image: Some("   ".into()),
            ..ProductDraft::new("books", "Novel", "https://example.com/n")
        };
        let new = draft.into_new_product("/custom.png").unwrap();
        assert_eq!(new.image, "/custom.png");
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let draft = ProductDraft {
            name: Some("Thing".into()),
            category: Some("gaming".into()),
            ..Default::default()
        };
        let err = draft.validate().unwrap_err();
        assert!(matches!(err, ShelfError::Validation(_)));

        let blank_name = ProductDraft::new("gaming", "  ", "https://example.com");
        assert!(blank_name.validate().is_err());
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        let rating = ProductDraft {
            rating: Some(5.5),
            ..ProductDraft::new("gaming", "Pad", "https://example.com")
        };
        assert!(rating.validate().is_err());

        let price = ProductDraft {
            sale_price: Some(-1.0),
            ..ProductDraft::new("gaming", "Pad", "https://example.com")
        };
        assert!(price.validate().is_err());
    }

    #[test]
    fn product_serializes_camel_case_with_all_fields() {
        let value = serde_json::to_value(product(4)).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "id",
            "name",
            "originalPrice",
            "salePrice",
            "discount",
            "rating",
            "reviews",
            "image",
            "affiliateLink",
            "features",
            "badge",
            "category",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 12);
    }

    #[test]
    fn split_features_trims_and_drops_blanks() {
        assert_eq!(
            split_features(" Noise cancelling, 30h battery ,, "),
            vec!["Noise cancelling", "30h battery"]
        );
        assert!(split_features("").is_empty());
    }
}
