//! Product types.

use super::ProductRecord;
use crate::ids::ProductId;
use crate::money::{format_fixed, parse_fixed, DecimalVisitor, Money};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Average customer rating, 0.0 to 5.0 in steps of one tenth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rating(u8);

impl Rating {
    /// Highest possible rating, in tenths.
    pub const MAX_TENTHS: u8 = 50;

    /// Create a rating from tenths of a star, if in range.
    pub fn from_tenths(tenths: u8) -> Option<Self> {
        (tenths <= Self::MAX_TENTHS).then_some(Self(tenths))
    }

    /// Parse text such as `"4.5"` or `"4"`.
    pub fn parse(text: &str) -> Option<Self> {
        parse_fixed(text, 1)
            .and_then(|tenths| u8::try_from(tenths).ok())
            .and_then(Self::from_tenths)
    }

    /// Rating in tenths of a star.
    pub fn tenths(&self) -> u8 {
        self.0
    }

    /// Number of whole stars.
    pub fn full_stars(&self) -> u8 {
        self.0 / 10
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_fixed(i64::from(self.0), 1))
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tenths = deserializer.deserialize_any(DecimalVisitor(1))?;
        u8::try_from(tenths)
            .ok()
            .and_then(Rating::from_tenths)
            .ok_or_else(|| serde::de::Error::custom(format!("rating out of range: {}", tenths)))
    }
}

/// A product in the catalog.
///
/// Products are validated at ingestion (see [`ProductRecord`](super::ProductRecord))
/// and never change afterwards. Serde goes through the record as well, so
/// the wire shape is the camelCase document format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Base price.
    pub price: Money,
    /// Discounted price; when present this is what the customer pays.
    pub discount_price: Option<Money>,
    /// Advertised discount, informational only.
    pub discount_percent: Option<u8>,
    /// Average rating.
    pub rating_value: Rating,
    /// Number of ratings, used as the popularity metric.
    pub rating_count: u32,
    /// "Hot" badge flag.
    pub is_hot: bool,
    /// Color tags, in display order.
    pub colors: Vec<String>,
    /// Category tag (e.g., "sneakers").
    pub category: String,
    /// Brand tag.
    pub brand: String,
    /// Product image reference.
    pub image_url: String,
}

impl Product {
    /// Create a product with only the required fields set.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            price,
            discount_price: None,
            discount_percent: None,
            rating_value: Rating::default(),
            rating_count: 0,
            is_hot: false,
            colors: Vec::new(),
            category: category.into(),
            brand: brand.into(),
            image_url: String::new(),
        }
    }

    /// Set the identifier.
    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the discounted price.
    pub fn with_discount_price(mut self, price: Money) -> Self {
        self.discount_price = Some(price);
        self
    }

    /// Set the color tags.
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the rating count.
    pub fn with_rating_count(mut self, count: u32) -> Self {
        self.rating_count = count;
        self
    }

    /// The price used for all filtering and sorting.
    pub fn effective_price(&self) -> Money {
        self.discount_price.unwrap_or(self.price)
    }

    /// Whether the product is sold below its base price.
    pub fn is_on_sale(&self) -> bool {
        self.discount_price
            .map(|discounted| discounted < self.price)
            .unwrap_or(false)
    }

    /// Whether any of the product's colors is in `wanted`.
    pub fn has_any_color(&self, wanted: &[String]) -> bool {
        self.colors.iter().any(|color| wanted.contains(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_price_prefers_discount() {
        let product = Product::new("Air Max", Money::from_major(1000), "sneakers", "Nike")
            .with_discount_price(Money::from_major(700));
        assert_eq!(product.effective_price(), Money::from_major(700));
        assert!(product.is_on_sale());
    }

    #[test]
    fn test_effective_price_falls_back_to_base() {
        let product = Product::new("Old Skool", Money::from_major(5999), "sneakers", "Vans");
        assert_eq!(product.effective_price(), Money::from_major(5999));
        assert!(!product.is_on_sale());
    }

    #[test]
    fn test_has_any_color() {
        let product = Product::new("Gazelle", Money::from_major(10), "sneakers", "Adidas")
            .with_colors(["blue", "red"]);
        assert!(product.has_any_color(&["red".to_string(), "gold".to_string()]));
        assert!(!product.has_any_color(&["gold".to_string()]));
        assert!(!product.has_any_color(&[]));
    }

    #[test]
    fn test_rating_parse_and_display() {
        let rating = Rating::parse("4.5").unwrap();
        assert_eq!(rating.tenths(), 45);
        assert_eq!(rating.full_stars(), 4);
        assert_eq!(rating.to_string(), "4.5");
        assert_eq!(Rating::parse("5").unwrap().to_string(), "5.0");
    }

    #[test]
    fn test_rating_rejects_out_of_range() {
        assert!(Rating::parse("5.1").is_none());
        assert!(Rating::parse("-1").is_none());
        assert!(Rating::parse("4.55").is_none());
        assert!(serde_json::from_str::<Rating>(r#""7.0""#).is_err());
    }

    #[test]
    fn test_rating_serde_accepts_numbers() {
        let rating: Rating = serde_json::from_str("4.2").unwrap();
        assert_eq!(rating.tenths(), 42);
    }
}
