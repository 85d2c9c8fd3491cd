//! Product filters.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A single product predicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Category must equal this value exactly (case-sensitive).
    Category(String),
    /// Brand must be one of these (OR).
    Brands(Vec<String>),
    /// At least one product color must be one of these (OR).
    Colors(Vec<String>),
    /// Effective price within inclusive bounds.
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
}

impl Filter {
    /// Create a category filter.
    pub fn category(category: impl Into<String>) -> Self {
        Filter::Category(category.into())
    }

    /// Create a brand membership filter.
    pub fn brands(brands: Vec<String>) -> Self {
        Filter::Brands(brands)
    }

    /// Create a color intersection filter.
    pub fn colors(colors: Vec<String>) -> Self {
        Filter::Colors(colors)
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Whether `product` passes this filter.
    ///
    /// An empty brand or color list filters nothing out.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(category) => product.category == *category,
            Filter::Brands(brands) => brands.is_empty() || brands.contains(&product.brand),
            Filter::Colors(colors) => colors.is_empty() || product.has_any_color(colors),
            Filter::PriceRange { min, max } => {
                let price = product.effective_price();
                min.map_or(true, |min| price >= min) && max.map_or(true, |max| price <= max)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sneaker(price: i64, discount: Option<i64>) -> Product {
        let product = Product::new("Runner", Money::from_major(price), "sneakers", "Nike")
            .with_colors(["black", "white"]);
        match discount {
            Some(d) => product.with_discount_price(Money::from_major(d)),
            None => product,
        }
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let product = sneaker(100, None);
        assert!(Filter::category("sneakers").matches(&product));
        assert!(!Filter::category("Sneakers").matches(&product));
    }

    #[test]
    fn test_brand_membership() {
        let product = sneaker(100, None);
        assert!(Filter::brands(vec!["Vans".into(), "Nike".into()]).matches(&product));
        assert!(!Filter::brands(vec!["Vans".into()]).matches(&product));
        assert!(Filter::brands(vec![]).matches(&product));
    }

    #[test]
    fn test_color_intersection() {
        let product = sneaker(100, None);
        assert!(Filter::colors(vec!["white".into(), "gold".into()]).matches(&product));
        assert!(!Filter::colors(vec!["gold".into()]).matches(&product));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let product = sneaker(200, None);
        let at = Some(Money::from_major(200));
        assert!(Filter::price_range(at, None).matches(&product));
        assert!(Filter::price_range(None, at).matches(&product));
        assert!(Filter::price_range(at, at).matches(&product));
    }

    #[test]
    fn test_price_uses_discount() {
        let product = sneaker(1000, Some(700));
        assert!(!Filter::price_range(Some(Money::from_major(800)), None).matches(&product));
        assert!(Filter::price_range(None, Some(Money::from_major(700))).matches(&product));
    }

    #[test]
    fn test_inverted_bounds_match_nothing() {
        let product = sneaker(150, None);
        let filter = Filter::price_range(Some(Money::from_major(200)), Some(Money::from_major(100)));
        assert!(!filter.matches(&product));
    }
}
