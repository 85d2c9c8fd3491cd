//! Query builder and sort options.

use crate::error::CatalogError;
use crate::money::Money;
use crate::search::Filter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: i64 = 12;

/// Sort options for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
    /// Sort by effective price, low to high.
    PriceAsc,
    /// Sort by effective price, high to low.
    PriceDesc,
    /// Sort by number of ratings, most first.
    PopularityDesc,
}

impl SortOption {
    /// Every option, in menu order.
    pub const ALL: [SortOption; 5] = [
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::PopularityDesc,
    ];

    /// Wire name (e.g., "price-asc").
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::PopularityDesc => "popularity-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "Name (A-Z)",
            SortOption::NameDesc => "Name (Z-A)",
            SortOption::PriceAsc => "Price (Low to High)",
            SortOption::PriceDesc => "Price (High to Low)",
            SortOption::PopularityDesc => "Popularity",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| {
                let expected: Vec<_> = SortOption::ALL.iter().map(|o| o.as_str()).collect();
                CatalogError::invalid_parameter(
                    "sortBy",
                    format!("expected one of {}, got '{}'", expected.join(", "), s),
                )
            })
    }
}

/// Filter, sort and pagination parameters for one catalog query.
///
/// `page` and `limit` are kept as given; the engine clamps values below 1
/// to 1 when it runs the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuerySpec {
    /// Exact category match.
    pub category: Option<String>,
    /// Brand must be one of these (empty = no filter).
    pub brands: Vec<String>,
    /// Product must have at least one of these colors (empty = no filter).
    pub colors: Vec<String>,
    /// Inclusive lower bound on effective price.
    pub min_price: Option<Money>,
    /// Inclusive upper bound on effective price.
    pub max_price: Option<Money>,
    /// Sort order; `None` keeps catalog order.
    pub sort_by: Option<SortOption>,
    /// Page number (1-indexed).
    pub page: i64,
    /// Items per page.
    pub limit: i64,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            category: None,
            brands: Vec::new(),
            colors: Vec::new(),
            min_price: None,
            max_price: None,
            sort_by: None,
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl QuerySpec {
    /// Create a query with no filters, catalog order, first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to the given brands.
    pub fn with_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brands = brands.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to products having any of the given colors.
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set price bounds.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort_by = Some(sort);
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: i64, limit: i64) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }

    /// Page number after clamping.
    pub fn effective_page(&self) -> i64 {
        self.page.max(1)
    }

    /// Page size after clamping.
    pub fn effective_limit(&self) -> i64 {
        self.limit.max(1)
    }

    /// Index of the first item on the requested page. Saturates instead
    /// of overflowing for absurd page numbers.
    pub fn offset(&self) -> usize {
        let offset = (self.effective_page() - 1).saturating_mul(self.effective_limit());
        usize::try_from(offset).unwrap_or(usize::MAX)
    }

    /// The active filters, in the order they are applied.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if let Some(category) = &self.category {
            filters.push(Filter::category(category.clone()));
        }
        if !self.brands.is_empty() {
            filters.push(Filter::brands(self.brands.clone()));
        }
        if !self.colors.is_empty() {
            filters.push(Filter::colors(self.colors.clone()));
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            filters.push(Filter::price_range(self.min_price, self.max_price));
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spec = QuerySpec::new();
        assert_eq!(spec.page, 1);
        assert_eq!(spec.limit, 12);
        assert_eq!(spec.sort_by, None);
        assert!(spec.filters().is_empty());
    }

    #[test]
    fn test_query_builder() {
        let spec = QuerySpec::new()
            .with_category("sneakers")
            .with_brands(["Nike", "Vans"])
            .with_sort(SortOption::PriceAsc)
            .with_pagination(2, 10);

        assert_eq!(spec.offset(), 10);
        assert_eq!(spec.brands, vec!["Nike", "Vans"]);
        assert_eq!(spec.filters().len(), 2);
    }

    #[test]
    fn test_pagination_is_clamped() {
        let spec = QuerySpec::new().with_pagination(0, -3);
        assert_eq!(spec.effective_page(), 1);
        assert_eq!(spec.effective_limit(), 1);
        assert_eq!(spec.offset(), 0);
    }

    #[test]
    fn test_offset_saturates() {
        let spec = QuerySpec::new().with_pagination(i64::MAX, i64::MAX);
        assert!(spec.offset() > 1_000_000);
    }

    #[test]
    fn test_filters_follow_pipeline_order() {
        let spec = QuerySpec::new()
            .with_price_range(Some(Money::from_major(1)), None)
            .with_colors(["red"])
            .with_category("sneakers");

        let filters = spec.filters();
        assert!(matches!(filters[0], Filter::Category(_)));
        assert!(matches!(filters[1], Filter::Colors(_)));
        assert!(matches!(filters[2], Filter::PriceRange { .. }));
    }

    #[test]
    fn test_sort_option_round_trip() {
        for option in SortOption::ALL {
            assert_eq!(option.as_str().parse::<SortOption>().unwrap(), option);
        }
        assert!("relevance".parse::<SortOption>().is_err());
    }

    #[test]
    fn test_spec_deserializes_from_json_body() {
        let spec: QuerySpec = serde_json::from_str(
            r#"{"brands": ["Nike"], "minPrice": "1500", "sortBy": "popularity-desc", "page": 3}"#,
        )
        .unwrap();
        assert_eq!(spec.brands, vec!["Nike"]);
        assert_eq!(spec.min_price, Some(Money::from_major(1500)));
        assert_eq!(spec.sort_by, Some(SortOption::PopularityDesc));
        assert_eq!(spec.page, 3);
        assert_eq!(spec.limit, DEFAULT_LIMIT);
    }
}
