//! Query results, pagination and facets.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of matching items.
    pub total: i64,
    /// Total number of pages; zero when nothing matched.
    pub total_pages: i64,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. `page` and `per_page` are clamped to at least 1.
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total = total.max(0);
        let total_pages = total / per_page + i64::from(total % per_page != 0);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<i64> {
        let max_visible = i64::try_from(max_visible).unwrap_or(i64::MAX);
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = start
            .saturating_add(max_visible - 1)
            .min(self.total_pages);
        let start = (end - max_visible + 1).max(1);

        (start..=end).collect()
    }

    /// Get start item number (1-indexed), or 0 when the page is empty.
    pub fn start_item(&self) -> i64 {
        let first = (self.page - 1).saturating_mul(self.per_page).saturating_add(1);
        if first > self.total {
            0
        } else {
            first
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> i64 {
        if self.start_item() == 0 {
            return 0;
        }
        self.page.saturating_mul(self.per_page).min(self.total)
    }
}

/// One page of a catalog query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryResult {
    /// Products on the requested page, in result order.
    pub items: Vec<Product>,
    /// Number of products that matched the filters, before pagination.
    pub total: usize,
    /// Page actually served, after clamping.
    pub page: i64,
    /// Page size actually used, after clamping.
    pub limit: i64,
}

impl QueryResult {
    /// Pagination info for this page.
    pub fn pagination(&self) -> Pagination {
        let total = i64::try_from(self.total).unwrap_or(i64::MAX);
        Pagination::new(self.page, self.limit, total)
    }

    /// Check if the page is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Counts of products per brand, color and category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FacetSummary {
    /// Products per brand. Empty brands are not counted.
    pub brand_counts: BTreeMap<String, usize>,
    /// Products carrying each color.
    pub color_counts: BTreeMap<String, usize>,
    /// Products per category. Empty categories are not counted.
    pub category_counts: BTreeMap<String, usize>,
}

impl FacetSummary {
    /// Brand facet, marking the given brands as selected.
    pub fn brand_facet(&self, selected: &[String]) -> Facet {
        Facet::from_counts("Brand", "brand", &self.brand_counts, |v| {
            selected.iter().any(|s| s == v)
        })
    }

    /// Color facet, marking the given colors as selected.
    pub fn color_facet(&self, selected: &[String]) -> Facet {
        Facet::from_counts("Color", "colors", &self.color_counts, |v| {
            selected.iter().any(|s| s == v)
        })
    }

    /// Category facet, marking the given category as selected.
    pub fn category_facet(&self, selected: Option<&str>) -> Facet {
        Facet::from_counts("Category", "category", &self.category_counts, |v| {
            selected == Some(v)
        })
    }
}

/// A facet for filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Brand").
    pub name: String,
    /// Query parameter this facet filters on.
    pub key: String,
    /// Values, most common first.
    pub values: Vec<FacetValue>,
}

impl Facet {
    fn from_counts(
        name: &str,
        key: &str,
        counts: &BTreeMap<String, usize>,
        is_selected: impl Fn(&str) -> bool,
    ) -> Self {
        let mut values: Vec<FacetValue> = counts
            .iter()
            .map(|(value, &count)| FacetValue {
                value: value.clone(),
                count,
                selected: is_selected(value),
            })
            .collect();
        // counts come out of a BTreeMap, so ties keep alphabetical order
        values.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            name: name.to_string(),
            key: key.to_string(),
            values,
        }
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// The value.
    pub value: String,
    /// Number of items with this value.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
    }

    #[test]
    fn test_pagination_last_page() {
        let p = Pagination::new(5, 10, 45);
        assert!(p.has_prev);
        assert!(!p.has_next);
        assert_eq!(p.start_item(), 41);
        assert_eq!(p.end_item(), 45);
    }

    #[test]
    fn test_pagination_empty_result() {
        let p = Pagination::new(1, 12, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
    }

    #[test]
    fn test_pagination_past_the_end() {
        let p = Pagination::new(9, 10, 45);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
        assert!(!p.has_next);
    }

    #[test]
    fn test_pagination_clamps_inputs() {
        let p = Pagination::new(0, 0, 3);
        assert_eq!(p.page, 1);
        assert_eq!(p.per_page, 1);
        assert_eq!(p.total_pages, 3);
    }

    #[test]
    fn test_pagination_page_numbers() {
        let p = Pagination::new(5, 10, 100);
        assert_eq!(p.page_numbers(5), vec![3, 4, 5, 6, 7]);

        let p = Pagination::new(1, 10, 30);
        assert_eq!(p.page_numbers(5), vec![1, 2, 3]);
    }

    #[test]
    fn test_facet_values_sorted_by_count() {
        let mut summary = FacetSummary::default();
        summary.brand_counts.insert("Vans".into(), 3);
        summary.brand_counts.insert("Nike".into(), 8);
        summary.brand_counts.insert("Adidas".into(), 3);

        let facet = summary.brand_facet(&["Vans".to_string()]);
        let order: Vec<_> = facet.values.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(order, vec!["Nike", "Adidas", "Vans"]);
        assert!(facet.values[2].selected);
        assert!(!facet.values[0].selected);
        assert_eq!(facet.key, "brand");
    }
}
