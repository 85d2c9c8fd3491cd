//! Filter, sort, paginate and count.
//!
//! All functions here are pure: they read a product slice and never
//! reorder or modify it.

use super::collate::CollationKey;
use super::query::{QuerySpec, SortOption};
use super::results::{FacetSummary, QueryResult};
use crate::catalog::Product;
use std::cmp::Reverse;
use std::time::Instant;

/// Products passing every active filter, in catalog order.
pub fn filter<'a>(products: &'a [Product], spec: &QuerySpec) -> Vec<&'a Product> {
    let filters = spec.filters();
    products
        .iter()
        .filter(|product| filters.iter().all(|f| f.matches(product)))
        .collect()
}

/// Sort in place. Equal keys keep their relative order.
pub fn sort(products: &mut [&Product], sort: SortOption) {
    match sort {
        SortOption::NameAsc => products.sort_by_cached_key(|p| CollationKey::new(&p.name)),
        SortOption::NameDesc => {
            products.sort_by_cached_key(|p| Reverse(CollationKey::new(&p.name)))
        }
        SortOption::PriceAsc => products.sort_by_key(|p| p.effective_price()),
        SortOption::PriceDesc => products.sort_by_key(|p| Reverse(p.effective_price())),
        SortOption::PopularityDesc => products.sort_by_key(|p| Reverse(p.rating_count)),
    }
}

/// Run a query: filter, then sort, then cut out the requested page.
///
/// A page past the end yields no items but still reports the full total.
pub fn query(products: &[Product], spec: &QuerySpec) -> QueryResult {
    let started = Instant::now();

    let mut matched = filter(products, spec);
    if let Some(option) = spec.sort_by {
        sort(&mut matched, option);
    }

    let total = matched.len();
    let limit = usize::try_from(spec.effective_limit()).unwrap_or(usize::MAX);
    let items: Vec<Product> = matched
        .into_iter()
        .skip(spec.offset())
        .take(limit)
        .cloned()
        .collect();

    tracing::debug!(
        scanned = products.len(),
        matched = total,
        returned = items.len(),
        page = spec.effective_page(),
        sort = spec.sort_by.map(|s| s.as_str()),
        elapsed_us = started.elapsed().as_micros() as u64,
        "catalog query"
    );

    QueryResult {
        items,
        total,
        page: spec.effective_page(),
        limit: spec.effective_limit(),
    }
}

/// Count products per brand, color and category.
///
/// A product counts once under every color it lists. Empty brand and
/// category values are skipped.
pub fn facets<'a, I>(products: I) -> FacetSummary
where
    I: IntoIterator<Item = &'a Product>,
{
    let started = Instant::now();
    let mut summary = FacetSummary::default();
    let mut scanned = 0usize;

    for product in products {
        scanned += 1;
        if !product.brand.is_empty() {
            *summary.brand_counts.entry(product.brand.clone()).or_insert(0) += 1;
        }
        if !product.category.is_empty() {
            *summary
                .category_counts
                .entry(product.category.clone())
                .or_insert(0) += 1;
        }
        for color in &product.colors {
            *summary.color_counts.entry(color.clone()).or_insert(0) += 1;
        }
    }

    tracing::debug!(
        scanned,
        brands = summary.brand_counts.len(),
        colors = summary.color_counts.len(),
        categories = summary.category_counts.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "catalog facets"
    );
    summary
}
