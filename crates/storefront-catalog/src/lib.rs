//! Product catalog query engine for the storefront.
//!
//! This crate holds the product collection and answers listing queries
//! against it:
//!
//! - **Catalog**: Products, ingestion records, the shared in-memory store
//! - **Search**: Filters, locale-aware sorting, pagination, facet counts
//! - **API**: JSON handlers for the `/api/products` and `/api/filters` endpoints
//!
//! # Example
//!
//! ```rust
//! use storefront_catalog::prelude::*;
//!
//! let store = CatalogStore::seeded();
//!
//! let spec = QuerySpec::new()
//!     .with_brands(["Nike"])
//!     .with_sort(SortOption::PriceAsc)
//!     .with_pagination(1, 5);
//!
//! let page = store.query(&spec);
//! assert_eq!(page.total, 8);
//! assert_eq!(page.items.len(), 5);
//!
//! let counts = store.facets();
//! assert_eq!(counts.brand_counts["Nike"], 8);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod api;
pub mod catalog;
pub mod search;

pub use catalog::{CatalogStore, Product, ProductRecord, Rating};
pub use error::CatalogError;
pub use ids::ProductId;
pub use money::{Currency, Money, Rounding};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money, Rounding};

    // Catalog
    pub use crate::catalog::{CatalogStore, Product, ProductRecord, Rating};

    // Search
    pub use crate::search::{
        Facet, FacetSummary, FacetValue, Filter, Pagination, QueryResult, QuerySpec, SortOption,
    };

    // API
    pub use crate::api::{handle, ApiRequest, ApiResponse};
}
