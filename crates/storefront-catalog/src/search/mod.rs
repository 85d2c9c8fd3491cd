//! Search module.
//!
//! Filtering, sorting, pagination and facet counts over a product slice.

mod collate;
mod engine;
mod filter;
mod params;
mod query;
mod results;

pub use collate::{compare_names, CollationKey};
pub use engine::{facets, filter, query, sort};
pub use filter::Filter;
pub use query::{QuerySpec, SortOption, DEFAULT_LIMIT};
pub use results::{Facet, FacetSummary, FacetValue, Pagination, QueryResult};
