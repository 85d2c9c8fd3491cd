//! Product catalog module.
//!
//! Contains the product model, the ingestion schema for product
//! documents, the built-in sample catalog and the in-memory store.

mod product;
mod record;
mod seed;
mod store;

pub use product::{Product, Rating};
pub use record::ProductRecord;
pub use seed::sample_products;
pub use store::CatalogStore;
