//! In-memory catalog store.
//!
//! The store owns the authoritative product collection. Readers get an
//! `Arc` snapshot of the whole collection; writers build a new collection
//! and swap the pointer, so a reader never sees a half-applied change.

use super::product::Product;
use super::record::ProductRecord;
use super::seed::sample_products;
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::search::{self, FacetSummary, QueryResult, QuerySpec};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

/// Shared handle to the product collection.
///
/// Cloning the handle is cheap; clones observe the same collection.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Arc<RwLock<Arc<Vec<Product>>>>,
}

impl CatalogStore {
    /// Create a store from an already-validated collection.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        ensure_unique_ids(&products)?;
        tracing::info!(products = products.len(), "catalog initialized");
        Ok(Self::from_snapshot(products))
    }

    /// Create a store holding the built-in sample catalog.
    pub fn seeded() -> Self {
        let products = sample_products();
        tracing::info!(products = products.len(), "catalog initialized from seed");
        Self::from_snapshot(products)
    }

    /// Create a store from a JSON product document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(ProductRecord::parse_document(json)?)
    }

    fn from_snapshot(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(Arc::new(products))),
        }
    }

    /// Snapshot of the full collection, in insertion order.
    pub fn all_products(&self) -> Arc<Vec<Product>> {
        Arc::clone(&self.products.read())
    }

    /// Look up a product by id.
    pub fn get_by_id(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.find(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Look up a product by id, returning `None` when absent.
    pub fn find(&self, id: &ProductId) -> Option<Product> {
        self.all_products().iter().find(|p| &p.id == id).cloned()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a product, assigning it a fresh id.
    pub fn create_product(&self, record: ProductRecord) -> Result<Product, CatalogError> {
        let product = Product::try_from(ProductRecord { id: None, ..record })?;

        let mut guard = self.products.write();
        let mut next = Vec::with_capacity(guard.len() + 1);
        next.extend(guard.iter().cloned());
        next.push(product.clone());
        *guard = Arc::new(next);

        tracing::debug!(product_id = %product.id, "product created");
        Ok(product)
    }

    /// Replace the whole collection.
    pub fn replace_all(&self, products: Vec<Product>) -> Result<(), CatalogError> {
        ensure_unique_ids(&products)?;
        let count = products.len();
        *self.products.write() = Arc::new(products);
        tracing::info!(products = count, "catalog replaced");
        Ok(())
    }

    /// Run a query against the current snapshot.
    pub fn query(&self, spec: &QuerySpec) -> QueryResult {
        search::query(&self.all_products(), spec)
    }

    /// Facet counts over the whole current snapshot.
    pub fn facets(&self) -> FacetSummary {
        search::facets(self.all_products().iter())
    }
}

fn ensure_unique_ids(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(&product.id) {
            return Err(CatalogError::DuplicateProductId(product.id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: &str, name: &str) -> Product {
        Product::new(name, Money::from_major(100), "sneakers", "Nike").with_id(id)
    }

    #[test]
    fn test_get_by_id() {
        let store = CatalogStore::new(vec![product("a", "Alpha"), product("b", "Beta")]).unwrap();
        assert_eq!(store.get_by_id(&"b".into()).unwrap().name, "Beta");
    }

    #[test]
    fn test_get_by_id_not_found() {
        let store = CatalogStore::new(vec![product("a", "Alpha")]).unwrap();
        let err = store.get_by_id(&"missing".into()).unwrap_err();
        assert_eq!(err, CatalogError::ProductNotFound("missing".to_string()));
        assert!(err.is_not_found());
        assert!(store.find(&"missing".into()).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = CatalogStore::new(vec![product("a", "Alpha"), product("a", "Again")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateProductId("a".to_string()));
    }

    #[test]
    fn test_snapshot_is_isolated_from_caller_changes() {
        let store = CatalogStore::new(vec![product("a", "Alpha"), product("b", "Beta")]).unwrap();

        let mut copy = store.all_products().as_ref().clone();
        copy.reverse();
        copy.pop();

        let names: Vec<_> = store.all_products().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_old_snapshot_survives_replacement() {
        let store = CatalogStore::new(vec![product("a", "Alpha")]).unwrap();
        let before = store.all_products();

        store.replace_all(vec![product("x", "Xi"), product("y", "Ypsilon")]).unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(store.len(), 2);
        assert!(store.find(&"a".into()).is_none());
    }

    #[test]
    fn test_replace_all_rejects_duplicates_and_keeps_old_data() {
        let store = CatalogStore::new(vec![product("a", "Alpha")]).unwrap();
        assert!(store.replace_all(vec![product("x", "Xi"), product("x", "Xi")]).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_product_assigns_fresh_id() {
        let store = CatalogStore::new(vec![product("a", "Alpha")]).unwrap();
        let record = ProductRecord::from(product("a", "Alpha Two"));

        let created = store.create_product(record).unwrap();

        assert_ne!(created.id.as_str(), "a");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_by_id(&created.id).unwrap().name, "Alpha Two");
    }

    #[test]
    fn test_clones_share_the_collection() {
        let store = CatalogStore::new(Vec::new()).unwrap();
        let handle = store.clone();
        assert!(handle.is_empty());

        store.replace_all(vec![product("a", "Alpha")]).unwrap();
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn test_seeded_store() {
        let store = CatalogStore::seeded();
        assert_eq!(store.len(), 24);
        assert_eq!(store.facets().brand_counts.get("Nike"), Some(&8));
    }
}
