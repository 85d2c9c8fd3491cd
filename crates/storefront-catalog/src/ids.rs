//! Product identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an ID from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random ID.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generation_is_unique() {
        let ids: std::collections::HashSet<ProductId> =
            (0..100).map(|_| ProductId::generate()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("sku-42");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""sku-42""#);

        let back: ProductId = serde_json::from_str(r#""sku-42""#).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_display() {
        let id: ProductId = "prod-789".into();
        assert_eq!(format!("{}", id), "prod-789");
    }
}
