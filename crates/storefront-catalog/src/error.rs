//! Catalog error types.

use thiserror::Error;

/// Errors that can occur in catalog operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two products share an identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(String),

    /// A query parameter could not be interpreted.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    /// Decimal amount could not be parsed.
    #[error("Invalid amount: {0}")]
    InvalidMoney(String),

    /// A product record failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CatalogError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogError::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Whether this error means the requested thing is simply absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::ProductNotFound(_))
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
