//! Ingestion schema for product documents.
//!
//! Product documents are JSON arrays of camelCase objects whose decimal
//! fields may be strings (`"8999"`) or numbers. Every record is checked
//! here so the query engine can rely on well-formed products.

use super::product::{Product, Rating};
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as it appears in a JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Identifier; generated when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub discount_price: Option<Money>,
    #[serde(default)]
    pub discount_percent: Option<u8>,
    #[serde(default)]
    pub rating_value: Rating,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub is_hot: bool,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    pub category: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub image_url: String,
}

impl ProductRecord {
    /// Parse and validate a whole product document.
    ///
    /// Fails on the first invalid record, naming its position.
    pub fn parse_document(json: &str) -> Result<Vec<Product>, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Product::try_from(record).map_err(|e| match e {
                    CatalogError::Validation(message) => {
                        CatalogError::Validation(format!("record {}: {}", index, message))
                    }
                    other => other,
                })
            })
            .collect()
    }

    /// Check the record without converting it.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::Validation("name must not be empty".to_string()));
        }
        if self.price.is_negative() {
            return Err(CatalogError::Validation(format!(
                "price must not be negative, got {}",
                self.price
            )));
        }
        if let Some(discount) = self.discount_price {
            if discount.is_negative() {
                return Err(CatalogError::Validation(format!(
                    "discountPrice must not be negative, got {}",
                    discount
                )));
            }
        }
        if let Some(percent) = self.discount_percent {
            if percent > 100 {
                return Err(CatalogError::Validation(format!(
                    "discountPercent must be at most 100, got {}",
                    percent
                )));
            }
        }
        if let Some(id) = &self.id {
            if id.as_str().is_empty() {
                return Err(CatalogError::Validation("id must not be empty".to_string()));
            }
        }
        Ok(())
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        record.validate()?;

        let id = record.id.unwrap_or_else(ProductId::generate);
        if let Some(discount) = record.discount_price {
            if discount > record.price {
                tracing::warn!(
                    product_id = %id,
                    price = %record.price,
                    discount_price = %discount,
                    "discount price exceeds base price"
                );
            }
        }

        Ok(Product {
            id,
            name: record.name,
            price: record.price,
            discount_price: record.discount_price,
            discount_percent: record.discount_percent,
            rating_value: record.rating_value,
            rating_count: record.rating_count,
            is_hot: record.is_hot,
            colors: record.colors.unwrap_or_default(),
            category: record.category,
            brand: record.brand,
            image_url: record.image_url,
        })
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name,
            price: product.price,
            discount_price: product.discount_price,
            discount_percent: product.discount_percent,
            rating_value: product.rating_value,
            rating_count: product.rating_count,
            is_hot: product.is_hot,
            colors: Some(product.colors),
            category: product.category,
            brand: product.brand,
            image_url: product.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"[
        {
            "id": "p-1",
            "name": "Nike Air Max 270 React",
            "price": "8999",
            "discountPrice": "6299",
            "discountPercent": 30,
            "ratingValue": "4.0",
            "ratingCount": 128,
            "isHot": true,
            "colors": ["blue", "red", "black"],
            "category": "sneakers",
            "brand": "Nike",
            "imageUrl": "https://example.test/1.jpg"
        },
        {
            "name": "Vans Authentic",
            "price": 4999,
            "discountPrice": null,
            "category": "sneakers",
            "brand": "Vans",
            "imageUrl": "https://example.test/2.jpg"
        }
    ]"#;

    #[test]
    fn test_parse_document() {
        let products = ProductRecord::parse_document(DOCUMENT).unwrap();
        assert_eq!(products.len(), 2);

        let air_max = &products[0];
        assert_eq!(air_max.id.as_str(), "p-1");
        assert_eq!(air_max.effective_price(), Money::from_major(6299));
        assert_eq!(air_max.rating_value.tenths(), 40);
        assert!(air_max.is_hot);

        let vans = &products[1];
        assert!(!vans.id.as_str().is_empty());
        assert_eq!(vans.price, Money::from_major(4999));
        assert_eq!(vans.discount_price, None);
        assert!(vans.colors.is_empty());
        assert_eq!(vans.rating_count, 0);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let err = ProductRecord::parse_document(r#"[{"name": "x", "category": "c"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Serialization(_)));
    }

    #[test]
    fn test_validation_names_the_record() {
        let json = r#"[
            {"name": "ok", "price": "1", "category": "c", "brand": "b"},
            {"name": "  ", "price": "1", "category": "c", "brand": "b"}
        ]"#;
        let err = ProductRecord::parse_document(json).unwrap_err();
        assert_eq!(
            err,
            CatalogError::Validation("record 1: name must not be empty".to_string())
        );
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let json = r#"[{"name": "x", "price": "-1", "category": "c", "brand": "b"}]"#;
        assert!(matches!(
            ProductRecord::parse_document(json),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn test_discount_percent_over_100_is_rejected() {
        let json = r#"[{"name": "x", "price": "1", "discountPercent": 101, "category": "c", "brand": "b"}]"#;
        assert!(matches!(
            ProductRecord::parse_document(json),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn test_product_serializes_in_document_shape() {
        let product = Product::new("Gazelle", Money::from_major(7999), "sneakers", "Adidas")
            .with_id("p-9")
            .with_discount_price(Money::from_major(5999))
            .with_colors(["blue"]);
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["id"], "p-9");
        assert_eq!(value["price"], "7999.00");
        assert_eq!(value["discountPrice"], "5999.00");
        assert_eq!(value["ratingValue"], "0.0");
        assert_eq!(value["colors"][0], "blue");
        assert_eq!(value["imageUrl"], "");

        let back: Product = serde_json::from_value(value).unwrap();
        assert_eq!(back, product);
    }
}
