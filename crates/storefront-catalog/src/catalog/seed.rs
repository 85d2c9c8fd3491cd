//! Built-in sample catalog.

use super::product::{Product, Rating};
use crate::ids::ProductId;
use crate::money::Money;

const IMAGE_BASE: &str = "https://images.unsplash.com";
const IMAGE_PARAMS: &str = "ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300";

struct SeedProduct {
    name: &'static str,
    price: i64,
    discount_price: i64,
    discount_percent: u8,
    rating_tenths: u8,
    rating_count: u32,
    is_hot: bool,
    colors: &'static [&'static str],
    brand: &'static str,
    photo: &'static str,
}

const SEED: &[SeedProduct] = &[
    SeedProduct { name: "Nike Air Max 270 React", price: 8999, discount_price: 6299, discount_percent: 30, rating_tenths: 40, rating_count: 128, is_hot: true, colors: &["blue", "red", "black"], brand: "Nike", photo: "photo-1549298916-b41d501d3772" },
    SeedProduct { name: "Nike Air Max 270 React Sport", price: 7999, discount_price: 5799, discount_percent: 28, rating_tenths: 50, rating_count: 92, is_hot: true, colors: &["red", "black", "white"], brand: "Nike", photo: "photo-1600185365483-26d7a4cc7519" },
    SeedProduct { name: "Nike Air Max 270 React Classic", price: 9999, discount_price: 7299, discount_percent: 27, rating_tenths: 40, rating_count: 76, is_hot: true, colors: &["brown", "black"], brand: "Nike", photo: "photo-1595950653106-6c9ebd614d3a" },
    SeedProduct { name: "Nike Air Max 270 React Pro", price: 11999, discount_price: 8299, discount_percent: 31, rating_tenths: 50, rating_count: 156, is_hot: false, colors: &["blue", "green", "white"], brand: "Nike", photo: "photo-1606107557195-0e29a4b5b4aa" },
    SeedProduct { name: "Nike Air Max 270 React Colorful", price: 12999, discount_price: 9299, discount_percent: 29, rating_tenths: 40, rating_count: 89, is_hot: false, colors: &["yellow", "green", "blue"], brand: "Nike", photo: "photo-1551107696-a4b0c5a0d9a2" },
    SeedProduct { name: "Nike Air Max 270 React Purple", price: 9499, discount_price: 6899, discount_percent: 27, rating_tenths: 50, rating_count: 203, is_hot: false, colors: &["purple", "blue"], brand: "Nike", photo: "photo-1460353581641-37baddab0fa2" },
    SeedProduct { name: "Adidas Ultraboost 22", price: 15999, discount_price: 11999, discount_percent: 25, rating_tenths: 45, rating_count: 145, is_hot: true, colors: &["black", "white", "blue"], brand: "Adidas", photo: "photo-1542291026-7eec264c27ff" },
    SeedProduct { name: "Adidas Stan Smith Classic", price: 8999, discount_price: 6999, discount_percent: 22, rating_tenths: 42, rating_count: 267, is_hot: false, colors: &["white", "green"], brand: "Adidas", photo: "photo-1595950653106-6c9ebd614d3a" },
    SeedProduct { name: "Adidas NMD R1", price: 12999, discount_price: 9999, discount_percent: 23, rating_tenths: 43, rating_count: 198, is_hot: true, colors: &["black", "red", "white"], brand: "Adidas", photo: "photo-1600185365483-26d7a4cc7519" },
    SeedProduct { name: "Vans Old Skool", price: 5999, discount_price: 4499, discount_percent: 25, rating_tenths: 41, rating_count: 156, is_hot: false, colors: &["black", "white"], brand: "Vans", photo: "photo-1549298916-b41d501d3772" },
    SeedProduct { name: "Vans Authentic", price: 4999, discount_price: 3999, discount_percent: 20, rating_tenths: 40, rating_count: 89, is_hot: false, colors: &["blue", "red", "yellow"], brand: "Vans", photo: "photo-1606107557195-0e29a4b5b4aa" },
    SeedProduct { name: "Converse Chuck Taylor All Star", price: 6999, discount_price: 5499, discount_percent: 21, rating_tenths: 44, rating_count: 234, is_hot: false, colors: &["black", "white", "red"], brand: "All Stars", photo: "photo-1551107696-a4b0c5a0d9a2" },
    SeedProduct { name: "Puma RS-X", price: 10999, discount_price: 7999, discount_percent: 27, rating_tenths: 42, rating_count: 167, is_hot: true, colors: &["white", "blue", "yellow"], brand: "Actions", photo: "photo-1460353581641-37baddab0fa2" },
    SeedProduct { name: "Skechers D'Lites", price: 7999, discount_price: 5999, discount_percent: 25, rating_tenths: 40, rating_count: 123, is_hot: false, colors: &["white", "black", "pink"], brand: "Skechers", photo: "photo-1549298916-b41d501d3772" },
    SeedProduct { name: "Skechers Go Walk", price: 6999, discount_price: 4999, discount_percent: 29, rating_tenths: 43, rating_count: 189, is_hot: false, colors: &["gray", "blue"], brand: "Skechers", photo: "photo-1600185365483-26d7a4cc7519" },
    SeedProduct { name: "Nike Air Force 1", price: 8999, discount_price: 6999, discount_percent: 22, rating_tenths: 45, rating_count: 312, is_hot: true, colors: &["white", "black"], brand: "Nike", photo: "photo-1595950653106-6c9ebd614d3a" },
    SeedProduct { name: "Nike React Element 55", price: 10999, discount_price: 8499, discount_percent: 23, rating_tenths: 41, rating_count: 145, is_hot: false, colors: &["black", "white", "orange"], brand: "Nike", photo: "photo-1606107557195-0e29a4b5b4aa" },
    SeedProduct { name: "Adidas Gazelle", price: 7999, discount_price: 5999, discount_percent: 25, rating_tenths: 42, rating_count: 178, is_hot: false, colors: &["blue", "red", "green"], brand: "Adidas", photo: "photo-1551107696-a4b0c5a0d9a2" },
    SeedProduct { name: "Adidas Superstar", price: 8999, discount_price: 6799, discount_percent: 24, rating_tenths: 44, rating_count: 267, is_hot: true, colors: &["white", "black", "gold"], brand: "Adidas", photo: "photo-1460353581641-37baddab0fa2" },
    SeedProduct { name: "New Balance 990v5", price: 16999, discount_price: 12999, discount_percent: 24, rating_tenths: 46, rating_count: 89, is_hot: true, colors: &["gray", "navy"], brand: "Actions", photo: "photo-1549298916-b41d501d3772" },
    SeedProduct { name: "Reebok Classic Leather", price: 6999, discount_price: 4999, discount_percent: 29, rating_tenths: 40, rating_count: 134, is_hot: false, colors: &["white", "black", "brown"], brand: "Actions", photo: "photo-1600185365483-26d7a4cc7519" },
    SeedProduct { name: "Puma Suede Classic", price: 7999, discount_price: 5799, discount_percent: 28, rating_tenths: 42, rating_count: 167, is_hot: false, colors: &["blue", "red", "black"], brand: "Actions", photo: "photo-1595950653106-6c9ebd614d3a" },
    SeedProduct { name: "Converse One Star", price: 5999, discount_price: 4299, discount_percent: 28, rating_tenths: 41, rating_count: 98, is_hot: false, colors: &["black", "white", "yellow"], brand: "All Stars", photo: "photo-1606107557195-0e29a4b5b4aa" },
    SeedProduct { name: "Vans Sk8-Hi", price: 6999, discount_price: 5499, discount_percent: 21, rating_tenths: 43, rating_count: 156, is_hot: false, colors: &["black", "white", "red"], brand: "Vans", photo: "photo-1551107696-a4b0c5a0d9a2" },
];

/// The sample sneaker catalog, each product with a freshly generated id.
pub fn sample_products() -> Vec<Product> {
    SEED.iter()
        .map(|seed| Product {
            id: ProductId::generate(),
            name: seed.name.to_string(),
            price: Money::from_major(seed.price),
            discount_price: Some(Money::from_major(seed.discount_price)),
            discount_percent: Some(seed.discount_percent),
            rating_value: Rating::from_tenths(seed.rating_tenths).unwrap_or_default(),
            rating_count: seed.rating_count,
            is_hot: seed.is_hot,
            colors: seed.colors.iter().map(|c| c.to_string()).collect(),
            category: "sneakers".to_string(),
            brand: seed.brand.to_string(),
            image_url: format!("{}/{}?{}", IMAGE_BASE, seed.photo, IMAGE_PARAMS),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_is_well_formed() {
        let products = sample_products();
        assert_eq!(products.len(), 24);
        for product in &products {
            assert!(!product.name.is_empty());
            assert!(product.effective_price() <= product.price);
            assert!(!product.colors.is_empty());
        }
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let products = sample_products();
        let ids: std::collections::HashSet<_> = products.iter().map(|p| &p.id).collect();
        assert_eq!(ids.len(), products.len());
    }
}
