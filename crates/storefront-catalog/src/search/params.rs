//! URL query-string binding for [`QuerySpec`].
//!
//! Accepted keys: `category`, `brand` (alias `brands`), `colors` (alias
//! `color`), `minPrice`, `maxPrice`, `sortBy`, `page`, `limit`. List
//! values are comma-separated and may also be repeated. Empty values are
//! treated as absent and unknown keys are ignored.

use super::query::{QuerySpec, SortOption};
use crate::error::CatalogError;
use crate::money::{Money, Rounding};

impl QuerySpec {
    /// Parse a URL query string (with or without the leading `?`).
    pub fn from_query_string(query: &str) -> Result<Self, CatalogError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut spec = QuerySpec::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "category" => spec.category = Some(value.to_string()),
                "brand" | "brands" => spec.brands.extend(split_list(value)),
                "colors" | "color" => spec.colors.extend(split_list(value)),
                "minPrice" => spec.min_price = Some(parse_price("minPrice", value, Rounding::Up)?),
                "maxPrice" => spec.max_price = Some(parse_price("maxPrice", value, Rounding::Down)?),
                "sortBy" => spec.sort_by = Some(value.parse::<SortOption>()?),
                "page" => spec.page = parse_int("page", value)?,
                "limit" => spec.limit = parse_int("limit", value)?,
                other => tracing::trace!(key = other, "ignoring unknown query parameter"),
            }
        }

        Ok(spec)
    }

    /// Render as a URL query string, omitting defaults.
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        if let Some(category) = &self.category {
            out.append_pair("category", category);
        }
        if !self.brands.is_empty() {
            out.append_pair("brand", &self.brands.join(","));
        }
        if !self.colors.is_empty() {
            out.append_pair("colors", &self.colors.join(","));
        }
        if let Some(min) = self.min_price {
            out.append_pair("minPrice", &min.to_decimal_string());
        }
        if let Some(max) = self.max_price {
            out.append_pair("maxPrice", &max.to_decimal_string());
        }
        if let Some(sort) = self.sort_by {
            out.append_pair("sortBy", sort.as_str());
        }
        if self.page != 1 {
            out.append_pair("page", &self.page.to_string());
        }
        if self.limit != super::query::DEFAULT_LIMIT {
            out.append_pair("limit", &self.limit.to_string());
        }
        out.finish()
    }
}

fn split_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Bounds finer than a cent are rounded inward: up for a minimum, down for
/// a maximum.
fn parse_price(name: &str, value: &str, rounding: Rounding) -> Result<Money, CatalogError> {
    let price = Money::parse_rounded(value, rounding)
        .map_err(|_| CatalogError::invalid_parameter(name, format!("'{}' is not a price", value)))?;
    if price.is_negative() {
        return Err(CatalogError::invalid_parameter(name, "must not be negative"));
    }
    Ok(price)
}

fn parse_int(name: &str, value: &str) -> Result<i64, CatalogError> {
    value
        .parse()
        .map_err(|_| CatalogError::invalid_parameter(name, format!("'{}' is not an integer", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_default() {
        assert_eq!(QuerySpec::from_query_string("").unwrap(), QuerySpec::default());
        assert_eq!(QuerySpec::from_query_string("?").unwrap(), QuerySpec::default());
    }

    #[test]
    fn test_full_query() {
        let spec = QuerySpec::from_query_string(
            "?category=sneakers&brand=Nike,Vans&colors=red&minPrice=1000&maxPrice=9999.50&sortBy=price-desc&page=2&limit=6",
        )
        .unwrap();

        assert_eq!(spec.category.as_deref(), Some("sneakers"));
        assert_eq!(spec.brands, vec!["Nike", "Vans"]);
        assert_eq!(spec.colors, vec!["red"]);
        assert_eq!(spec.min_price, Some(Money::from_major(1000)));
        assert_eq!(spec.max_price, Some(Money::new(999_950)));
        assert_eq!(spec.sort_by, Some(SortOption::PriceDesc));
        assert_eq!((spec.page, spec.limit), (2, 6));
    }

    #[test]
    fn test_percent_encoded_and_repeated_values() {
        let spec = QuerySpec::from_query_string("brand=All%20Stars&brand=Nike&colors=red%2C%20blue").unwrap();
        assert_eq!(spec.brands, vec!["All Stars", "Nike"]);
        assert_eq!(spec.colors, vec!["red", "blue"]);
    }

    #[test]
    fn test_empty_values_are_absent() {
        let spec = QuerySpec::from_query_string("brand=&minPrice=&sortBy=&page=").unwrap();
        assert_eq!(spec, QuerySpec::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = QuerySpec::from_query_string("sortBy=newest").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidParameter { ref name, .. } if name == "sortBy"));

        let err = QuerySpec::from_query_string("minPrice=cheap").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidParameter { ref name, .. } if name == "minPrice"));

        assert!(QuerySpec::from_query_string("maxPrice=-5").is_err());
        assert!(QuerySpec::from_query_string("page=two").is_err());
        assert!(QuerySpec::from_query_string("limit=1.5").is_err());
    }

    #[test]
    fn test_fine_price_bounds_round_inward() {
        let spec = QuerySpec::from_query_string("minPrice=100.555&maxPrice=200.555").unwrap();
        assert_eq!(spec.min_price, Some(Money::new(10_056)));
        assert_eq!(spec.max_price, Some(Money::new(20_055)));

        let spec = QuerySpec::from_query_string("minPrice=1e3&maxPrice=2.5e3").unwrap();
        assert_eq!(spec.min_price, Some(Money::from_major(1000)));
        assert_eq!(spec.max_price, Some(Money::from_major(2500)));
    }

    #[test]
    fn test_zero_page_is_accepted_and_clamped_later() {
        let spec = QuerySpec::from_query_string("page=0&limit=0").unwrap();
        assert_eq!(spec.effective_page(), 1);
        assert_eq!(spec.effective_limit(), 1);
    }

    #[test]
    fn test_to_query_string_parses_back() {
        let spec = QuerySpec::new()
            .with_brands(["All Stars"])
            .with_price_range(None, Some(Money::from_major(5000)))
            .with_sort(SortOption::NameAsc)
            .with_pagination(3, 12);

        let rendered = spec.to_query_string();
        assert_eq!(rendered, "brand=All+Stars&maxPrice=5000.00&sortBy=name-asc&page=3");
        assert_eq!(QuerySpec::from_query_string(&rendered).unwrap(), spec);
    }
}
