//! CLI command implementations.

pub mod config;
pub mod filters;
pub mod product;
pub mod products;
pub mod request;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use storefront_catalog::{search::QuerySpec, search::SortOption, Money};

fn parse_sort(value: &str) -> Result<SortOption, String> {
    value.parse().map_err(|e: storefront_catalog::CatalogError| e.to_string())
}

fn parse_money(value: &str) -> Result<Money, String> {
    value.parse().map_err(|e: storefront_catalog::CatalogError| e.to_string())
}

/// Product filter flags shared by several commands.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Only products in this category.
    #[arg(long)]
    pub category: Option<String>,

    /// Only these brands (repeat or comma-separate).
    #[arg(short, long, value_delimiter = ',')]
    pub brand: Vec<String>,

    /// Only products having any of these colors (repeat or comma-separate).
    #[arg(long, value_delimiter = ',')]
    pub color: Vec<String>,

    /// Minimum effective price, inclusive.
    #[arg(long, value_parser = parse_money)]
    pub min_price: Option<Money>,

    /// Maximum effective price, inclusive.
    #[arg(long, value_parser = parse_money)]
    pub max_price: Option<Money>,
}

impl FilterArgs {
    /// Whether any filter flag was given.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.brand.is_empty()
            && self.color.is_empty()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// Overlay the given flags onto `spec`.
    pub fn apply(&self, mut spec: QuerySpec) -> QuerySpec {
        if let Some(category) = &self.category {
            spec.category = Some(category.clone());
        }
        if !self.brand.is_empty() {
            spec.brands = self.brand.clone();
        }
        if !self.color.is_empty() {
            spec.colors = self.color.clone();
        }
        if self.min_price.is_some() {
            spec.min_price = self.min_price;
        }
        if self.max_price.is_some() {
            spec.max_price = self.max_price;
        }
        spec
    }
}

/// Arguments for the products command.
#[derive(Args, Debug)]
pub struct ProductsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Sort order: name-asc, name-desc, price-asc, price-desc, popularity-desc.
    #[arg(short, long, value_parser = parse_sort)]
    pub sort: Option<SortOption>,

    /// Page number (1-indexed).
    #[arg(short, long)]
    pub page: Option<i64>,

    /// Items per page.
    #[arg(short, long)]
    pub limit: Option<i64>,

    /// URL query string, as sent to /api/products (flags take precedence).
    #[arg(short, long)]
    pub query: Option<String>,
}

impl ProductsArgs {
    /// Build the query from `--query`, then the individual flags.
    pub fn to_spec(&self, default_limit: i64) -> Result<QuerySpec> {
        let query = self.query.as_deref().unwrap_or_default();
        let query = query.strip_prefix('?').unwrap_or(query);
        // a later `limit` in the user's query replaces the configured one
        let mut spec = QuerySpec::from_query_string(&format!("limit={}&{}", default_limit, query))
            .with_context(|| format!("Invalid --query: {}", query))?;

        spec = self.filter.apply(spec);
        if let Some(sort) = self.sort {
            spec.sort_by = Some(sort);
        }
        if let Some(page) = self.page {
            spec.page = page;
        }
        if let Some(limit) = self.limit {
            spec.limit = limit;
        }
        Ok(spec)
    }
}

/// Arguments for the product command.
#[derive(Args, Debug)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the filters command.
#[derive(Args, Debug)]
pub struct FiltersArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Count only products matching the filter flags.
    #[arg(long)]
    pub scoped: bool,
}

/// Arguments for the request command.
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Request target, e.g. "/api/products?brand=Nike".
    pub target: String,

    /// HTTP method.
    #[arg(short = 'X', long, default_value = "GET")]
    pub method: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products_args(query: Option<&str>) -> ProductsArgs {
        ProductsArgs {
            filter: FilterArgs::default(),
            sort: None,
            page: None,
            limit: None,
            query: query.map(str::to_string),
        }
    }

    #[test]
    fn test_default_spec_uses_config_limit() {
        let spec = products_args(None).to_spec(24).unwrap();
        assert_eq!(spec.limit, 24);
        assert_eq!(spec.page, 1);
    }

    #[test]
    fn test_query_string_then_flags() {
        let mut args = products_args(Some("brand=Nike&sortBy=name-asc&limit=5"));
        args.sort = Some(SortOption::PriceDesc);
        args.filter.color = vec!["red".to_string()];

        let spec = args.to_spec(24).unwrap();
        assert_eq!(spec.brands, vec!["Nike"]);
        assert_eq!(spec.colors, vec!["red"]);
        assert_eq!(spec.sort_by, Some(SortOption::PriceDesc));
        assert_eq!(spec.limit, 5);
    }

    #[test]
    fn test_query_without_limit_uses_config_limit() {
        let spec = products_args(Some("page=2")).to_spec(30).unwrap();
        assert_eq!((spec.page, spec.limit), (2, 30));
    }

    #[test]
    fn test_bad_query_string() {
        assert!(products_args(Some("sortBy=nope")).to_spec(12).is_err());
    }

    #[test]
    fn test_value_parsers() {
        assert_eq!(parse_sort("price-asc"), Ok(SortOption::PriceAsc));
        assert!(parse_sort("cheap").is_err());
        assert_eq!(parse_money("49.5"), Ok(Money::new(4950)));
    }
}
