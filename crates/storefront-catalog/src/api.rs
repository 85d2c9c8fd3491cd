//! HTTP-shaped request handlers for the catalog endpoints.
//!
//! The handlers take an already-parsed request and return a status code
//! with a JSON body, so any server (or the CLI) can host them.

use crate::catalog::CatalogStore;
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::search::QuerySpec;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// An incoming request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRequest {
    /// HTTP method, upper-case.
    pub method: String,
    /// Path without the query string.
    pub path: String,
    /// Raw query string without the leading `?`.
    pub query: String,
}

impl ApiRequest {
    /// Build a request from a method and a request target such as
    /// `/api/products?brand=Nike`.
    pub fn new(method: impl AsRef<str>, target: &str) -> Self {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        Self {
            method: method.as_ref().to_ascii_uppercase(),
            path: path.to_string(),
            query: query.to_string(),
        }
    }

    /// Shorthand for a GET request.
    pub fn get(target: &str) -> Self {
        Self::new("GET", target)
    }
}

/// A handler response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    /// JSON body; `Value::Null` means no body.
    pub body: Value,
}

impl ApiResponse {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn message(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "message": message }),
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

enum Route<'a> {
    Products,
    Product(&'a str),
    Filters,
}

fn route(path: &str) -> Option<Route<'_>> {
    let path = path.trim_end_matches('/');
    match path {
        "/api/products" => Some(Route::Products),
        "/api/filters" => Some(Route::Filters),
        _ => path
            .strip_prefix("/api/products/")
            .filter(|id| !id.is_empty() && !id.contains('/'))
            .map(Route::Product),
    }
}

/// Dispatch a request against the store.
pub fn handle(store: &CatalogStore, request: &ApiRequest) -> ApiResponse {
    let Some(route) = route(&request.path) else {
        return ApiResponse::message(404, "Not found");
    };

    let response = match request.method.as_str() {
        "OPTIONS" => ApiResponse {
            status: 200,
            body: Value::Null,
        },
        "GET" => match route {
            Route::Products => list_products(store, &request.query),
            Route::Product(id) => get_product(store, id),
            Route::Filters => get_filters(store),
        },
        _ => ApiResponse::message(405, "Method not allowed"),
    };

    tracing::debug!(
        method = %request.method,
        path = %request.path,
        status = response.status,
        "api request"
    );
    response
}

fn list_products(store: &CatalogStore, query: &str) -> ApiResponse {
    let spec = match QuerySpec::from_query_string(query) {
        Ok(spec) => spec,
        Err(err) => return invalid_query(err),
    };

    let result = store.query(&spec);
    match serde_json::to_value(&result.items) {
        Ok(products) => ApiResponse::ok(json!({
            "products": products,
            "total": result.total,
        })),
        Err(err) => internal_error(err.into()),
    }
}

fn get_product(store: &CatalogStore, id: &str) -> ApiResponse {
    match store.get_by_id(&ProductId::new(id)) {
        Ok(product) => match serde_json::to_value(&product) {
            Ok(body) => ApiResponse::ok(body),
            Err(err) => internal_error(err.into()),
        },
        Err(err) if err.is_not_found() => ApiResponse::message(404, "Product not found"),
        Err(err) => internal_error(err),
    }
}

fn get_filters(store: &CatalogStore) -> ApiResponse {
    let summary = store.facets();
    ApiResponse::ok(json!({
        "brands": summary.brand_counts,
        "colors": summary.color_counts,
        "categories": summary.category_counts,
    }))
}

fn invalid_query(err: CatalogError) -> ApiResponse {
    let detail = match &err {
        CatalogError::InvalidParameter { name, message } => {
            json!({ "field": name, "message": message })
        }
        other => json!({ "message": other.to_string() }),
    };
    ApiResponse {
        status: 400,
        body: json!({
            "message": "Invalid query parameters",
            "errors": [detail],
        }),
    }
}

fn internal_error(err: CatalogError) -> ApiResponse {
    tracing::error!(error = %err, "api handler failed");
    ApiResponse::message(500, "Internal server error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;

    fn store() -> CatalogStore {
        CatalogStore::new(vec![
            Product::new("Runner", Money::from_major(100), "sneakers", "Nike")
                .with_id("p1")
                .with_colors(["red"]),
            Product::new("Skater", Money::from_major(50), "sneakers", "Vans")
                .with_id("p2")
                .with_colors(["black", "red"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_request_target_split() {
        let request = ApiRequest::new("get", "/api/products?brand=Nike");
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/api/products");
        assert_eq!(request.query, "brand=Nike");
    }

    #[test]
    fn test_list_products() {
        let response = handle(&store(), &ApiRequest::get("/api/products?sortBy=price-asc"));
        assert_eq!(response.status, 200);
        assert_eq!(response.body["total"], 2);
        assert_eq!(response.body["products"][0]["id"], "p2");
        assert_eq!(response.body["products"][0]["price"], "50.00");
    }

    #[test]
    fn test_list_products_bad_query() {
        let response = handle(&store(), &ApiRequest::get("/api/products?sortBy=random"));
        assert_eq!(response.status, 400);
        assert_eq!(response.body["message"], "Invalid query parameters");
        assert_eq!(response.body["errors"][0]["field"], "sortBy");
    }

    #[test]
    fn test_get_product() {
        let response = handle(&store(), &ApiRequest::get("/api/products/p1"));
        assert_eq!(response.status, 200);
        assert_eq!(response.body["name"], "Runner");

        let response = handle(&store(), &ApiRequest::get("/api/products/nope"));
        assert_eq!(response.status, 404);
        assert_eq!(response.body["message"], "Product not found");
    }

    #[test]
    fn test_filters() {
        let response = handle(&store(), &ApiRequest::get("/api/filters"));
        assert_eq!(response.status, 200);
        assert_eq!(response.body["brands"]["Nike"], 1);
        assert_eq!(response.body["colors"]["red"], 2);
        assert_eq!(response.body["categories"]["sneakers"], 2);
    }

    #[test]
    fn test_methods_and_unknown_paths() {
        let store = store();
        let options = handle(&store, &ApiRequest::new("OPTIONS", "/api/products"));
        assert_eq!(options.status, 200);
        assert!(options.body.is_null());

        let post = handle(&store, &ApiRequest::new("POST", "/api/products"));
        assert_eq!(post.status, 405);
        assert_eq!(post.body["message"], "Method not allowed");

        let missing = handle(&store, &ApiRequest::get("/api/orders"));
        assert_eq!(missing.status, 404);
        assert_eq!(missing.body["message"], "Not found");
    }
}
