//! REST client for the storefront server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the catalog is only fetched from the browser, so the
//! source reports [`CatalogError::Unavailable`].

#![allow(clippy::unused_async)]

use async_trait::async_trait;
use cart::{CatalogError, CatalogSource, Product};

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Endpoint serving the generated product list.
pub const CATALOG_ENDPOINT: &str = "/api/catalog";

/// Catalog source backed by `GET /api/catalog`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiCatalogSource;

#[async_trait(?Send)]
impl CatalogSource for ApiCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(CATALOG_ENDPOINT)
                .send()
                .await
                .map_err(|e| CatalogError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(CatalogError::Status { status: resp.status() });
            }
            let body = resp.text().await.map_err(|e| CatalogError::Request(e.to_string()))?;
            parse_catalog(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(CatalogError::Unavailable)
        }
    }
}

/// Parse a catalog response body into products.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] unless `body` is a JSON array of products.
pub fn parse_catalog(body: &str) -> Result<Vec<Product>, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))
}
