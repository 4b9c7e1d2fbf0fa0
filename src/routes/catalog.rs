//! Catalog route: serves a freshly generated product list.
//!
//! The list is returned exactly as generated. The launch product is added by
//! the browser's `CartStore`, so it is never duplicated here.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use cart::Product;
use serde::Serialize;
use tracing::warn;

use crate::services::catalog::{self, CatalogGenError};
use crate::state::AppState;

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

/// `GET /api/catalog`: generate and return the product list.
pub async fn get_catalog(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    match catalog::generate_catalog(&state).await {
        Ok(products) => Ok(Json(products)),
        Err(e) => {
            let status = catalog_error_to_status(&e);
            warn!(error = %e, %status, "catalog: request failed");
            Err((status, Json(ErrorBody { error: e.to_string() })))
        }
    }
}

pub(crate) fn catalog_error_to_status(err: &CatalogGenError) -> StatusCode {
    match err {
        CatalogGenError::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        CatalogGenError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        CatalogGenError::Llm(_) | CatalogGenError::MalformedCatalog(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
