//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server keeps no storefront data of its own: carts live in the browser.
//! It only holds what catalog generation needs.

use std::sync::Arc;

use crate::llm::LlmGenerate;
use crate::rate_limit::RateLimiter;
use crate::services::catalog::CatalogSettings;

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if the API key is not configured.
    pub llm: Option<Arc<dyn LlmGenerate>>,
    /// Window limiting how often the catalog is regenerated.
    pub rate_limiter: RateLimiter,
    pub catalog_settings: CatalogSettings,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmGenerate>>, rate_limiter: RateLimiter, catalog_settings: CatalogSettings) -> Self {
        Self { llm, rate_limiter, catalog_settings }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
