//! Catalog loading: the source seam, its error type, and the load lifecycle.

use crate::product::Product;

/// Message shown to visitors when the catalog cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str =
    "Desculpe, não foi possível carregar nossos produtos. Por favor, tente novamente mais tarde.";

/// Errors a [`CatalogSource`] can fail with.
///
/// These stay diagnostic: visitors only ever see [`LOAD_FAILED_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("catalog request failed: {0}")]
    Request(String),

    /// The catalog endpoint answered with a non-success status.
    #[error("catalog request returned status {status}")]
    Status { status: u16 },

    /// The response was not a JSON list of products.
    #[error("catalog response parse failed: {0}")]
    Parse(String),

    /// No catalog source is available in this environment.
    #[error("catalog source unavailable")]
    Unavailable,
}

/// Produces the product list for one load cycle.
///
/// Futures are not required to be `Send`: the browser implementation runs on
/// the single-threaded WASM executor.
#[async_trait::async_trait(?Send)]
pub trait CatalogSource {
    /// Fetch the current product list.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the products cannot be retrieved or the
    /// response is not a list of products.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Status of the most recent catalog fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Vec<Product>),
    Failed(String),
}

impl LoadState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded products, empty unless the state is `Loaded`.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Loaded(products) => products,
            _ => &[],
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Handle for one load attempt, returned by `CartStore::begin_load`.
///
/// Only the ticket of the most recent attempt may complete the load; older
/// tickets are stale and their results are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(pub(crate) u64);

impl LoadTicket {
    #[must_use]
    pub fn seq(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
#[path = "load_test.rs"]
mod tests;
