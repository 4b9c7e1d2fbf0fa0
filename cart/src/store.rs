//! The storefront state container.
//!
//! DESIGN
//! ======
//! `CartStore` is the single owner of every piece of mutable storefront state:
//! the catalog load status, the cart, and which side panels are open. The UI
//! holds it in one reactive signal and only touches it through the named
//! operations below, so the invariants of `Cart` and `LoadState` cannot be
//! bypassed by ad-hoc field writes.
//!
//! LOAD ORDERING
//! =============
//! Every load attempt takes a `LoadTicket` carrying a monotonically increasing
//! sequence number. A completion is applied only when its ticket is still the
//! latest one, so a slow fetch that finishes after a newer retry cannot
//! overwrite the newer result. The last requested load wins.

use tracing::{debug, error};

use crate::contents::Cart;
use crate::load::{CatalogError, CatalogSource, LOAD_FAILED_MESSAGE, LoadState, LoadTicket};
use crate::product::{Product, reserved_product};

/// Open/closed flags for the side panels. Independent of cart contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    pub cart_open: bool,
    pub contact_open: bool,
}

/// Catalog, cart, and panel state for one storefront session.
#[derive(Clone, Debug, Default)]
pub struct CartStore {
    load: LoadState,
    cart: Cart,
    panels: PanelState,
    load_seq: u64,
}

impl CartStore {
    /// Fresh store: catalog loading, empty cart, panels closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // READS
    // =========================================================================

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.load.error_message()
    }

    /// Products of the current catalog; empty while loading or after failure.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.load.products()
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn panels(&self) -> PanelState {
        self.panels
    }

    /// Total units across the cart, recomputed on every call.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Unrounded cart subtotal, recomputed on every call.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.cart.subtotal()
    }

    // =========================================================================
    // CATALOG LOADING
    // =========================================================================

    /// Enter the loading state and hand out the ticket for this attempt.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_seq += 1;
        self.load = LoadState::Loading;
        LoadTicket(self.load_seq)
    }

    /// Apply the outcome of the attempt identified by `ticket`.
    ///
    /// On success the reserved launch product is prepended to the fetched
    /// list. On failure the visitor-facing message is stored and the
    /// underlying error is logged. The cart is never touched.
    ///
    /// Returns `false` without changing anything when `ticket` is stale.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<Product>, CatalogError>) -> bool {
        if ticket.0 != self.load_seq {
            debug!(ticket = ticket.0, latest = self.load_seq, "catalog: dropping stale load result");
            return false;
        }

        self.load = match result {
            Ok(fetched) => {
                let mut products = Vec::with_capacity(fetched.len() + 1);
                products.push(reserved_product());
                products.extend(fetched);
                debug!(count = products.len(), "catalog: loaded");
                LoadState::Loaded(products)
            }
            Err(e) => {
                error!(error = %e, "catalog: failed to fetch products");
                LoadState::Failed(LOAD_FAILED_MESSAGE.to_owned())
            }
        };
        true
    }

    /// Load the catalog from `source`, start to finish.
    ///
    /// Retrying is the caller's decision; nothing here retries on its own.
    pub async fn load_catalog<S>(&mut self, source: &S)
    where
        S: CatalogSource + ?Sized,
    {
        let ticket = self.begin_load();
        let result = source.fetch_products().await;
        self.finish_load(ticket, result);
    }

    // =========================================================================
    // CART INTENTS
    // =========================================================================

    /// Add one unit of `product` and open the cart panel.
    ///
    /// The product does not need to be part of the current catalog.
    pub fn add_to_cart(&mut self, product: Product) {
        let quantity = self.cart.add(product);
        debug!(quantity, "cart: item added");
        self.panels.cart_open = true;
    }

    /// Remove the line for `product_id`; unknown ids are ignored.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        if self.cart.remove(product_id) {
            debug!(%product_id, "cart: item removed");
        }
    }

    /// Set the quantity for an existing line. `quantity <= 0` removes it;
    /// unknown ids are ignored.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if self.cart.set_quantity(product_id, quantity) {
            debug!(%product_id, quantity, "cart: quantity updated");
        }
    }

    // =========================================================================
    // PANELS
    // =========================================================================

    pub fn open_cart(&mut self) {
        self.panels.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.panels.cart_open = false;
    }

    pub fn open_contact(&mut self) {
        self.panels.contact_open = true;
    }

    pub fn close_contact(&mut self) {
        self.panels.contact_open = false;
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
