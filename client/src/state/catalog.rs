//! Catalog loading driven from the UI.
//!
//! The store decides ordering: `begin_load` hands out a ticket and
//! `finish_load` ignores any completion whose ticket has been superseded, so
//! pressing "Tentar Novamente" while a fetch is in flight is safe.

use cart::CartStore;
use leptos::prelude::*;

/// Start a catalog load and apply its result to `store` when it completes.
///
/// Only does network work in the browser. During SSR the store simply stays
/// in its loading state.
pub fn reload_catalog(store: RwSignal<CartStore>) {
    let Some(ticket) = store.try_update(CartStore::begin_load) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use cart::CatalogSource;

        let result = crate::net::api::ApiCatalogSource.fetch_products().await;
        // The page may have been torn down while the request was in flight.
        let _ = store.try_update(|s| s.finish_load(ticket, result));
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = ticket;
}
