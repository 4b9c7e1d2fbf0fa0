//! Root application component with routing and the store context.

use cart::CartStore;
use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::storefront::StorefrontPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared `CartStore` signal and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = RwSignal::new(CartStore::new());
    provide_context(store);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Chagas Representações"/>
        <Meta
            name="description"
            content="Pisos, porcelanatos, azulejos, isopor e formas para construção."
        />

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=StorefrontPage/>
            </Routes>
        </Router>
    }
}
