//! The single storefront page: hero, catalog, panels, and footer.

use cart::{CartStore, LoadState};
use leptos::prelude::*;

use crate::components::contact_modal::ContactModal;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::product_list::ProductList;
use crate::components::shopping_cart::ShoppingCart;
use crate::components::spinner::Spinner;
use crate::state::catalog::reload_catalog;

/// Storefront page. Starts the catalog load once it is mounted in the browser.
#[component]
pub fn StorefrontPage() -> impl IntoView {
    let store = expect_context::<RwSignal<CartStore>>();

    Effect::new(move || reload_catalog(store));

    let load = Memo::new(move |_| store.with(|s| s.load_state().clone()));

    let catalog = move || match load.get() {
        LoadState::Loading => view! {
            <div class="storefront__status">
                <Spinner/>
            </div>
        }
        .into_any(),
        LoadState::Failed(message) => view! {
            <div class="storefront__error">
                <p class="storefront__error-title">"Ocorreu um Erro"</p>
                <p>{message}</p>
                <button class="btn btn--primary" on:click=move |_| reload_catalog(store)>
                    "Tentar Novamente"
                </button>
            </div>
        }
        .into_any(),
        LoadState::Loaded(products) => view! { <ProductList products/> }.into_any(),
    };

    view! {
        <div class="storefront">
            <Header/>
            <main class="storefront__main">
                <section class="hero">
                    <h1 class="hero__title">"Chagas Representações"</h1>
                    <p class="hero__tagline">
                        "Mais de 25 anos de mercado, garantindo qualidade e confiança em cada produto."
                    </p>
                    <button class="btn btn--primary btn--large" on:click=move |_| store.update(CartStore::open_contact)>
                        "Entre em Contato"
                    </button>
                </section>
                {catalog}
            </main>
            <ShoppingCart/>
            <ContactModal/>
            <Footer/>
        </div>
    }
}
