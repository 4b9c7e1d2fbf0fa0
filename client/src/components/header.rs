//! Sticky page header with the brand and the cart button.

use cart::CartStore;
use leptos::prelude::*;

use crate::components::icons::BagIcon;

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// Text for the cart badge, or `None` when the cart is empty.
pub fn badge_label(item_count: u64) -> Option<String> {
    (item_count > 0).then(|| item_count.to_string())
}

/// Brand mark on the left, cart button with an item-count badge on the right.
#[component]
pub fn Header() -> impl IntoView {
    let store = expect_context::<RwSignal<CartStore>>();

    let badge = move || store.with(|s| badge_label(s.item_count()));

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <div class="site-header__brand">
                    <span class="site-header__mark">"C"</span>
                    <span class="site-header__name">"Chagas Representações"</span>
                </div>
                <button
                    class="site-header__cart"
                    aria-label="Abrir carrinho de compras"
                    on:click=move |_| store.update(CartStore::open_cart)
                >
                    <BagIcon/>
                    {move || badge().map(|label| view! { <span class="site-header__badge">{label}</span> })}
                </button>
            </div>
        </header>
    }
}
