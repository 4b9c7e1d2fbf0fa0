//! Slide-in cart panel.

use cart::{CartItem, CartStore, format_price};
use leptos::prelude::*;

use crate::components::icons::{CloseIcon, TrashIcon};

const LINE_IMAGE_SIZE: u32 = 100;

/// CSS class for a slide-in panel, open or closed.
pub(crate) fn panel_class(base: &str, open: bool) -> String {
    if open { format!("{base} {base}--open") } else { base.to_owned() }
}

/// Cart side panel: one line per item with quantity controls and a remove
/// button, then the subtotal and the (not yet available) checkout button.
#[component]
pub fn ShoppingCart() -> impl IntoView {
    let store = expect_context::<RwSignal<CartStore>>();

    let is_open = move || store.with(|s| s.panels().cart_open);
    let is_empty = move || store.with(|s| s.cart().is_empty());
    let items = move || store.with(|s| s.cart().items().to_vec());
    let subtotal = move || format_price(store.with(CartStore::subtotal));
    let close = move |_| store.update(CartStore::close_cart);

    view! {
        <div class=move || panel_class("panel-backdrop", is_open()) on:click=close></div>
        <aside class=move || panel_class("side-panel", is_open()) aria-label="Carrinho de compras">
            <div class="side-panel__header">
                <h2 class="side-panel__title">"Seu Carrinho"</h2>
                <button class="side-panel__close" aria-label="Fechar carrinho" on:click=close>
                    <CloseIcon/>
                </button>
            </div>

            <Show
                when=move || !is_empty()
                fallback=move || {
                    view! {
                        <div class="side-panel__empty">
                            <p>"Seu carrinho está vazio."</p>
                            <button class="btn btn--primary" on:click=close>
                                "Continuar Comprando"
                            </button>
                        </div>
                    }
                }
            >
                <div class="side-panel__body">
                    {move || {
                        items()
                            .into_iter()
                            .map(|item| view! { <CartLine item/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <div class="side-panel__footer">
                    <div class="cart-summary">
                        <span>"Subtotal"</span>
                        <span>{subtotal}</span>
                    </div>
                    <button class="btn btn--primary btn--block" disabled=true>
                        "Finalizar Compra"
                    </button>
                </div>
            </Show>
        </aside>
    }
}

/// One cart line.
#[component]
fn CartLine(item: CartItem) -> impl IntoView {
    let store = expect_context::<RwSignal<CartStore>>();

    let image = item.product.image_url(LINE_IMAGE_SIZE, LINE_IMAGE_SIZE);
    let unit_price = format_price(item.product.price);
    let quantity = i64::from(item.quantity);
    let name = item.product.name.clone();
    let id = item.product.id.clone();

    let decrement = {
        let id = id.clone();
        move |_| store.update(|s| s.update_quantity(&id, quantity - 1))
    };
    let increment = {
        let id = id.clone();
        move |_| store.update(|s| s.update_quantity(&id, quantity + 1))
    };
    let remove = move |_| store.update(|s| s.remove_from_cart(&id));

    view! {
        <div class="cart-line">
            <img class="cart-line__image" src=image alt=name.clone()/>
            <div class="cart-line__info">
                <h3 class="cart-line__name">{name}</h3>
                <p class="cart-line__price">{unit_price}</p>
                <div class="quantity-control">
                    <button class="quantity-control__button" aria-label="Diminuir quantidade" on:click=decrement>
                        "-"
                    </button>
                    <span class="quantity-control__value">{quantity}</span>
                    <button class="quantity-control__button" aria-label="Aumentar quantidade" on:click=increment>
                        "+"
                    </button>
                </div>
            </div>
            <button class="cart-line__remove" aria-label="Remover item" on:click=remove>
                <TrashIcon/>
            </button>
        </div>
    }
}

#[cfg(test)]
#[path = "shopping_cart_test.rs"]
mod shopping_cart_test;
