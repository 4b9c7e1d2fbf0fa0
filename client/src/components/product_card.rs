//! Card for one catalog product.

use cart::{CartStore, Product, format_price};
use leptos::prelude::*;

use crate::components::icons::PlusIcon;

const CARD_IMAGE_WIDTH: u32 = 400;
const CARD_IMAGE_HEIGHT: u32 = 300;

/// Image, name, description, price with unit, and an "Adicionar" button that
/// adds the product to the cart (which also opens the cart panel).
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let store = expect_context::<RwSignal<CartStore>>();

    let image = product.image_url(CARD_IMAGE_WIDTH, CARD_IMAGE_HEIGHT);
    let price = format_price(product.price);
    let add_label = format!("Adicionar {} ao carrinho", product.name);
    let name = product.name.clone();
    let description = product.description.clone();
    let unit = (!product.unit.is_empty()).then(|| product.unit.clone());

    let on_add = move |_| {
        let product = product.clone();
        store.update(move |s| s.add_to_cart(product));
    };

    view! {
        <article class="product-card">
            <div class="product-card__media">
                <img class="product-card__image" src=image alt=name.clone()/>
            </div>
            <div class="product-card__body">
                <h3 class="product-card__name">{name}</h3>
                <p class="product-card__description">{description}</p>
                <div class="product-card__footer">
                    <p class="product-card__price">
                        {price}
                        {unit.map(|u| view! { <span class="product-card__unit">{u}</span> })}
                    </p>
                    <button class="btn btn--primary product-card__add" aria-label=add_label on:click=on_add>
                        <PlusIcon/>
                        "Adicionar"
                    </button>
                </div>
            </div>
        </article>
    }
}
