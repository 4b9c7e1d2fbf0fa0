//! Responsive grid of product cards.

use cart::Product;
use leptos::prelude::*;

use crate::components::product_card::ProductCard;

#[component]
pub fn ProductList(products: Vec<Product>) -> impl IntoView {
    view! {
        <div class="product-list">
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product/> })
                .collect::<Vec<_>>()}
        </div>
    }
}
