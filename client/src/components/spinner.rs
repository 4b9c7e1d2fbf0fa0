//! Loading indicator shown while the catalog is being fetched.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner">
            <div class="spinner__ring" role="status"></div>
            <span class="spinner__label">"Carregando Produtos..."</span>
        </div>
    }
}
