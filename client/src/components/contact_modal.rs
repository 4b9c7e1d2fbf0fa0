//! Slide-in contact panel with the company's phone, email, and address.

use cart::CartStore;
use leptos::prelude::*;

use crate::components::icons::CloseIcon;
use crate::components::shopping_cart::panel_class;

pub const CONTACT_PHONE: &str = "(99) 98813-0000";
pub const CONTACT_EMAIL: &str = "chagasviana@hotmail.com";
pub const CONTACT_STREET: &str = "Rua Alto da Cruz, 3697";
pub const CONTACT_CITY: &str = "Caxias - MA";

#[component]
pub fn ContactModal() -> impl IntoView {
    let store = expect_context::<RwSignal<CartStore>>();

    let is_open = move || store.with(|s| s.panels().contact_open);
    let close = move |_| store.update(CartStore::close_contact);

    view! {
        <div class=move || panel_class("panel-backdrop", is_open()) aria-hidden="true" on:click=close></div>
        <aside class=move || panel_class("side-panel", is_open()) aria-label="Contato">
            <div class="side-panel__header">
                <h2 class="side-panel__title">"Entre em Contato"</h2>
                <button class="side-panel__close" aria-label="Fechar contato" on:click=close>
                    <CloseIcon/>
                </button>
            </div>
            <div class="side-panel__body contact-list">
                <div class="contact-list__entry">
                    <h3>"Telefone"</h3>
                    <p>
                        <a href=format!("tel:{}", CONTACT_PHONE.replace(|c: char| !c.is_ascii_digit(), ""))>
                            {CONTACT_PHONE}
                        </a>
                    </p>
                </div>
                <div class="contact-list__entry">
                    <h3>"Email"</h3>
                    <p>
                        <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                    </p>
                </div>
                <div class="contact-list__entry">
                    <h3>"Endereço"</h3>
                    <p>{CONTACT_STREET}</p>
                    <p>{CONTACT_CITY}</p>
                </div>
            </div>
        </aside>
    }
}
