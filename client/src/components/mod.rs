//! Presentation components.
//!
//! Each reads the `RwSignal<CartStore>` from context and turns clicks into
//! store operations. None of them hold state of their own.

pub mod contact_modal;
pub mod footer;
pub mod header;
pub mod icons;
pub mod product_card;
pub mod product_list;
pub mod shopping_cart;
pub mod spinner;
