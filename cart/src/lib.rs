//! Storefront domain shared by the `storefront` server and the `client` UI.
//!
//! This crate owns the product and cart model plus the single state container
//! (`CartStore`) that every storefront intent is funneled through. It performs
//! no I/O of its own: the product list comes from a [`CatalogSource`]
//! supplied by the caller.

pub mod contents;
pub mod load;
pub mod price;
pub mod product;
pub mod store;

pub use contents::{Cart, CartItem};
pub use load::{CatalogError, CatalogSource, LOAD_FAILED_MESSAGE, LoadState, LoadTicket};
pub use price::format_price;
pub use product::{Product, RESERVED_PRODUCT_ID, reserved_product};
pub use store::{CartStore, PanelState};
