//! Page-level route components.

pub mod storefront;
