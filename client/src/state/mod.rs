//! Reactive glue between Leptos signals and the `cart` store.

pub mod catalog;
