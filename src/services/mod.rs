//! Server-side services.

pub mod catalog;
