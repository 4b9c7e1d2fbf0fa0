//! Networking: the HTTP-backed catalog source.

pub mod api;
