//! HTTP API: storefront catalog, delivery estimates and status lookup.

pub mod app;
pub mod config;
