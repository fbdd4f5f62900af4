//! HTTP middleware and extractors for the storefront.

pub mod auth;

pub use auth::{OptionalAuth, RequireAuth, RequireVendor};
