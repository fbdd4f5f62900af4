//! Town Basket Core - Shared types library.
//!
//! This crate provides common types used across all Town Basket components:
//! - `storefront` - Public-facing food-delivery site
//! - `integration-tests` - Router-level integration tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no timers. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
