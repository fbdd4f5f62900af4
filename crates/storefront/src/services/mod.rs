//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Demo-directory authentication and the session lifecycle

pub mod auth;
