//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Root screen (loading gate, then the
//!                                 screen picked by the routing decision)
//! GET  /health                  - Health check (in main)
//! GET  /loading/progress        - Loading gate progress snapshot (JSON)
//!
//! # Auth
//! GET  /auth/login              - Login page
//! POST /auth/login              - Login action
//! POST /auth/logout             - Logout action
//!
//! # View selector
//! POST /view                    - Switch between home and dashboard
//!
//! # Vendor menu (requires vendor role)
//! POST /vendor/menu             - Add a menu item
//! POST /vendor/menu/{id}        - Edit a menu item
//! POST /vendor/menu/{id}/delete - Remove a menu item
//! POST /vendor/menu/{id}/toggle - Flip a menu item's availability
//! ```

pub mod auth;
pub mod loading;
pub mod root;
pub mod vendor;
pub mod view;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the vendor menu routes router.
pub fn vendor_routes() -> Router<AppState> {
    Router::new()
        .route("/menu", post(vendor::add_item))
        .route("/menu/{id}", post(vendor::update_item))
        .route("/menu/{id}/delete", post(vendor::delete_item))
        .route("/menu/{id}/toggle", post(vendor::toggle_item))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Root screen
        .route("/", get(root::index))
        // Loading gate progress
        .route("/loading/progress", get(loading::progress))
        // View selector
        .route("/view", post(view::set_view))
        // Auth routes
        .nest("/auth", auth_routes())
        // Vendor menu routes
        .nest("/vendor", vendor_routes())
}
