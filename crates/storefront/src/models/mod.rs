//! Domain models for the storefront.

pub mod menu;
pub mod user;

pub use menu::{MenuItem, MenuItemStatus};
pub use user::{StoreAssociation, User};

/// Session keys for persisted state.
pub mod session_keys {
    /// Key under which the logged-in identity is persisted.
    pub const CURRENT_USER: &str = "townbasket_user";
}
