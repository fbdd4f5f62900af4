//! Vendor menu item types.

use serde::{Deserialize, Serialize};

use town_basket_core::MenuItemId;

/// Availability of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MenuItemStatus {
    /// Orderable right now.
    #[default]
    Available,
    /// Temporarily hidden from customers.
    SoldOut,
}

impl MenuItemStatus {
    /// The other status. Used by the availability toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Available => Self::SoldOut,
            Self::SoldOut => Self::Available,
        }
    }

    /// Human-readable label for templates.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::SoldOut => "Sold Out",
        }
    }
}

/// A single item on a vendor's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique ID within the owning store's menu.
    pub id: MenuItemId,
    /// Dish name.
    pub name: String,
    /// Price in whole cents; avoids float money arithmetic.
    pub price_cents: u32,
    /// Orders placed today, for the dashboard list.
    pub orders_today: u32,
    /// Current availability.
    pub status: MenuItemStatus,
}

impl MenuItem {
    /// Price formatted for display, e.g. `$12.99`.
    #[must_use]
    pub fn price_display(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}
