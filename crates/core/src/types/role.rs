//! User roles.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Role of a Town Basket identity.
///
/// The role decides which top-level screen a logged-in user sees: admins and
/// vendors go straight to their dashboards, customers toggle between the
/// landing page and their own dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Orders food; sees the landing page or the customer dashboard.
    #[default]
    Customer,
    /// Operates the platform; sees the admin dashboard.
    Admin,
    /// Runs a restaurant; sees the vendor dashboard with menu management.
    Vendor,
}

impl Role {
    /// Whether this role is `Customer`.
    #[must_use]
    pub const fn is_customer(self) -> bool {
        matches!(self, Self::Customer)
    }

    /// Whether this role is `Admin`.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this role is `Vendor`.
    #[must_use]
    pub const fn is_vendor(self) -> bool {
        matches!(self, Self::Vendor)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Customer => "customer",
            Self::Admin => "admin",
            Self::Vendor => "vendor",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Customer).unwrap(), "\"customer\"");
        assert_eq!(serde_json::to_string(&Role::Vendor).unwrap(), "\"vendor\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_display_matches_serde() {
        for role in [Role::Customer, Role::Admin, Role::Vendor] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json.trim_matches('"'), role.to_string());
        }
    }

    #[test]
    fn test_predicates() {
        assert!(Role::Customer.is_customer());
        assert!(Role::Admin.is_admin());
        assert!(Role::Vendor.is_vendor());
        assert!(!Role::Vendor.is_admin());
    }
}
