//! User identity types.
//!
//! Identities come exclusively from the fixed demo directory; there is no
//! registration or profile editing at runtime.

use serde::{Deserialize, Serialize};

use town_basket_core::{Email, Role, StoreId, UserId};

/// A vendor's store association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreAssociation {
    /// The store this vendor operates.
    pub id: StoreId,
    /// Display name of the store.
    pub name: String,
}

/// A Town Basket identity.
///
/// `store` is populated only for vendors; the demo directory is the single
/// source of identities, so the pairing cannot drift at runtime. The struct
/// is serialized as-is into the session storage document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: Email,
    /// Role deciding which top-level screen this user sees.
    pub role: Role,
    /// Store association, for vendors only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreAssociation>,
}

impl User {
    /// The vendor's store ID, if this user is a vendor.
    #[must_use]
    pub fn store_id(&self) -> Option<StoreId> {
        self.store.as_ref().map(|s| s.id)
    }

    /// The vendor's store name, if this user is a vendor.
    #[must_use]
    pub fn store_name(&self) -> Option<&str> {
        self.store.as_ref().map(|s| s.name.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn vendor() -> User {
        User {
            id: UserId::new(3),
            name: "Mario Rossi".to_owned(),
            email: Email::parse("vendor1@demo.com").unwrap(),
            role: Role::Vendor,
            store: Some(StoreAssociation {
                id: StoreId::new(1),
                name: "Pizza Palace".to_owned(),
            }),
        }
    }

    #[test]
    fn test_store_accessors() {
        let user = vendor();
        assert_eq!(user.store_id(), Some(StoreId::new(1)));
        assert_eq!(user.store_name(), Some("Pizza Palace"));
    }

    #[test]
    fn test_serde_roundtrip_keeps_store() {
        let user = vendor();
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_customer_serializes_without_store_field() {
        let user = User {
            id: UserId::new(1),
            name: "John Customer".to_owned(),
            email: Email::parse("customer@demo.com").unwrap(),
            role: Role::Customer,
            store: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("store"));
    }
}
