//! Authentication service.
//!
//! Login resolves against an injectable identity directory; the shipped
//! implementation is a fixed table of demo identities sharing one password.
//! Every login attempt waits a fixed simulated delay before resolving, so
//! the swapped-in-memory directory still feels like a network call.

mod error;

pub use error::AuthError;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use town_basket_core::{Email, Role, StoreId, UserId};

use crate::models::{StoreAssociation, User};
use crate::session::SessionStore;

/// The password shared by every demo identity.
pub const DEMO_PASSWORD: &str = "demo123";

/// Lookup capability for identities.
///
/// Modeled as a trait so a real backing directory can replace the demo table
/// without touching callers.
pub trait IdentityDirectory: Send + Sync {
    /// Find the identity matching `email` whose password is `password`.
    ///
    /// Returns `None` for an unknown email or a wrong password; callers
    /// cannot tell the two cases apart.
    fn find_by_email_and_password(&self, email: &str, password: &str) -> Option<User>;
}

/// The fixed directory of demo identities.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoDirectory;

impl DemoDirectory {
    /// All demo identities, in directory order.
    ///
    /// # Panics
    ///
    /// Never panics: the table's email literals are statically valid.
    #[must_use]
    pub fn users() -> Vec<User> {
        let entry = |id: i32, name: &str, email: &str, role: Role, store: Option<(i32, &str)>| {
            User {
                id: UserId::new(id),
                name: name.to_owned(),
                email: Email::parse(email).unwrap_or_else(|_| unreachable!("fixed table email")),
                role,
                store: store.map(|(store_id, store_name)| StoreAssociation {
                    id: StoreId::new(store_id),
                    name: store_name.to_owned(),
                }),
            }
        };

        vec![
            entry(1, "John Customer", "customer@demo.com", Role::Customer, None),
            entry(2, "Admin User", "admin@demo.com", Role::Admin, None),
            entry(
                3,
                "Mario Rossi",
                "vendor1@demo.com",
                Role::Vendor,
                Some((1, "Pizza Palace")),
            ),
            entry(
                4,
                "John Smith",
                "vendor2@demo.com",
                Role::Vendor,
                Some((2, "Burger House")),
            ),
            entry(
                5,
                "Raj Patel",
                "vendor3@demo.com",
                Role::Vendor,
                Some((3, "Spice Garden")),
            ),
        ]
    }
}

impl IdentityDirectory for DemoDirectory {
    fn find_by_email_and_password(&self, email: &str, password: &str) -> Option<User> {
        if password != DEMO_PASSWORD {
            return None;
        }
        Self::users().into_iter().find(|u| u.email.as_str() == email)
    }
}

/// Authentication service.
///
/// Owns the busy flag and the artificial resolution delay; all session
/// mutation goes through the shared [`SessionStore`].
pub struct AuthService {
    directory: Arc<dyn IdentityDirectory>,
    session: Arc<SessionStore>,
    login_delay: Duration,
    busy: AtomicBool,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub fn new(
        directory: Arc<dyn IdentityDirectory>,
        session: Arc<SessionStore>,
        login_delay: Duration,
    ) -> Self {
        Self {
            directory,
            session,
            login_delay,
            busy: AtomicBool::new(false),
        }
    }

    /// Login with email and password.
    ///
    /// Always takes the configured delay before resolving, success or not.
    /// On success the session identity is set and persisted; on rejection the
    /// session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for an unknown email or a
    /// wrong password, or [`AuthError::Storage`] if persisting the session
    /// fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.busy.store(true, Ordering::SeqCst);

        // Simulated API latency; applies to rejections too.
        tokio::time::sleep(self.login_delay).await;

        let result = match self.directory.find_by_email_and_password(email, password) {
            Some(user) => {
                self.session.set(&user)?;
                tracing::info!(user = %user.email, role = %user.role, "login succeeded");
                Ok(user)
            }
            None => {
                tracing::info!(email, "login rejected");
                Err(AuthError::InvalidCredentials)
            }
        };

        self.busy.store(false, Ordering::SeqCst);
        result
    }

    /// Logout: clear the session identity and its persisted record.
    ///
    /// Idempotent; logging out an empty session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if the storage write fails.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.session.clear()?;
        tracing::info!("logged out");
        Ok(())
    }

    /// Whether a login is currently resolving.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use crate::storage::KvStore;

    fn service(dir: &tempfile::TempDir) -> (AuthService, Arc<SessionStore>) {
        let storage = KvStore::open(dir.path().join("session.json")).unwrap();
        let session = Arc::new(SessionStore::open(storage).unwrap());
        let auth = AuthService::new(
            Arc::new(DemoDirectory),
            Arc::clone(&session),
            Duration::from_millis(5),
        );
        (auth, session)
    }

    #[tokio::test]
    async fn test_every_directory_identity_can_login() {
        let dir = tempfile::tempdir().unwrap();
        let (auth, session) = service(&dir);

        for expected in DemoDirectory::users() {
            let user = auth
                .login(expected.email.as_str(), DEMO_PASSWORD)
                .await
                .unwrap();
            assert_eq!(user, expected);
            assert!(session.is_authenticated());
            assert_eq!(session.current(), Some(expected));
        }
    }

    #[tokio::test]
    async fn test_wrong_password_rejected_session_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let (auth, session) = service(&dir);

        let err = auth.login("customer@demo.com", "hunter2").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_unknown_email_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (auth, session) = service(&dir);

        let err = auth.login("nobody@demo.com", DEMO_PASSWORD).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_rejection_leaves_existing_session_intact() {
        let dir = tempfile::tempdir().unwrap();
        let (auth, session) = service(&dir);

        auth.login("admin@demo.com", DEMO_PASSWORD).await.unwrap();
        let before = session.current();

        // Repeated rejections are idempotent:
        for _ in 0..3 {
            assert!(auth.login("admin@demo.com", "wrong").await.is_err());
            assert_eq!(session.current(), before);
        }
    }

    #[tokio::test]
    async fn test_logout_always_clears() {
        let dir = tempfile::tempdir().unwrap();
        let (auth, session) = service(&dir);

        // Logout with no session is fine.
        auth.logout().unwrap();
        assert!(!session.is_authenticated());

        auth.login("vendor1@demo.com", DEMO_PASSWORD).await.unwrap();
        auth.logout().unwrap();
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_busy_flag_clears_after_both_outcomes() {
        let dir = tempfile::tempdir().unwrap();
        let (auth, _session) = service(&dir);

        assert!(!auth.is_busy());
        auth.login("customer@demo.com", DEMO_PASSWORD).await.unwrap();
        assert!(!auth.is_busy());
        let _ = auth.login("customer@demo.com", "wrong").await;
        assert!(!auth.is_busy());
    }

    #[test]
    fn test_directory_rejects_shared_password_with_unknown_email() {
        assert!(
            DemoDirectory
                .find_by_email_and_password("ghost@demo.com", DEMO_PASSWORD)
                .is_none()
        );
    }

    #[test]
    fn test_vendor_entries_carry_store_association() {
        for user in DemoDirectory::users() {
            assert_eq!(user.role.is_vendor(), user.store.is_some());
        }
    }
}
