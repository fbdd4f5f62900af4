//! Session store.
//!
//! Holds the currently authenticated identity, if any. The store is
//! process-wide (the demo has exactly one session) and writes through to
//! durable storage on every change so a restart rehydrates the same
//! identity without re-authenticating.

use std::sync::RwLock;

use crate::models::{User, session_keys};
use crate::storage::{KvStore, StorageError};

/// The single optional holder of an authenticated identity.
#[derive(Debug)]
pub struct SessionStore {
    current: RwLock<Option<User>>,
    storage: KvStore,
}

impl SessionStore {
    /// Open the session store, rehydrating any persisted identity.
    ///
    /// A persisted record that no longer decodes as a [`User`] is discarded
    /// with a warning; the session starts empty in that case.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the storage document cannot be read.
    pub fn open(storage: KvStore) -> Result<Self, StorageError> {
        let current = match storage.get::<User>(session_keys::CURRENT_USER) {
            Ok(user) => {
                if let Some(user) = &user {
                    tracing::info!(user = %user.email, "session rehydrated from storage");
                }
                user
            }
            Err(StorageError::Encoding(err)) => {
                tracing::warn!(error = %err, "discarding undecodable session record");
                None
            }
            Err(err) => return Err(err),
        };

        Ok(Self {
            current: RwLock::new(current),
            storage,
        })
    }

    /// The currently authenticated identity, if any.
    #[must_use]
    pub fn current(&self) -> Option<User> {
        self.current
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Whether an identity is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Set the session identity and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails; the in-memory session is
    /// left unchanged in that case.
    pub fn set(&self, user: &User) -> Result<(), StorageError> {
        let mut guard = self.current.write().map_err(|_| StorageError::Poisoned)?;
        self.storage.set(session_keys::CURRENT_USER, user)?;
        *guard = Some(user.clone());
        Ok(())
    }

    /// Clear the session identity and remove the persisted record.
    ///
    /// Clearing an already-empty session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self.current.write().map_err(|_| StorageError::Poisoned)?;
        self.storage.remove(session_keys::CURRENT_USER)?;
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use town_basket_core::{Email, Role, UserId};

    fn customer() -> User {
        User {
            id: UserId::new(1),
            name: "John Customer".to_owned(),
            email: Email::parse("customer@demo.com").unwrap(),
            role: Role::Customer,
            store: None,
        }
    }

    fn open_at(path: &std::path::Path) -> SessionStore {
        SessionStore::open(KvStore::open(path).unwrap()).unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_at(&dir.path().join("session.json"));
        assert!(!store.is_authenticated());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_set_then_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_at(&dir.path().join("session.json"));

        store.set(&customer()).unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.current().unwrap().email.as_str(), "customer@demo.com");

        store.clear().unwrap();
        assert!(!store.is_authenticated());
        // Clearing again is harmless.
        store.clear().unwrap();
    }

    #[test]
    fn test_rehydrates_after_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = open_at(&path);
        store.set(&customer()).unwrap();
        drop(store);

        let reopened = open_at(&path);
        assert_eq!(reopened.current(), Some(customer()));
    }

    #[test]
    fn test_cleared_session_stays_cleared_after_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = open_at(&path);
        store.set(&customer()).unwrap();
        store.clear().unwrap();
        drop(store);

        let reopened = open_at(&path);
        assert!(!reopened.is_authenticated());
    }

    #[test]
    fn test_undecodable_record_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let kv = KvStore::open(&path).unwrap();
        kv.set(session_keys::CURRENT_USER, &"not a user").unwrap();
        drop(kv);

        let store = open_at(&path);
        assert!(!store.is_authenticated());
    }
}
