//! Authentication error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials (unknown email or wrong password).
    ///
    /// The only user-visible failure: login deliberately does not reveal
    /// which half of the credential pair was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Persisting or clearing the session failed.
    #[error("session storage error: {0}")]
    Storage(#[from] StorageError),
}
