//! Authentication extractors.
//!
//! Extractors reading the identity from the shared session store. Routes that
//! must not render for anonymous or wrongly-roled users take `RequireAuth` or
//! `RequireVendor` instead of checking by hand.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};

use crate::models::{StoreAssociation, User};
use crate::state::AppState;

/// Error returned when authentication is required but absent.
pub enum AuthRejection {
    /// Redirect to the login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (wrong role).
    Forbidden,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/login").into_response(),
            Self::Forbidden => StatusCode::FORBIDDEN.into_response(),
        }
    }
}

/// Extractor that optionally gets the current identity.
///
/// Never rejects; anonymous requests yield `None`.
pub struct OptionalAuth(pub Option<User>);

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(state.session().current()))
    }
}

/// Extractor that requires an authenticated identity.
///
/// Anonymous requests are redirected to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(RequireAuth(user): RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
pub struct RequireAuth(pub User);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .session()
            .current()
            .map(Self)
            .ok_or(AuthRejection::RedirectToLogin)
    }
}

/// Extractor that requires a vendor identity with a store association.
pub struct RequireVendor {
    /// The authenticated vendor.
    pub user: User,
    /// The store the vendor operates.
    pub store: StoreAssociation,
}

impl FromRequestParts<AppState> for RequireVendor {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = state
            .session()
            .current()
            .ok_or(AuthRejection::RedirectToLogin)?;

        if !user.role.is_vendor() {
            return Err(AuthRejection::Forbidden);
        }

        let store = user.store.clone().ok_or(AuthRejection::Forbidden)?;
        Ok(Self { user, store })
    }
}
