//! Authentication route handlers.
//!
//! Handles login and logout against the demo identity directory. Failed
//! logins redirect back to the login page with an error code in the
//! query string.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::filters;
use crate::{error::AppError, services::auth::AuthError, state::AppState};

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

// =============================================================================
// Query Types
// =============================================================================

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

// =============================================================================
// Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    LoginTemplate { error: query.error }
}

/// Handle login form submission.
///
/// Authenticates against the identity directory and stores the identity
/// in the session on success.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    match state.auth().login(&form.email, &form.password).await {
        Ok(_user) => Ok(Redirect::to("/").into_response()),
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("login failed: invalid credentials");
            Ok(Redirect::to("/auth/login?error=credentials").into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Handle logout.
///
/// Clears the session and returns to the landing page. The view selector
/// is deliberately left untouched.
pub async fn logout(State(state): State<AppState>) -> Result<Response, AppError> {
    state.auth().logout()?;
    Ok(Redirect::to("/").into_response())
}
