//! Login and logout flow against the in-process storefront.

use axum::http::StatusCode;
use tempfile::TempDir;
use town_basket_integration_tests::{PASSWORD, TestApp, assert_redirect, body_text};

#[tokio::test]
async fn health_endpoint_responds() {
    let dir = TempDir::new().expect("tempdir");
    let app = TestApp::start(dir.path()).await;

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn login_page_lists_demo_accounts() {
    let dir = TempDir::new().expect("tempdir");
    let app = TestApp::start(dir.path()).await;

    let response = app.get("/auth/login").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("customer@demo.com"));
    assert!(body.contains("vendor3@demo.com"));
    assert!(body.contains("demo123"));
}

#[tokio::test]
async fn valid_credentials_sign_in_and_redirect_home() {
    let dir = TempDir::new().expect("tempdir");
    let app = TestApp::start(dir.path()).await;

    app.login("customer@demo.com").await;
    let user = app.state().session().current().expect("signed in");
    assert_eq!(user.name, "John Customer");
}

#[tokio::test]
async fn wrong_password_redirects_back_with_error_code() {
    let dir = TempDir::new().expect("tempdir");
    let app = TestApp::start(dir.path()).await;

    let response = app
        .post_form("/auth/login", "email=customer@demo.com&password=nope")
        .await;
    assert_redirect(&response, "/auth/login?error=credentials");
    assert!(app.state().session().current().is_none());
}

#[tokio::test]
async fn unknown_email_redirects_back_with_error_code() {
    let dir = TempDir::new().expect("tempdir");
    let app = TestApp::start(dir.path()).await;

    let response = app
        .post_form(
            "/auth/login",
            &format!("email=nobody@demo.com&password={PASSWORD}"),
        )
        .await;
    assert_redirect(&response, "/auth/login?error=credentials");
}

#[tokio::test]
async fn error_code_renders_a_message_on_the_login_page() {
    let dir = TempDir::new().expect("tempdir");
    let app = TestApp::start(dir.path()).await;

    let response = app.get("/auth/login?error=credentials").await;
    let body = body_text(response).await;
    assert!(body.contains("Invalid credentials"));
}

#[tokio::test]
async fn logout_clears_the_session() {
    let dir = TempDir::new().expect("tempdir");
    let app = TestApp::start(dir.path()).await;

    app.login("admin@demo.com").await;
    assert!(app.state().session().is_authenticated());

    app.logout().await;
    assert!(!app.state().session().is_authenticated());
}

#[tokio::test]
async fn logout_while_signed_out_is_harmless() {
    let dir = TempDir::new().expect("tempdir");
    let app = TestApp::start(dir.path()).await;

    app.logout().await;
    assert!(!app.state().session().is_authenticated());
}
