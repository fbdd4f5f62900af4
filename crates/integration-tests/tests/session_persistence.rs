//! Session rehydration across process restarts.
//!
//! Two apps sharing a data directory stand in for a restart: the second
//! app reads the session document the first one wrote.

use tempfile::TempDir;
use town_basket_integration_tests::{TestApp, body_text};

#[tokio::test]
async fn signed_in_identity_survives_a_restart() {
    let dir = TempDir::new().expect("tempdir");

    {
        let app = TestApp::start(dir.path()).await;
        app.login("vendor1@demo.com").await;
    }

    let app = TestApp::start(dir.path()).await;
    let user = app.state().session().current().expect("rehydrated");
    assert_eq!(user.name, "Mario Rossi");

    let body = body_text(app.get("/").await).await;
    assert!(body.contains("Pizza Palace"));
}

#[tokio::test]
async fn logout_survives_a_restart() {
    let dir = TempDir::new().expect("tempdir");

    {
        let app = TestApp::start(dir.path()).await;
        app.login("customer@demo.com").await;
        app.logout().await;
    }

    let app = TestApp::start(dir.path()).await;
    assert!(!app.state().session().is_authenticated());
}

#[tokio::test]
async fn fresh_data_directory_starts_signed_out() {
    let dir = TempDir::new().expect("tempdir");
    let app = TestApp::start(dir.path()).await;
    assert!(!app.state().session().is_authenticated());
}
