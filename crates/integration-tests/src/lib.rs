//! Integration test harness for Town Basket.
//!
//! Drives the storefront router in-process with `tower::ServiceExt::oneshot`,
//! so the tests run under plain `cargo test` with no server or database to
//! start. Each test gets its own temporary data directory; the loading gate
//! is configured to open immediately and awaited before the first request.

use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use tower::ServiceExt;
use town_basket_storefront::{config::StorefrontConfig, state::AppState};

pub use town_basket_storefront::services::auth::DEMO_PASSWORD as PASSWORD;

/// Configuration for an in-process test app.
///
/// Login latency is cut to a few milliseconds and the loading gate minimum
/// is zeroed, so only the short grace delay is paid at startup.
#[must_use]
pub fn test_config(data_dir: &Path) -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        data_dir: data_dir.to_path_buf(),
        login_delay: Duration::from_millis(5),
        loading_min_duration: Duration::ZERO,
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// An in-process storefront application.
pub struct TestApp {
    router: Router,
    state: AppState,
}

impl TestApp {
    /// Start an app over the given data directory and wait for the loading
    /// gate to open.
    pub async fn start(data_dir: &Path) -> Self {
        let state =
            AppState::new(test_config(data_dir)).expect("Failed to initialize application state");
        assert!(state.loading().wait().await, "loading gate never opened");
        let router = town_basket_storefront::app(state.clone());
        Self { router, state }
    }

    /// The application state behind the router.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Issue a GET request.
    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::get(uri)
            .body(Body::empty())
            .expect("Failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed")
    }

    /// Issue a POST request with a urlencoded form body.
    pub async fn post_form(&self, uri: &str, form: &str) -> Response<Body> {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_owned()))
            .expect("Failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed")
    }

    /// Sign in as the given demo account and assert the redirect home.
    pub async fn login(&self, email: &str) {
        let response = self
            .post_form("/auth/login", &format!("email={email}&password={PASSWORD}"))
            .await;
        assert_redirect(&response, "/");
    }

    /// Sign out.
    pub async fn logout(&self) {
        let response = self.post_form("/auth/logout", "").await;
        assert_redirect(&response, "/");
    }
}

/// Read a response body as a UTF-8 string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not UTF-8")
}

/// Assert a redirect response pointing at `location`.
pub fn assert_redirect(response: &Response<Body>, location: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let header = response
        .headers()
        .get(header::LOCATION)
        .expect("Redirect without a Location header");
    assert_eq!(header, location);
}
