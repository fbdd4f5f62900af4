//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::loading::LoadingGate;
use crate::menu::MenuBook;
use crate::services::auth::{AuthService, DemoDirectory, IdentityDirectory};
use crate::session::SessionStore;
use crate::storage::{KvStore, StorageError};
use crate::view::ViewSelector;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; gives handlers access to the session store,
/// the view selector, the vendor menus, and the startup loading gate.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    auth: AuthService,
    session: Arc<SessionStore>,
    view: ViewSelector,
    menus: MenuBook,
    loading: LoadingGate,
}

impl AppState {
    /// Create the application state with the demo identity directory.
    ///
    /// Opens (or creates) the session storage document under the configured
    /// data directory and starts the loading gate.
    ///
    /// # Errors
    ///
    /// Returns an error if the session storage document cannot be opened.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorageError> {
        Self::with_directory(config, Arc::new(DemoDirectory))
    }

    /// Create the application state with a custom identity directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the session storage document cannot be opened.
    pub fn with_directory(
        config: StorefrontConfig,
        directory: Arc<dyn IdentityDirectory>,
    ) -> Result<Self, StorageError> {
        let storage = KvStore::open(config.session_path())?;
        let session = Arc::new(SessionStore::open(storage)?);
        let auth = AuthService::new(directory, Arc::clone(&session), config.login_delay);
        let loading = LoadingGate::start(config.loading_gate());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                auth,
                session,
                view: ViewSelector::new(),
                menus: MenuBook::seeded(),
                loading,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the authentication service.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// Get a reference to the session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Get a reference to the view selector.
    #[must_use]
    pub fn view(&self) -> &ViewSelector {
        &self.inner.view
    }

    /// Get a reference to the vendor menu book.
    #[must_use]
    pub fn menus(&self) -> &MenuBook {
        &self.inner.menus
    }

    /// Get a reference to the startup loading gate.
    #[must_use]
    pub fn loading(&self) -> &LoadingGate {
        &self.inner.loading
    }
}
