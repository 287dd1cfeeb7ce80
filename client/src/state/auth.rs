//! Auth-session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the shared [`SessionManager`] in a reactive signal so pages re-render
//! on every transition. The manager stays the single writer of session state;
//! this wrapper only mirrors its status after each operation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;
use session::{AuthApi, AuthError, AuthStatus, Route, SessionManager, TokenStore};

use crate::net::api::HttpAuthApi;
use crate::util::storage::BrowserTokenStore;

/// Handle provided via context to every page.
pub struct AuthContext<A = HttpAuthApi, S = BrowserTokenStore> {
    manager: Arc<SessionManager<A, S>>,
    status: RwSignal<AuthStatus>,
}

impl<A, S> Clone for AuthContext<A, S> {
    fn clone(&self) -> Self {
        Self { manager: Arc::clone(&self.manager), status: self.status }
    }
}

impl<A, S> AuthContext<A, S>
where
    A: AuthApi + Send + Sync + 'static,
    S: TokenStore + Send + Sync + 'static,
{
    pub fn new(manager: Arc<SessionManager<A, S>>) -> Self {
        let status = RwSignal::new(manager.status());
        Self { manager, status }
    }

    /// Reactive auth status; reading it inside a view subscribes to changes.
    /// Only this context writes it.
    pub fn status(&self) -> ReadSignal<AuthStatus> {
        self.status.read_only()
    }

    /// # Errors
    ///
    /// Propagates the session manager's failure unchanged.
    pub async fn login(&self, email: String, password: String) -> Result<Route, AuthError> {
        let result = self.manager.login(&email, &password).await;
        self.sync();
        result
    }

    /// # Errors
    ///
    /// Propagates the session manager's failure unchanged.
    pub async fn register(&self, email: String, password: String, full_name: String) -> Result<Route, AuthError> {
        let result = self.manager.register(&email, &password, &full_name).await;
        self.sync();
        result
    }

    /// # Errors
    ///
    /// Propagates the session manager's failure unchanged.
    pub async fn guest_login(&self, room_number: String, full_name: String) -> Result<Route, AuthError> {
        let result = self.manager.guest_login(&room_number, &full_name).await;
        self.sync();
        result
    }

    /// Clears storage and memory before returning the landing route.
    pub fn logout(&self) -> Route {
        let route = self.manager.logout();
        self.sync();
        route
    }

    pub async fn rehydrate(&self) -> AuthStatus {
        let status = self.manager.rehydrate().await;
        self.sync();
        status
    }

    fn sync(&self) {
        self.status.set(self.manager.status());
    }
}

/// Fetch the [`AuthContext`] provided by `App`.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
