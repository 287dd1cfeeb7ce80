//! Browser transport for the auth REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`AuthError::Network`], since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures map to `Network`, non-2xx statuses to `Rejected`, and
//! schema mismatches to `Decode`. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use session::api::{GUEST_LOGIN_PATH, LOGIN_PATH, ME_PATH, REGISTER_PATH, endpoint};
use session::{AuthApi, AuthError, AuthResponse, GuestLoginRequest, LoginRequest, RegisterRequest, User};

#[cfg(any(test, not(feature = "hydrate")))]
const SERVER_UNAVAILABLE: &str = "not available on server";

/// [`AuthApi`] over `fetch`, rooted at `base_url` (empty for same-origin).
#[derive(Clone, Debug, Default)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    /// Calls relative paths on the page's own origin.
    pub fn same_origin() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> AuthError {
    AuthError::Network(SERVER_UNAVAILABLE.to_owned())
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn me(&self, token: &str) -> Result<User, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(ME_PATH))
                .header("Authorization", &session::api::bearer(token))
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            let body: session::MeResponse = read_json(resp).await?;
            Ok(body.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(ME_PATH), token);
            Err(unavailable())
        }
    }

    async fn login(&self, request: &LoginRequest<'_>) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.url(LOGIN_PATH), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(LOGIN_PATH), request);
            Err(unavailable())
        }
    }

    async fn register(&self, request: &RegisterRequest<'_>) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.url(REGISTER_PATH), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(REGISTER_PATH), request);
            Err(unavailable())
        }
    }

    async fn guest_login(&self, request: &GuestLoginRequest<'_>) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.url(GUEST_LOGIN_PATH), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(GUEST_LOGIN_PATH), request);
            Err(unavailable())
        }
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, AuthError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| AuthError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, AuthError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(session::api::rejection(resp.status(), &body));
    }
    resp.json::<T>().await.map_err(|e| AuthError::Decode(e.to_string()))
}
