//! Browser `localStorage` token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the hydrate-only `web-sys` glue behind the session crate's
//! `TokenStore`. During SSR the store is always empty and writes are no-ops.

use session::{AuthError, TOKEN_KEY, TokenStore};

/// Token slot under [`TOKEN_KEY`] in the window's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, AuthError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| AuthError::Storage("localStorage unavailable".to_owned()))
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> AuthError {
    AuthError::Storage(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Result<Option<String>, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(TOKEN_KEY).map_err(|e| js_error(&e))?;
            Ok(session::store::normalize_token(raw))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn save(&self, token: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(TOKEN_KEY, token).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (TOKEN_KEY, token);
            Ok(())
        }
    }

    fn clear(&self) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(TOKEN_KEY).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}
