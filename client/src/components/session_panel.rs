//! Signed-in identity strip with sign-in and logout actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the booking, guest-portal, and operator pages. It renders a neutral
//! loading line while rehydration is pending instead of a signed-out prompt.

#[cfg(test)]
#[path = "session_panel_test.rs"]
mod session_panel_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::{AuthStatus, Route};

use crate::state::auth::use_auth;
use crate::util::auth::go_to;

/// One-line description of the current session.
pub fn session_summary(status: &AuthStatus) -> String {
    match status {
        AuthStatus::Unknown => "Loading...".to_owned(),
        AuthStatus::Unauthenticated => "You are not signed in.".to_owned(),
        AuthStatus::Authenticated(user) => format!("Signed in as {} ({})", user.display_name(), user.role.as_str()),
    }
}

/// Session strip; `sign_in` picks the login page offered when signed out.
#[component]
pub fn SessionPanel(#[prop(optional)] sign_in: Option<Route>) -> impl IntoView {
    let auth = use_auth();
    let status = auth.status();
    let navigate = use_navigate();
    let sign_in = sign_in.unwrap_or(Route::Login);

    let on_logout = move |_| {
        let route = auth.logout();
        go_to(&navigate, route);
    };

    view! {
        <section class="session-panel">
            <p class="session-panel__status">{move || session_summary(&status.get())}</p>
            <a
                class="session-panel__sign-in"
                href=sign_in.path()
                hidden=move || status.get() != AuthStatus::Unauthenticated
            >
                "Sign in to continue"
            </a>
            <button
                class="session-panel__logout"
                hidden=move || !status.get().is_authenticated()
                on:click=on_logout
            >
                "Logout"
            </button>
        </section>
    }
}
