//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages share the same role-to-destination rules: the landing page bounces
//! signed-in users to their home, and the navigation bar offers links by role.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::{AuthStatus, Role, Route};

/// Generic message for rejected sign-in attempts.
pub const LOGIN_FAILED: &str = "Invalid credentials";

/// Where the landing page sends an already signed-in user, if anywhere.
pub fn landing_redirect(status: &AuthStatus) -> Option<Route> {
    status.role().map(Route::home_for)
}

/// "Book now" goes straight to booking for signed-in guests, otherwise to signup.
pub fn book_now_target(status: &AuthStatus) -> Route {
    if status.role() == Some(Role::Guest) { Route::Book } else { Route::Signup }
}

/// Navigation links for the header, by auth status.
///
/// Nothing is offered while the status is still unknown so the header does not
/// flash sign-in links at a user who is about to be restored.
pub fn nav_links(status: &AuthStatus) -> &'static [(Route, &'static str)] {
    match status {
        AuthStatus::Unknown => &[],
        AuthStatus::Unauthenticated => &[(Route::Login, "Login"), (Route::Signup, "Sign Up")],
        AuthStatus::Authenticated(user) => match user.role {
            Role::Guest => &[(Route::GuestPortal, "Guest Portal")],
            Role::Operator => &[(Route::OperatorDashboard, "Dashboard")],
        },
    }
}

/// Navigate to `route` with default options.
pub fn go_to<F>(navigate: &F, route: Route)
where
    F: Fn(&str, NavigateOptions),
{
    navigate(route.path(), NavigateOptions::default());
}

/// Redirect away from the landing page whenever a user is signed in.
pub fn install_landing_redirect<F>(status: ReadSignal<AuthStatus>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(route) = landing_redirect(&status.get()) {
            go_to(&navigate, route);
        }
    });
}
