//! Public landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route that redirects on auth status: signed-in guests go to the
//! portal and operators to the dashboard once the session is known.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::Route;

use crate::components::nav_bar::NavBar;
use crate::state::auth::use_auth;
use crate::util::auth::install_landing_redirect;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth();
    install_landing_redirect(auth.status(), use_navigate());

    view! {
        <div class="landing-page">
            <NavBar/>
            <section class="landing-hero">
                <h2>"Welcome to Park Inn Lodge"</h2>
                <p>"Comfortable rooms, attentive staff, and everything you need during your stay."</p>
                <a class="landing-hero__cta" href=Route::Book.path()>"Book a Room"</a>
            </section>
            <section class="landing-access">
                <h3>"Already checked in?"</h3>
                <p>"Sign in with your room number to reach the guest portal."</p>
                <a href=Route::Login.path()>"Guest login"</a>
                <a href=Route::Admin.path()>"Staff login"</a>
            </section>
        </div>
    }
}
