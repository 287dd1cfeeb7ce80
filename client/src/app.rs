//! Root application component with routing and the auth context provider.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use session::{Route as Page, SessionManager};

use crate::net::api::HttpAuthApi;
use crate::pages::{
    admin::AdminLoginPage, booking::BookingPage, guest_portal::GuestPortalPage, landing::LandingPage,
    login::LoginPage, operator_dashboard::OperatorDashboardPage, signup::SignupPage,
};
use crate::state::auth::AuthContext;
use crate::util::storage::BrowserTokenStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session manager, provides it as [`AuthContext`], kicks off
/// rehydration in the browser, and sets up client-side routing. Routes are
/// not guarded here; pages decide what to render for each auth status.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let manager = Arc::new(SessionManager::new(HttpAuthApi::same_origin(), BrowserTokenStore));
    let auth = AuthContext::new(manager);
    provide_context(auth.clone());

    // Status stays `Unknown` until this settles; on the server it never runs.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        auth.rehydrate().await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;

    view! {
        <Title text="Park Inn Lodge"/>

        <Router>
            <Routes fallback=|| "404 - Page Not Found".into_view()>
                <Route path=StaticSegment(Page::Landing.segment()) view=LandingPage/>
                <Route path=StaticSegment(Page::Book.segment()) view=BookingPage/>
                <Route path=StaticSegment(Page::GuestPortal.segment()) view=GuestPortalPage/>
                <Route path=StaticSegment(Page::OperatorDashboard.segment()) view=OperatorDashboardPage/>
                <Route path=StaticSegment(Page::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(Page::Admin.segment()) view=AdminLoginPage/>
                <Route path=StaticSegment(Page::Signup.segment()) view=SignupPage/>
            </Routes>
        </Router>
    }
}
