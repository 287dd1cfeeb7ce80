//! Site header with role-dependent links and a logout action.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::Route;

use crate::state::auth::use_auth;
use crate::util::auth::{book_now_target, go_to, nav_links};

/// Header shown on the landing page.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let status = auth.status();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let navigate_book = navigate.clone();
    let on_book_now = move |_| go_to(&navigate_book, book_now_target(&status.get_untracked()));

    let on_logout = move |_| {
        let route = auth.logout();
        go_to(&navigate, route);
    };

    view! {
        <header class="nav-bar">
            <h1 class="nav-bar__brand">"Park Inn Lodge"</h1>
            <button class="nav-bar__menu" on:click=move |_| menu_open.update(|open| *open = !*open)>
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
            <nav class=move || nav_class(menu_open.get())>
                <a href=Route::Landing.path()>"Home"</a>
                <a href=Route::Book.path()>"Book a Room"</a>
                {move || {
                    nav_links(&status.get())
                        .iter()
                        .map(|(route, label)| view! { <a href=route.path()>{*label}</a> })
                        .collect_view()
                }}
                <button
                    class="nav-bar__logout"
                    hidden=move || !status.get().is_authenticated()
                    on:click=on_logout
                >
                    "Logout"
                </button>
                <button class="nav-bar__cta" on:click=on_book_now>"Book Now"</button>
            </nav>
        </header>
    }
}

fn nav_class(open: bool) -> &'static str {
    if open { "nav-bar__links nav-bar__links--open" } else { "nav-bar__links" }
}
