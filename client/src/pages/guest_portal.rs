//! Guest portal for checked-in and registered guests.

use leptos::prelude::*;
use session::Route;

use crate::components::session_panel::SessionPanel;

#[component]
pub fn GuestPortalPage() -> impl IntoView {
    view! {
        <div class="portal-page">
            <h2>"Guest Portal"</h2>
            <SessionPanel sign_in=Route::Login/>
            <ul class="portal-page__services">
                <li>"Room service"</li>
                <li>"Housekeeping"</li>
                <li>"Late checkout"</li>
            </ul>
            <a href=Route::Book.path()>"Book another stay"</a>
        </div>
    }
}
