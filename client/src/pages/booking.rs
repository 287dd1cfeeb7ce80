//! Booking page.

use leptos::prelude::*;
use session::Route;

use crate::components::session_panel::SessionPanel;

#[component]
pub fn BookingPage() -> impl IntoView {
    view! {
        <div class="booking-page">
            <h2>"Book a Room"</h2>
            <SessionPanel sign_in=Route::Signup/>
            <ul class="booking-page__rooms">
                <li>"Standard Room"</li>
                <li>"Deluxe Room"</li>
                <li>"Family Suite"</li>
            </ul>
        </div>
    }
}
