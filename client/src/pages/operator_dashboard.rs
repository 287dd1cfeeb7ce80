//! Operator dashboard.

use leptos::prelude::*;
use session::Route;

use crate::components::session_panel::SessionPanel;

#[component]
pub fn OperatorDashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <h2>"Operator Dashboard"</h2>
            <SessionPanel sign_in=Route::Admin/>
        </div>
    }
}
