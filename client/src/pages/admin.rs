//! Operator sign-in. Same login call as the guest page; the role in the
//! response decides the destination.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::Route;

use crate::pages::login::{spawn_sign_in, validate_email_login};
use crate::state::auth::use_auth;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match validate_email_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(attempt) => spawn_sign_in(auth.clone(), navigate.clone(), attempt, error, busy),
            Err(message) => error.set(message.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Operator Login"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label>"Email"</label>
                    <input
                        class="login-input"
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label>"Password"</label>
                    <input
                        class="login-input"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <p class="login-card__footer">
                    <a href=Route::Login.path()>"Guest login"</a>
                </p>
            </div>
        </div>
    }
}
