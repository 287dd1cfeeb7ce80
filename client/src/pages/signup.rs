//! Guest self-registration; a new account always continues to booking.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::Route;

use crate::state::auth::use_auth;

pub const REGISTER_FAILED: &str = "Registration failed";

/// Validated registration fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Trim email and name, require all three fields.
pub fn validate_signup(email: &str, password: &str, full_name: &str) -> Result<Registration, &'static str> {
    let email = email.trim();
    let full_name = full_name.trim();
    if email.is_empty() || password.is_empty() || full_name.is_empty() {
        return Err("Enter your email, password, and full name.");
    }
    Ok(Registration { email: email.to_owned(), password: password.to_owned(), full_name: full_name.to_owned() })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration =
            match validate_signup(&email.get_untracked(), &password.get_untracked(), &full_name.get_untracked()) {
                Ok(registration) => registration,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let Registration { email, password, full_name } = registration;
                match auth.register(email, password, full_name).await {
                    Ok(route) => crate::util::auth::go_to(&navigate, route),
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        error.set(REGISTER_FAILED.to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, &navigate, registration);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Sign Up"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label>"Full Name"</label>
                    <input
                        class="login-input"
                        type="text"
                        required
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
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
                        "Create Account"
                    </button>
                </form>
                <p class="login-card__footer">
                    "Already have an account? "
                    <a href=Route::Login.path()>"Login"</a>
                </p>
            </div>
        </div>
    }
}
