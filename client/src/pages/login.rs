//! Login page toggling between email/password and room-number sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::Route;

use crate::state::auth::{AuthContext, use_auth};

/// Which credential form the login page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    Email,
    /// Post-check-in login with room number and full name.
    Room,
}

impl LoginMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Email => Self::Room,
            Self::Room => Self::Email,
        }
    }

    /// Label of the button that switches away from this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Email => "Switch to Room Login (Post-Check-In)",
            Self::Room => "Switch to Email Login",
        }
    }
}

/// A validated sign-in attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignIn {
    Email { email: String, password: String },
    Room { room_number: String, full_name: String },
}

impl SignIn {
    #[cfg(feature = "hydrate")]
    async fn submit(self, auth: &AuthContext) -> Result<Route, session::AuthError> {
        match self {
            Self::Email { email, password } => auth.login(email, password).await,
            Self::Room { room_number, full_name } => auth.guest_login(room_number, full_name).await,
        }
    }
}

/// Trim the email and require both fields. Passwords are taken verbatim.
pub fn validate_email_login(email: &str, password: &str) -> Result<SignIn, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok(SignIn::Email { email: email.to_owned(), password: password.to_owned() })
}

/// Trim and require both room number and full name.
pub fn validate_room_login(room_number: &str, full_name: &str) -> Result<SignIn, &'static str> {
    let room_number = room_number.trim();
    let full_name = full_name.trim();
    if room_number.is_empty() || full_name.is_empty() {
        return Err("Enter your room number and full name.");
    }
    Ok(SignIn::Room { room_number: room_number.to_owned(), full_name: full_name.to_owned() })
}

/// Run `attempt` and navigate on success; any failure shows
/// [`LOGIN_FAILED`](crate::util::auth::LOGIN_FAILED).
pub(crate) fn spawn_sign_in<F>(
    auth: AuthContext,
    navigate: F,
    attempt: SignIn,
    error: RwSignal<String>,
    busy: RwSignal<bool>,
) where
    F: Fn(&str, leptos_router::NavigateOptions) + 'static,
{
    busy.set(true);
    error.set(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match attempt.submit(&auth).await {
            Ok(route) => crate::util::auth::go_to(&navigate, route),
            Err(e) => {
                log::warn!("sign-in failed: {e}");
                error.set(crate::util::auth::LOGIN_FAILED.to_owned());
                busy.set(false);
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, navigate, attempt);
        busy.set(false);
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let mode = RwSignal::new(LoginMode::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let room_number = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let attempt = match mode.get_untracked() {
            LoginMode::Email => validate_email_login(&email.get_untracked(), &password.get_untracked()),
            LoginMode::Room => validate_room_login(&room_number.get_untracked(), &full_name.get_untracked()),
        };
        match attempt {
            Ok(attempt) => spawn_sign_in(auth.clone(), navigate.clone(), attempt, error, busy),
            Err(message) => error.set(message.to_owned()),
        }
    };

    let on_toggle = move |_| {
        mode.update(|m| *m = m.toggled());
        error.set(String::new());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Guest Login"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <button class="login-toggle" type="button" on:click=on_toggle>
                    {move || mode.get().toggle_label()}
                </button>
                <form class="login-form" on:submit=on_submit>
                    <Show
                        when=move || mode.get() == LoginMode::Email
                        fallback=move || {
                            view! {
                                <label>"Room Number"</label>
                                <input
                                    class="login-input"
                                    type="text"
                                    required
                                    prop:value=move || room_number.get()
                                    on:input=move |ev| room_number.set(event_target_value(&ev))
                                />
                                <label>"Full Name"</label>
                                <input
                                    class="login-input"
                                    type="text"
                                    required
                                    prop:value=move || full_name.get()
                                    on:input=move |ev| full_name.set(event_target_value(&ev))
                                />
                            }
                        }
                    >
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
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <p class="login-card__footer">
                    "New here? "
                    <a href=Route::Signup.path()>"Sign Up"</a>
                </p>
            </div>
        </div>
    }
}
