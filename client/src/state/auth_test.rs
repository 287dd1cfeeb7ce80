use async_trait::async_trait;
use session::{AuthResponse, GuestLoginRequest, LoginRequest, MemoryTokenStore, RegisterRequest, Role, User};

use super::*;

// =============================================================
// Canned API
// =============================================================

struct DeskApi;

fn desk_user() -> User {
    User { id: "9".to_owned(), email: "desk@lodge.test".to_owned(), role: Role::Operator, full_name: None }
}

fn rejected() -> AuthError {
    AuthError::Rejected { status: 401, message: "Invalid credentials".to_owned() }
}

#[async_trait(?Send)]
impl AuthApi for DeskApi {
    async fn me(&self, token: &str) -> Result<User, AuthError> {
        if token == "op-token" { Ok(desk_user()) } else { Err(rejected()) }
    }

    async fn login(&self, request: &LoginRequest<'_>) -> Result<AuthResponse, AuthError> {
        if request.password == "secret" {
            Ok(AuthResponse { token: "op-token".to_owned(), user: desk_user() })
        } else {
            Err(rejected())
        }
    }

    async fn register(&self, _request: &RegisterRequest<'_>) -> Result<AuthResponse, AuthError> {
        Err(AuthError::Rejected { status: 403, message: "closed".to_owned() })
    }

    async fn guest_login(&self, _request: &GuestLoginRequest<'_>) -> Result<AuthResponse, AuthError> {
        Err(rejected())
    }
}

fn context(store: MemoryTokenStore) -> AuthContext<DeskApi, MemoryTokenStore> {
    AuthContext::new(Arc::new(SessionManager::new(DeskApi, store)))
}

// =============================================================
// Signal mirroring
// =============================================================

#[test]
fn new_context_mirrors_pending_status() {
    let owner = Owner::new();
    owner.set();
    let auth = context(MemoryTokenStore::new());
    assert_eq!(auth.status().get_untracked(), AuthStatus::Unknown);
}

#[tokio::test]
async fn login_updates_signal_and_returns_route() {
    let owner = Owner::new();
    owner.set();
    let auth = context(MemoryTokenStore::new());

    let route = auth.login("desk@lodge.test".to_owned(), "secret".to_owned()).await;

    assert_eq!(route, Ok(Route::OperatorDashboard));
    assert_eq!(auth.status().get_untracked(), AuthStatus::Authenticated(desk_user()));
}

#[tokio::test]
async fn failed_login_leaves_signal_untouched() {
    let owner = Owner::new();
    owner.set();
    let auth = context(MemoryTokenStore::new());
    auth.rehydrate().await;

    let result = auth.login("desk@lodge.test".to_owned(), "nope".to_owned()).await;

    assert_eq!(result, Err(rejected()));
    assert_eq!(auth.status().get_untracked(), AuthStatus::Unauthenticated);
}

#[tokio::test]
async fn rehydrate_and_logout_flow_through_signal() {
    let owner = Owner::new();
    owner.set();
    let auth = context(MemoryTokenStore::with_token("op-token"));

    assert_eq!(auth.rehydrate().await, AuthStatus::Authenticated(desk_user()));
    assert!(auth.status().get_untracked().is_authenticated());

    assert_eq!(auth.logout(), Route::Landing);
    assert_eq!(auth.status().get_untracked(), AuthStatus::Unauthenticated);
}

#[tokio::test]
async fn clones_share_one_session() {
    let owner = Owner::new();
    owner.set();
    let auth = context(MemoryTokenStore::new());
    let other = auth.clone();

    other.login("desk@lodge.test".to_owned(), "secret".to_owned()).await.expect("login");

    assert!(auth.status().get_untracked().is_authenticated());
}

#[tokio::test]
async fn status_handle_is_read_only_and_tracks_transitions() {
    let owner = Owner::new();
    owner.set();
    let auth = context(MemoryTokenStore::new());
    let status: ReadSignal<AuthStatus> = auth.status();

    auth.login("desk@lodge.test".to_owned(), "secret".to_owned()).await.expect("login");
    assert_eq!(status.get_untracked(), AuthStatus::Authenticated(desk_user()));

    auth.logout();
    assert_eq!(status.get_untracked(), AuthStatus::Unauthenticated);
}
