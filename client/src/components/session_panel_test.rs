use session::{Role, User};

use super::*;

#[test]
fn summary_while_pending_is_neutral() {
    assert_eq!(session_summary(&AuthStatus::Unknown), "Loading...");
}

#[test]
fn summary_when_signed_out() {
    assert_eq!(session_summary(&AuthStatus::Unauthenticated), "You are not signed in.");
}

#[test]
fn summary_names_user_and_role() {
    let status = AuthStatus::Authenticated(User {
        id: "g204".to_owned(),
        email: String::new(),
        role: Role::Guest,
        full_name: Some("Ann Lee".to_owned()),
    });
    assert_eq!(session_summary(&status), "Signed in as Ann Lee (guest)");
}
