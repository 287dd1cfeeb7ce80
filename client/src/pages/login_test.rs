use super::*;
use crate::util::auth::LOGIN_FAILED;

#[test]
fn mode_defaults_to_email() {
    assert_eq!(LoginMode::default(), LoginMode::Email);
}

#[test]
fn mode_toggle_flips_back_and_forth() {
    assert_eq!(LoginMode::Email.toggled(), LoginMode::Room);
    assert_eq!(LoginMode::Room.toggled(), LoginMode::Email);
}

#[test]
fn toggle_label_names_the_other_mode() {
    assert_eq!(LoginMode::Email.toggle_label(), "Switch to Room Login (Post-Check-In)");
    assert_eq!(LoginMode::Room.toggle_label(), "Switch to Email Login");
}

#[test]
fn validate_email_login_trims_email_only() {
    assert_eq!(
        validate_email_login("  a@b.com ", " pw "),
        Ok(SignIn::Email { email: "a@b.com".to_owned(), password: " pw ".to_owned() })
    );
}

#[test]
fn validate_email_login_requires_both_fields() {
    assert_eq!(validate_email_login("   ", "pw"), Err("Enter your email and password."));
    assert_eq!(validate_email_login("a@b.com", ""), Err("Enter your email and password."));
}

#[test]
fn validate_room_login_trims_both_fields() {
    assert_eq!(
        validate_room_login(" 204 ", " Ann Lee "),
        Ok(SignIn::Room { room_number: "204".to_owned(), full_name: "Ann Lee".to_owned() })
    );
}

#[test]
fn validate_room_login_requires_both_fields() {
    assert_eq!(validate_room_login("", "Ann Lee"), Err("Enter your room number and full name."));
    assert_eq!(validate_room_login("204", "  "), Err("Enter your room number and full name."));
}

#[test]
fn failure_message_is_generic() {
    assert_eq!(LOGIN_FAILED, "Invalid credentials");
}
