use super::*;

#[test]
fn same_origin_uses_relative_paths() {
    let api = HttpAuthApi::same_origin();
    assert_eq!(api.url(ME_PATH), "/api/auth/me");
    assert_eq!(api.url(GUEST_LOGIN_PATH), "/api/auth/guest-login");
}

#[test]
fn base_url_is_prefixed_without_double_slash() {
    let api = HttpAuthApi::with_base_url("https://lodge.test/");
    assert_eq!(api.url(LOGIN_PATH), "https://lodge.test/api/auth/login");
    assert_eq!(api.url(REGISTER_PATH), "https://lodge.test/api/auth/register");
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn server_side_calls_report_unavailable() {
    let api = HttpAuthApi::same_origin();
    let err = api.me("abc123").await.expect_err("no transport on server");
    assert_eq!(err, AuthError::Network(SERVER_UNAVAILABLE.to_owned()));

    let err = api.login(&LoginRequest { email: "a@b.com", password: "pw" }).await.expect_err("no transport");
    assert!(matches!(err, AuthError::Network(_)));
}
