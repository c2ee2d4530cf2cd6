use super::*;
use crate::services::auth::AuthError;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_AA_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_AA_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_AA_EB_INVALID__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_AA_EB_SURELY_UNSET__"), None);
}

// =============================================================================
// cookie construction
// =============================================================================

#[test]
fn session_cookie_is_http_only_lax() {
    let cookie = session_cookie("abc123".to_owned());
    assert_eq!(cookie.name(), "session_token");
    assert_eq!(cookie.value(), "abc123");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.path(), Some("/"));
}

#[test]
fn clear_session_cookie_expires_immediately() {
    let cookie = clear_session_cookie();
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

// =============================================================================
// auth_error_to_status
// =============================================================================

#[test]
fn bad_credentials_maps_to_401() {
    assert_eq!(auth_error_to_status(&AuthError::BadCredentials), StatusCode::UNAUTHORIZED);
}

#[test]
fn duplicate_email_maps_to_409() {
    assert_eq!(auth_error_to_status(&AuthError::DuplicateEmail), StatusCode::CONFLICT);
}

#[test]
fn invalid_email_maps_to_400() {
    assert_eq!(auth_error_to_status(&AuthError::InvalidEmail), StatusCode::BAD_REQUEST);
}

#[test]
fn weak_password_maps_to_400() {
    assert_eq!(auth_error_to_status(&AuthError::WeakPassword), StatusCode::BAD_REQUEST);
}
