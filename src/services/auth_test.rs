use super::*;

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_lowercases_and_trims() {
    assert_eq!(normalize_email("  Admin@Example.COM "), Some("admin@example.com".to_owned()));
}

#[test]
fn normalize_email_rejects_missing_at() {
    assert_eq!(normalize_email("adminexample.com"), None);
}

#[test]
fn normalize_email_rejects_empty_local_part() {
    assert_eq!(normalize_email("@example.com"), None);
}

#[test]
fn normalize_email_rejects_empty_domain() {
    assert_eq!(normalize_email("admin@"), None);
}

#[test]
fn normalize_email_rejects_double_at() {
    assert_eq!(normalize_email("a@b@c"), None);
}

// =============================================================================
// hash_password
// =============================================================================

#[test]
fn hash_password_is_64_hex_chars() {
    let hash = hash_password("correct horse", "00ff");
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn hash_password_same_inputs_same_digest() {
    assert_eq!(hash_password("secret123", "ab"), hash_password("secret123", "ab"));
}

#[test]
fn hash_password_salt_changes_digest() {
    assert_ne!(hash_password("secret123", "ab"), hash_password("secret123", "cd"));
}

#[test]
fn hash_password_password_changes_digest() {
    assert_ne!(hash_password("secret123", "ab"), hash_password("secret124", "ab"));
}

// =============================================================================
// generate_salt
// =============================================================================

#[test]
fn generate_salt_is_32_hex_chars() {
    let salt = generate_salt();
    assert_eq!(salt.len(), 32);
    assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_salt_two_calls_differ() {
    assert_ne!(generate_salt(), generate_salt());
}

// =============================================================================
// Account lifecycle against a live database
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use crate::state::test_helpers;

    #[tokio::test]
    async fn create_then_authenticate() {
        let state = test_helpers::live_app_state().await;
        let email = format!("auth-{}@test.example", Uuid::new_v4());

        let id = create_user(&state.pool, &email, "building-site-7").await.expect("create");
        let resolved = authenticate(&state.pool, &email, "building-site-7").await.expect("auth");
        assert_eq!(id, resolved);
    }

    #[tokio::test]
    async fn wrong_password_is_bad_credentials() {
        let state = test_helpers::live_app_state().await;
        let email = format!("auth-{}@test.example", Uuid::new_v4());
        create_user(&state.pool, &email, "building-site-7").await.expect("create");

        let err = authenticate(&state.pool, &email, "wrong-password").await.unwrap_err();
        assert!(matches!(err, AuthError::BadCredentials));
    }

    #[tokio::test]
    async fn duplicate_email_rejected() {
        let state = test_helpers::live_app_state().await;
        let email = format!("auth-{}@test.example", Uuid::new_v4());
        create_user(&state.pool, &email, "building-site-7").await.expect("create");

        let err = create_user(&state.pool, &email, "another-pass-9").await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
    }

    #[tokio::test]
    async fn weak_password_rejected_without_insert() {
        let state = test_helpers::live_app_state().await;
        let email = format!("auth-{}@test.example", Uuid::new_v4());

        let err = create_user(&state.pool, &email, "short").await.unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword));
        let err = authenticate(&state.pool, &email, "short").await.unwrap_err();
        assert!(matches!(err, AuthError::BadCredentials));
    }
}
