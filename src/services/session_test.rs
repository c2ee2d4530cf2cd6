use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    let a = generate_token();
    let b = generate_token();
    assert_ne!(a, b);
}

// =============================================================================
// SessionIdentity
// =============================================================================

#[test]
fn session_identity_serializes_email() {
    let identity = SessionIdentity { id: Uuid::nil(), email: "ops@arrowstructures.example".into() };
    let json = serde_json::to_value(&identity).unwrap();
    assert_eq!(json["email"], "ops@arrowstructures.example");
    assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
}

// =============================================================================
// Session lifecycle against a live database
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use crate::services::auth;
    use crate::state::test_helpers;

    #[tokio::test]
    async fn create_validate_delete_round_trip() {
        let state = test_helpers::live_app_state().await;
        let email = format!("session-{}@test.example", Uuid::new_v4());
        let user_id = auth::create_user(&state.pool, &email, "hunter2hunter2")
            .await
            .expect("user create");

        let token = create_session(&state.pool, user_id).await.expect("session create");
        let identity = validate_session(&state.pool, &token)
            .await
            .expect("validate query")
            .expect("session should resolve");
        assert_eq!(identity.id, user_id);
        assert_eq!(identity.email, email);

        delete_session(&state.pool, &token).await.expect("session delete");
        let gone = validate_session(&state.pool, &token).await.expect("validate query");
        assert!(gone.is_none());
    }

    #[tokio::test]
    async fn validate_unknown_token_is_none() {
        let state = test_helpers::live_app_state().await;
        let result = validate_session(&state.pool, "not-a-real-token").await.expect("query");
        assert!(result.is_none());
    }
}
