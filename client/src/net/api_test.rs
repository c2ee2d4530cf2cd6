use super::*;

// =============================================================================
// endpoint construction
// =============================================================================

#[test]
fn upload_endpoint_includes_bucket_and_filename() {
    assert_eq!(
        upload_endpoint("client-images", "logo.png"),
        "/api/uploads/client-images?filename=logo.png"
    );
}

// =============================================================================
// failure messages
// =============================================================================

#[test]
fn sign_in_401_is_user_facing() {
    assert_eq!(sign_in_failed_message(401), "Invalid email or password.");
}

#[test]
fn sign_in_other_statuses_carry_code() {
    assert_eq!(sign_in_failed_message(502), "sign in failed: 502");
}

#[test]
fn sign_up_409_mentions_existing_account() {
    assert_eq!(sign_up_failed_message(409), "That email is already registered.");
}

#[test]
fn sign_up_400_explains_requirements() {
    assert!(sign_up_failed_message(400).contains("at least 8 characters"));
}

#[test]
fn sign_up_other_statuses_carry_code() {
    assert_eq!(sign_up_failed_message(500), "sign up failed: 500");
}
