//! Password auth service.
//!
//! Accounts are email + password; passwords are stored as salted SHA-256
//! digests. Verification recomputes the digest with the stored salt and
//! compares in constant length (both sides are fixed-width hex).

use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::services::session::bytes_to_hex;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    WeakPassword,
    #[error("email already registered")]
    DuplicateEmail,
    #[error("invalid email or password")]
    BadCredentials,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[must_use]
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Create an admin user, returning its id.
///
/// # Errors
///
/// Returns `InvalidEmail`/`WeakPassword` on rejected input, `DuplicateEmail`
/// when the address is already registered, or a database error.
pub async fn create_user(pool: &PgPool, email: &str, password: &str) -> Result<Uuid, AuthError> {
    let normalized = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword);
    }

    let id = Uuid::new_v4();
    let salt = generate_salt();
    let hash = hash_password(password, &salt);

    let result = sqlx::query(
        "INSERT INTO admin_users (id, email, password_hash, password_salt)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(id)
    .bind(&normalized)
    .bind(hash)
    .bind(salt)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AuthError::DuplicateEmail);
    }
    Ok(id)
}

/// Verify credentials, returning the user id on success.
///
/// # Errors
///
/// Returns `BadCredentials` for an unknown address or a wrong password; the
/// two cases are deliberately indistinguishable to callers.
pub async fn authenticate(pool: &PgPool, email: &str, password: &str) -> Result<Uuid, AuthError> {
    let normalized = normalize_email(email).ok_or(AuthError::BadCredentials)?;

    let row = sqlx::query("SELECT id, password_hash, password_salt FROM admin_users WHERE email = $1")
        .bind(&normalized)
        .fetch_optional(pool)
        .await?
        .ok_or(AuthError::BadCredentials)?;

    let stored_hash: String = row.get("password_hash");
    let salt: String = row.get("password_salt");
    if hash_password(password, &salt) != stored_hash {
        return Err(AuthError::BadCredentials);
    }
    Ok(row.get("id"))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
