//! Object storage for uploaded media.
//!
//! DESIGN
//! ======
//! Uploads land on local disk under `MEDIA_ROOT/<bucket>/`, and the whole
//! media root is served read-only at `/uploads` by the router. Buckets are a
//! fixed allowlist; object names are sanitized and prefixed with a UUID so
//! repeated uploads of the same filename never collide.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Buckets the admin screens upload into.
pub const BUCKETS: &[&str] = &[
    "blog-images",
    "news-images",
    "project-images",
    "client-images",
    "member-images",
    "slider-images",
];

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("unknown bucket: {0}")]
    UnknownBucket(String),
    #[error("invalid object name: {0}")]
    InvalidName(String),
    #[error("empty upload body")]
    EmptyObject,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A stored object and the URL it is reachable at.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoredObject {
    pub bucket: String,
    pub object: String,
    pub public_url: String,
}

/// Resolve the media root directory from `MEDIA_ROOT` (default `./media`).
#[must_use]
pub fn media_root() -> PathBuf {
    std::env::var("MEDIA_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./media"))
}

#[must_use]
pub fn is_known_bucket(bucket: &str) -> bool {
    BUCKETS.contains(&bucket)
}

/// Reduce a client-supplied filename to a safe object name component.
/// Returns `None` when nothing safe remains (e.g. `..` or an empty string).
#[must_use]
pub fn sanitize_filename(filename: &str) -> Option<String> {
    let safe: String = filename
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    let safe = safe.trim_matches('.').to_owned();
    if safe.is_empty() || safe.chars().all(|c| c == '_') {
        return None;
    }
    Some(safe)
}

/// Build a collision-free object name from a sanitized filename.
#[must_use]
pub fn unique_object_name(filename: &str) -> String {
    format!("{}-{filename}", Uuid::new_v4())
}

/// Public URL for a stored object, matching the `/uploads` serve mount.
#[must_use]
pub fn public_url(bucket: &str, object: &str) -> String {
    format!("/uploads/{bucket}/{object}")
}

/// Persist an upload body into a bucket.
///
/// # Errors
///
/// Returns `UnknownBucket`/`InvalidName`/`EmptyObject` on rejected input and
/// an io error if the write fails. Nothing is persisted on failure.
pub async fn save_object(
    media_root: &Path,
    bucket: &str,
    filename: &str,
    bytes: &[u8],
) -> Result<StoredObject, StorageError> {
    if !is_known_bucket(bucket) {
        return Err(StorageError::UnknownBucket(bucket.to_owned()));
    }
    let safe = sanitize_filename(filename).ok_or_else(|| StorageError::InvalidName(filename.to_owned()))?;
    if bytes.is_empty() {
        return Err(StorageError::EmptyObject);
    }

    let object = unique_object_name(&safe);
    let dir = media_root.join(bucket);
    tokio::fs::create_dir_all(&dir).await?;
    tokio::fs::write(dir.join(&object), bytes).await?;

    Ok(StoredObject {
        bucket: bucket.to_owned(),
        object: object.clone(),
        public_url: public_url(bucket, &object),
    })
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
