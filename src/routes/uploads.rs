//! Upload route — raw image bytes into a named storage bucket.

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::post;
use serde::Deserialize;

use crate::routes::auth::AuthAdmin;
use crate::services::storage::{self, StorageError, StoredObject};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub filename: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/uploads/{bucket}", post(upload))
}

fn storage_error_to_status(err: &StorageError) -> StatusCode {
    match err {
        StorageError::UnknownBucket(_) | StorageError::InvalidName(_) | StorageError::EmptyObject => {
            StatusCode::BAD_REQUEST
        }
        StorageError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /api/uploads/:bucket?filename=...` — body is the file content.
async fn upload(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(bucket): Path<String>,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> Result<Json<StoredObject>, StatusCode> {
    let stored = storage::save_object(&state.media_root, &bucket, &query.filename, &body)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, bucket, "upload rejected");
            storage_error_to_status(&e)
        })?;
    Ok(Json(stored))
}

#[cfg(test)]
#[path = "uploads_test.rs"]
mod tests;
