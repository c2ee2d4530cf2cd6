//! Homepage slider routes.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::auth::AuthAdmin;
use crate::routes::db_status;
use crate::state::AppState;

const SELECT: &str = "SELECT id, title, description, slider_image,
     to_char(created_at, 'YYYY-MM-DD') AS created_at FROM slider";

const RETURNING: &str = "RETURNING id, title, description, slider_image,
     to_char(created_at, 'YYYY-MM-DD') AS created_at";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SlideRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub slider_image: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewSlide {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub slider_image: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SlidePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub slider_image: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/slider", get(list).post(create))
        .route("/api/slider/{id}", get(fetch).patch(update).delete(remove))
}

async fn list(State(state): State<AppState>, _auth: AuthAdmin) -> Result<Json<Vec<SlideRow>>, StatusCode> {
    let rows = sqlx::query_as::<_, SlideRow>(&format!("{SELECT} ORDER BY created_at DESC"))
        .fetch_all(&state.pool)
        .await
        .map_err(|e| db_status("slider:list", &e))?;
    Ok(Json(rows))
}

async fn fetch(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<SlideRow>, StatusCode> {
    let row = sqlx::query_as::<_, SlideRow>(&format!("{SELECT} WHERE id = $1"))
        .bind(id)
        .fetch_optional(&state.pool)
        .await
        .map_err(|e| db_status("slider:get", &e))?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

async fn create(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(body): Json<NewSlide>,
) -> Result<(StatusCode, Json<SlideRow>), StatusCode> {
    let row = sqlx::query_as::<_, SlideRow>(&format!(
        "INSERT INTO slider (id, title, description, slider_image) VALUES ($1, $2, $3, $4) {RETURNING}"
    ))
    .bind(Uuid::new_v4())
    .bind(&body.title)
    .bind(&body.description)
    .bind(&body.slider_image)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| db_status("slider:insert", &e))?;
    Ok((StatusCode::CREATED, Json(row)))
}

async fn update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(body): Json<SlidePatch>,
) -> Result<Json<SlideRow>, StatusCode> {
    let row = sqlx::query_as::<_, SlideRow>(&format!(
        "UPDATE slider SET
             title = COALESCE($2, title),
             description = COALESCE($3, description),
             slider_image = COALESCE($4, slider_image)
         WHERE id = $1 {RETURNING}"
    ))
    .bind(id)
    .bind(body.title)
    .bind(body.description)
    .bind(body.slider_image)
    .fetch_optional(&state.pool)
    .await
    .map_err(|e| db_status("slider:update", &e))?
    .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

async fn remove(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let result = sqlx::query("DELETE FROM slider WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await
        .map_err(|e| db_status("slider:delete", &e))?;
    Ok(Json(serde_json::json!({ "ok": true, "deleted": result.rows_affected() > 0 })))
}
