//! Project routes.

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

const SELECT: &str = "SELECT id, project_name, client, category, description, location, status,
     image, to_char(created_at, 'YYYY-MM-DD') AS created_at FROM projects";

const RETURNING: &str = "RETURNING id, project_name, client, category, description, location, status,
     image, to_char(created_at, 'YYYY-MM-DD') AS created_at";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub project_name: String,
    pub client: String,
    pub category: Option<Uuid>,
    pub description: String,
    pub location: String,
    pub status: String,
    pub image: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewProject {
    pub project_name: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub category: Option<Uuid>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectPatch {
    pub project_name: Option<String>,
    pub client: Option<String>,
    pub category: Option<Uuid>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub image: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(list).post(create))
        .route("/api/projects/{id}", get(fetch).patch(update).delete(remove))
}

async fn list(State(state): State<AppState>, _auth: AuthAdmin) -> Result<Json<Vec<ProjectRow>>, StatusCode> {
    let rows = sqlx::query_as::<_, ProjectRow>(&format!("{SELECT} ORDER BY created_at DESC"))
        .fetch_all(&state.pool)
        .await
        .map_err(|e| db_status("projects:list", &e))?;
    Ok(Json(rows))
}

async fn fetch(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectRow>, StatusCode> {
    let row = sqlx::query_as::<_, ProjectRow>(&format!("{SELECT} WHERE id = $1"))
        .bind(id)
        .fetch_optional(&state.pool)
        .await
        .map_err(|e| db_status("projects:get", &e))?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

async fn create(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(body): Json<NewProject>,
) -> Result<(StatusCode, Json<ProjectRow>), StatusCode> {
    let row = sqlx::query_as::<_, ProjectRow>(&format!(
        "INSERT INTO projects (id, project_name, client, category, description, location, status, image)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) {RETURNING}"
    ))
    .bind(Uuid::new_v4())
    .bind(&body.project_name)
    .bind(&body.client)
    .bind(body.category)
    .bind(&body.description)
    .bind(&body.location)
    .bind(&body.status)
    .bind(&body.image)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| db_status("projects:insert", &e))?;
    Ok((StatusCode::CREATED, Json(row)))
}

async fn update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(body): Json<ProjectPatch>,
) -> Result<Json<ProjectRow>, StatusCode> {
    let row = sqlx::query_as::<_, ProjectRow>(&format!(
        "UPDATE projects SET
             project_name = COALESCE($2, project_name),
             client = COALESCE($3, client),
             category = COALESCE($4, category),
             description = COALESCE($5, description),
             location = COALESCE($6, location),
             status = COALESCE($7, status),
             image = COALESCE($8, image)
         WHERE id = $1 {RETURNING}"
    ))
    .bind(id)
    .bind(body.project_name)
    .bind(body.client)
    .bind(body.category)
    .bind(body.description)
    .bind(body.location)
    .bind(body.status)
    .bind(body.image)
    .fetch_optional(&state.pool)
    .await
    .map_err(|e| db_status("projects:update", &e))?
    .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

async fn remove(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await
        .map_err(|e| db_status("projects:delete", &e))?;
    Ok(Json(serde_json::json!({ "ok": true, "deleted": result.rows_affected() > 0 })))
}
