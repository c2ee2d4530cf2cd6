//! Project category routes.

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

const SELECT: &str = "SELECT id, project_category_name, description,
     to_char(created_at, 'YYYY-MM-DD') AS created_at FROM project_category";

const RETURNING: &str = "RETURNING id, project_category_name, description,
     to_char(created_at, 'YYYY-MM-DD') AS created_at";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProjectCategoryRow {
    pub id: Uuid,
    pub project_category_name: String,
    pub description: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewProjectCategory {
    pub project_category_name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectCategoryPatch {
    pub project_category_name: Option<String>,
    pub description: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/project-categories", get(list).post(create))
        .route("/api/project-categories/{id}", get(fetch).patch(update).delete(remove))
}

async fn list(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> Result<Json<Vec<ProjectCategoryRow>>, StatusCode> {
    let rows = sqlx::query_as::<_, ProjectCategoryRow>(&format!("{SELECT} ORDER BY created_at DESC"))
        .fetch_all(&state.pool)
        .await
        .map_err(|e| db_status("project-categories:list", &e))?;
    Ok(Json(rows))
}

async fn fetch(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectCategoryRow>, StatusCode> {
    let row = sqlx::query_as::<_, ProjectCategoryRow>(&format!("{SELECT} WHERE id = $1"))
        .bind(id)
        .fetch_optional(&state.pool)
        .await
        .map_err(|e| db_status("project-categories:get", &e))?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

async fn create(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(body): Json<NewProjectCategory>,
) -> Result<(StatusCode, Json<ProjectCategoryRow>), StatusCode> {
    let row = sqlx::query_as::<_, ProjectCategoryRow>(&format!(
        "INSERT INTO project_category (id, project_category_name, description)
         VALUES ($1, $2, $3) {RETURNING}"
    ))
    .bind(Uuid::new_v4())
    .bind(&body.project_category_name)
    .bind(&body.description)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| db_status("project-categories:insert", &e))?;
    Ok((StatusCode::CREATED, Json(row)))
}

async fn update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(body): Json<ProjectCategoryPatch>,
) -> Result<Json<ProjectCategoryRow>, StatusCode> {
    let row = sqlx::query_as::<_, ProjectCategoryRow>(&format!(
        "UPDATE project_category SET
             project_category_name = COALESCE($2, project_category_name),
             description = COALESCE($3, description)
         WHERE id = $1 {RETURNING}"
    ))
    .bind(id)
    .bind(body.project_category_name)
    .bind(body.description)
    .fetch_optional(&state.pool)
    .await
    .map_err(|e| db_status("project-categories:update", &e))?
    .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

async fn remove(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let result = sqlx::query("DELETE FROM project_category WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await
        .map_err(|e| db_status("project-categories:delete", &e))?;
    Ok(Json(serde_json::json!({ "ok": true, "deleted": result.rows_affected() > 0 })))
}
