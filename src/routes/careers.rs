//! Career posting routes.
//!
//! Salary bounds are numeric (`DOUBLE PRECISION`, nullable). The client
//! converts its text inputs before the write, so the API only ever sees
//! numbers or nulls here.

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

const SELECT: &str = "SELECT id, job_title, department, location, job_type, job_description,
     requirements, benefits, min_salary, max_salary, remote_work_available, publish_immediately,
     to_char(created_at, 'YYYY-MM-DD') AS created_at FROM careers";

const RETURNING: &str = "RETURNING id, job_title, department, location, job_type, job_description,
     requirements, benefits, min_salary, max_salary, remote_work_available, publish_immediately,
     to_char(created_at, 'YYYY-MM-DD') AS created_at";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CareerRow {
    pub id: Uuid,
    pub job_title: String,
    pub department: String,
    pub location: String,
    pub job_type: String,
    pub job_description: String,
    pub requirements: String,
    pub benefits: String,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub remote_work_available: bool,
    pub publish_immediately: bool,
    pub created_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewCareer {
    pub job_title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub benefits: String,
    #[serde(default)]
    pub min_salary: Option<f64>,
    #[serde(default)]
    pub max_salary: Option<f64>,
    #[serde(default)]
    pub remote_work_available: bool,
    #[serde(default)]
    pub publish_immediately: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct CareerPatch {
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub job_description: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub remote_work_available: Option<bool>,
    pub publish_immediately: Option<bool>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/careers", get(list).post(create))
        .route("/api/careers/{id}", get(fetch).patch(update).delete(remove))
}

async fn list(State(state): State<AppState>, _auth: AuthAdmin) -> Result<Json<Vec<CareerRow>>, StatusCode> {
    let rows = sqlx::query_as::<_, CareerRow>(&format!("{SELECT} ORDER BY created_at DESC"))
        .fetch_all(&state.pool)
        .await
        .map_err(|e| db_status("careers:list", &e))?;
    Ok(Json(rows))
}

async fn fetch(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<CareerRow>, StatusCode> {
    let row = sqlx::query_as::<_, CareerRow>(&format!("{SELECT} WHERE id = $1"))
        .bind(id)
        .fetch_optional(&state.pool)
        .await
        .map_err(|e| db_status("careers:get", &e))?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

async fn create(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(body): Json<NewCareer>,
) -> Result<(StatusCode, Json<CareerRow>), StatusCode> {
    let row = sqlx::query_as::<_, CareerRow>(&format!(
        "INSERT INTO careers (id, job_title, department, location, job_type, job_description,
             requirements, benefits, min_salary, max_salary, remote_work_available, publish_immediately)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) {RETURNING}"
    ))
    .bind(Uuid::new_v4())
    .bind(&body.job_title)
    .bind(&body.department)
    .bind(&body.location)
    .bind(&body.job_type)
    .bind(&body.job_description)
    .bind(&body.requirements)
    .bind(&body.benefits)
    .bind(body.min_salary)
    .bind(body.max_salary)
    .bind(body.remote_work_available)
    .bind(body.publish_immediately)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| db_status("careers:insert", &e))?;
    Ok((StatusCode::CREATED, Json(row)))
}

async fn update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(body): Json<CareerPatch>,
) -> Result<Json<CareerRow>, StatusCode> {
    let row = sqlx::query_as::<_, CareerRow>(&format!(
        "UPDATE careers SET
             job_title = COALESCE($2, job_title),
             department = COALESCE($3, department),
             location = COALESCE($4, location),
             job_type = COALESCE($5, job_type),
             job_description = COALESCE($6, job_description),
             requirements = COALESCE($7, requirements),
             benefits = COALESCE($8, benefits),
             min_salary = COALESCE($9, min_salary),
             max_salary = COALESCE($10, max_salary),
             remote_work_available = COALESCE($11, remote_work_available),
             publish_immediately = COALESCE($12, publish_immediately)
         WHERE id = $1 {RETURNING}"
    ))
    .bind(id)
    .bind(body.job_title)
    .bind(body.department)
    .bind(body.location)
    .bind(body.job_type)
    .bind(body.job_description)
    .bind(body.requirements)
    .bind(body.benefits)
    .bind(body.min_salary)
    .bind(body.max_salary)
    .bind(body.remote_work_available)
    .bind(body.publish_immediately)
    .fetch_optional(&state.pool)
    .await
    .map_err(|e| db_status("careers:update", &e))?
    .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

async fn remove(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let result = sqlx::query("DELETE FROM careers WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await
        .map_err(|e| db_status("careers:delete", &e))?;
    Ok(Json(serde_json::json!({ "ok": true, "deleted": result.rows_affected() > 0 })))
}

#[cfg(test)]
#[path = "careers_test.rs"]
mod tests;
