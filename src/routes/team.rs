//! Team member routes.

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

const SELECT: &str = "SELECT id, name, email, mobile_number, designation, profile_image,
     to_char(created_at, 'YYYY-MM-DD') AS created_at FROM team_members";

const RETURNING: &str = "RETURNING id, name, email, mobile_number, designation, profile_image,
     to_char(created_at, 'YYYY-MM-DD') AS created_at";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TeamMemberRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub designation: String,
    pub profile_image: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewTeamMember {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub profile_image: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub designation: Option<String>,
    pub profile_image: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/team-members", get(list).post(create))
        .route("/api/team-members/{id}", get(fetch).patch(update).delete(remove))
}

async fn list(State(state): State<AppState>, _auth: AuthAdmin) -> Result<Json<Vec<TeamMemberRow>>, StatusCode> {
    let rows = sqlx::query_as::<_, TeamMemberRow>(&format!("{SELECT} ORDER BY created_at DESC"))
        .fetch_all(&state.pool)
        .await
        .map_err(|e| db_status("team-members:list", &e))?;
    Ok(Json(rows))
}

async fn fetch(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamMemberRow>, StatusCode> {
    let row = sqlx::query_as::<_, TeamMemberRow>(&format!("{SELECT} WHERE id = $1"))
        .bind(id)
        .fetch_optional(&state.pool)
        .await
        .map_err(|e| db_status("team-members:get", &e))?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

async fn create(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(body): Json<NewTeamMember>,
) -> Result<(StatusCode, Json<TeamMemberRow>), StatusCode> {
    let row = sqlx::query_as::<_, TeamMemberRow>(&format!(
        "INSERT INTO team_members (id, name, email, mobile_number, designation, profile_image)
         VALUES ($1, $2, $3, $4, $5, $6) {RETURNING}"
    ))
    .bind(Uuid::new_v4())
    .bind(&body.name)
    .bind(&body.email)
    .bind(&body.mobile_number)
    .bind(&body.designation)
    .bind(&body.profile_image)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| db_status("team-members:insert", &e))?;
    Ok((StatusCode::CREATED, Json(row)))
}

async fn update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(body): Json<TeamMemberPatch>,
) -> Result<Json<TeamMemberRow>, StatusCode> {
    let row = sqlx::query_as::<_, TeamMemberRow>(&format!(
        "UPDATE team_members SET
             name = COALESCE($2, name),
             email = COALESCE($3, email),
             mobile_number = COALESCE($4, mobile_number),
             designation = COALESCE($5, designation),
             profile_image = COALESCE($6, profile_image)
         WHERE id = $1 {RETURNING}"
    ))
    .bind(id)
    .bind(body.name)
    .bind(body.email)
    .bind(body.mobile_number)
    .bind(body.designation)
    .bind(body.profile_image)
    .fetch_optional(&state.pool)
    .await
    .map_err(|e| db_status("team-members:update", &e))?
    .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

async fn remove(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await
        .map_err(|e| db_status("team-members:delete", &e))?;
    Ok(Json(serde_json::json!({ "ok": true, "deleted": result.rows_affected() > 0 })))
}
