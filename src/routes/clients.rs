//! Client (customer) routes.

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

const SELECT: &str = "SELECT id, client_name, email, mobile_number, location, company_name,
     client_logo_url, to_char(created_at, 'YYYY-MM-DD') AS created_at FROM clients";

const RETURNING: &str = "RETURNING id, client_name, email, mobile_number, location, company_name,
     client_logo_url, to_char(created_at, 'YYYY-MM-DD') AS created_at";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ClientRow {
    pub id: Uuid,
    pub client_name: String,
    pub email: String,
    pub mobile_number: String,
    pub location: String,
    pub company_name: String,
    pub client_logo_url: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewClient {
    pub client_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub client_logo_url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ClientPatch {
    pub client_name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub location: Option<String>,
    pub company_name: Option<String>,
    pub client_logo_url: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/clients", get(list).post(create))
        .route("/api/clients/{id}", get(fetch).patch(update).delete(remove))
}

async fn list(State(state): State<AppState>, _auth: AuthAdmin) -> Result<Json<Vec<ClientRow>>, StatusCode> {
    let rows = sqlx::query_as::<_, ClientRow>(&format!("{SELECT} ORDER BY created_at DESC"))
        .fetch_all(&state.pool)
        .await
        .map_err(|e| db_status("clients:list", &e))?;
    Ok(Json(rows))
}

async fn fetch(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ClientRow>, StatusCode> {
    let row = sqlx::query_as::<_, ClientRow>(&format!("{SELECT} WHERE id = $1"))
        .bind(id)
        .fetch_optional(&state.pool)
        .await
        .map_err(|e| db_status("clients:get", &e))?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

async fn create(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(body): Json<NewClient>,
) -> Result<(StatusCode, Json<ClientRow>), StatusCode> {
    let row = sqlx::query_as::<_, ClientRow>(&format!(
        "INSERT INTO clients (id, client_name, email, mobile_number, location, company_name, client_logo_url)
         VALUES ($1, $2, $3, $4, $5, $6, $7) {RETURNING}"
    ))
    .bind(Uuid::new_v4())
    .bind(&body.client_name)
    .bind(&body.email)
    .bind(&body.mobile_number)
    .bind(&body.location)
    .bind(&body.company_name)
    .bind(&body.client_logo_url)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| db_status("clients:insert", &e))?;
    Ok((StatusCode::CREATED, Json(row)))
}

async fn update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(body): Json<ClientPatch>,
) -> Result<Json<ClientRow>, StatusCode> {
    let row = sqlx::query_as::<_, ClientRow>(&format!(
        "UPDATE clients SET
             client_name = COALESCE($2, client_name),
             email = COALESCE($3, email),
             mobile_number = COALESCE($4, mobile_number),
             location = COALESCE($5, location),
             company_name = COALESCE($6, company_name),
             client_logo_url = COALESCE($7, client_logo_url)
         WHERE id = $1 {RETURNING}"
    ))
    .bind(id)
    .bind(body.client_name)
    .bind(body.email)
    .bind(body.mobile_number)
    .bind(body.location)
    .bind(body.company_name)
    .bind(body.client_logo_url)
    .fetch_optional(&state.pool)
    .await
    .map_err(|e| db_status("clients:update", &e))?
    .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

async fn remove(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let result = sqlx::query("DELETE FROM clients WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await
        .map_err(|e| db_status("clients:delete", &e))?;
    Ok(Json(serde_json::json!({ "ok": true, "deleted": result.rows_affected() > 0 })))
}
