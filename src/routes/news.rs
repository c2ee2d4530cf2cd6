//! News article routes.

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

const SELECT: &str = "SELECT id, headline, summary, content, image, featured_news,
     publish_immediately, to_char(created_at, 'YYYY-MM-DD') AS created_at FROM news";

const RETURNING: &str = "RETURNING id, headline, summary, content, image, featured_news,
     publish_immediately, to_char(created_at, 'YYYY-MM-DD') AS created_at";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct NewsRow {
    pub id: Uuid,
    pub headline: String,
    pub summary: String,
    pub content: String,
    pub image: String,
    pub featured_news: bool,
    pub publish_immediately: bool,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewNews {
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured_news: bool,
    #[serde(default)]
    pub publish_immediately: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewsPatch {
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub featured_news: Option<bool>,
    pub publish_immediately: Option<bool>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/news", get(list).post(create))
        .route("/api/news/{id}", get(fetch).patch(update).delete(remove))
}

async fn list(State(state): State<AppState>, _auth: AuthAdmin) -> Result<Json<Vec<NewsRow>>, StatusCode> {
    let rows = sqlx::query_as::<_, NewsRow>(&format!("{SELECT} ORDER BY created_at DESC"))
        .fetch_all(&state.pool)
        .await
        .map_err(|e| db_status("news:list", &e))?;
    Ok(Json(rows))
}

async fn fetch(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<NewsRow>, StatusCode> {
    let row = sqlx::query_as::<_, NewsRow>(&format!("{SELECT} WHERE id = $1"))
        .bind(id)
        .fetch_optional(&state.pool)
        .await
        .map_err(|e| db_status("news:get", &e))?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

async fn create(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(body): Json<NewNews>,
) -> Result<(StatusCode, Json<NewsRow>), StatusCode> {
    let row = sqlx::query_as::<_, NewsRow>(&format!(
        "INSERT INTO news (id, headline, summary, content, image, featured_news, publish_immediately)
         VALUES ($1, $2, $3, $4, $5, $6, $7) {RETURNING}"
    ))
    .bind(Uuid::new_v4())
    .bind(&body.headline)
    .bind(&body.summary)
    .bind(&body.content)
    .bind(&body.image)
    .bind(body.featured_news)
    .bind(body.publish_immediately)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| db_status("news:insert", &e))?;
    Ok((StatusCode::CREATED, Json(row)))
}

async fn update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(body): Json<NewsPatch>,
) -> Result<Json<NewsRow>, StatusCode> {
    let row = sqlx::query_as::<_, NewsRow>(&format!(
        "UPDATE news SET
             headline = COALESCE($2, headline),
             summary = COALESCE($3, summary),
             content = COALESCE($4, content),
             image = COALESCE($5, image),
             featured_news = COALESCE($6, featured_news),
             publish_immediately = COALESCE($7, publish_immediately)
         WHERE id = $1 {RETURNING}"
    ))
    .bind(id)
    .bind(body.headline)
    .bind(body.summary)
    .bind(body.content)
    .bind(body.image)
    .bind(body.featured_news)
    .bind(body.publish_immediately)
    .fetch_optional(&state.pool)
    .await
    .map_err(|e| db_status("news:update", &e))?
    .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

async fn remove(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let result = sqlx::query("DELETE FROM news WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await
        .map_err(|e| db_status("news:delete", &e))?;
    Ok(Json(serde_json::json!({ "ok": true, "deleted": result.rows_affected() > 0 })))
}
