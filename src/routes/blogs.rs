//! Blog post routes, plus the read-only blog category lookup.

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

const SELECT: &str = "SELECT id, title, content, excerpt, category, tag, image, featured_post,
     publish_immediately, to_char(created_at, 'YYYY-MM-DD') AS created_at FROM blogs";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct BlogRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: Option<Uuid>,
    pub tag: String,
    pub image: String,
    pub featured_post: bool,
    pub publish_immediately: bool,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewBlog {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub category: Option<Uuid>,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured_post: bool,
    #[serde(default)]
    pub publish_immediately: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<Uuid>,
    pub tag: Option<String>,
    pub image: Option<String>,
    pub featured_post: Option<bool>,
    pub publish_immediately: Option<bool>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct BlogCategoryRow {
    pub id: Uuid,
    pub category_name: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/blogs", get(list).post(create))
        .route("/api/blogs/{id}", get(fetch).patch(update).delete(remove))
        .route("/api/blog-categories", get(list_categories))
}

/// `GET /api/blogs` — newest first.
async fn list(State(state): State<AppState>, _auth: AuthAdmin) -> Result<Json<Vec<BlogRow>>, StatusCode> {
    let rows = sqlx::query_as::<_, BlogRow>(&format!("{SELECT} ORDER BY created_at DESC"))
        .fetch_all(&state.pool)
        .await
        .map_err(|e| db_status("blogs:list", &e))?;
    Ok(Json(rows))
}

/// `GET /api/blogs/:id`
async fn fetch(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogRow>, StatusCode> {
    let row = sqlx::query_as::<_, BlogRow>(&format!("{SELECT} WHERE id = $1"))
        .bind(id)
        .fetch_optional(&state.pool)
        .await
        .map_err(|e| db_status("blogs:get", &e))?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

/// `POST /api/blogs`
async fn create(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(body): Json<NewBlog>,
) -> Result<(StatusCode, Json<BlogRow>), StatusCode> {
    let row = sqlx::query_as::<_, BlogRow>(
        "INSERT INTO blogs (id, title, content, excerpt, category, tag, image, featured_post, publish_immediately)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING id, title, content, excerpt, category, tag, image, featured_post, publish_immediately,
             to_char(created_at, 'YYYY-MM-DD') AS created_at",
    )
    .bind(Uuid::new_v4())
    .bind(&body.title)
    .bind(&body.content)
    .bind(&body.excerpt)
    .bind(body.category)
    .bind(&body.tag)
    .bind(&body.image)
    .bind(body.featured_post)
    .bind(body.publish_immediately)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| db_status("blogs:insert", &e))?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `PATCH /api/blogs/:id` — absent fields keep their stored values.
async fn update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(body): Json<BlogPatch>,
) -> Result<Json<BlogRow>, StatusCode> {
    let row = sqlx::query_as::<_, BlogRow>(
        "UPDATE blogs SET
             title = COALESCE($2, title),
             content = COALESCE($3, content),
             excerpt = COALESCE($4, excerpt),
             category = COALESCE($5, category),
             tag = COALESCE($6, tag),
             image = COALESCE($7, image),
             featured_post = COALESCE($8, featured_post),
             publish_immediately = COALESCE($9, publish_immediately)
         WHERE id = $1
         RETURNING id, title, content, excerpt, category, tag, image, featured_post, publish_immediately,
             to_char(created_at, 'YYYY-MM-DD') AS created_at",
    )
    .bind(id)
    .bind(body.title)
    .bind(body.content)
    .bind(body.excerpt)
    .bind(body.category)
    .bind(body.tag)
    .bind(body.image)
    .bind(body.featured_post)
    .bind(body.publish_immediately)
    .fetch_optional(&state.pool)
    .await
    .map_err(|e| db_status("blogs:update", &e))?
    .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

/// `DELETE /api/blogs/:id` — deleting an absent id is a no-op success.
async fn remove(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await
        .map_err(|e| db_status("blogs:delete", &e))?;
    Ok(Json(serde_json::json!({ "ok": true, "deleted": result.rows_affected() > 0 })))
}

/// `GET /api/blog-categories` — seeded lookup used by the blog forms.
async fn list_categories(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> Result<Json<Vec<BlogCategoryRow>>, StatusCode> {
    let rows = sqlx::query_as::<_, BlogCategoryRow>(
        "SELECT id, category_name FROM blogs_category ORDER BY category_name",
    )
    .fetch_all(&state.pool)
    .await
    .map_err(|e| db_status("blog-categories:list", &e))?;
    Ok(Json(rows))
}
