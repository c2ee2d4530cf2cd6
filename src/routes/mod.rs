//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the record-store API, the auth endpoints, uploaded
//! media, and Leptos SSR rendering under a single Axum router. The admin UI
//! is served by Leptos for every app route; `/api` is plain JSON.

pub mod auth;
pub mod blogs;
pub mod careers;
pub mod clients;
pub mod news;
pub mod project_categories;
pub mod projects;
pub mod slider;
pub mod team;
pub mod uploads;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Map a database failure to a 500, logging it at the call site's context.
pub(crate) fn db_status(context: &str, err: &sqlx::Error) -> StatusCode {
    tracing::error!(error = %err, context, "record store query failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// JSON record-store API: one uniform CRUD surface per resource.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/login", axum::routing::post(auth::login))
        .route("/api/auth/signup", axum::routing::post(auth::signup))
        .route("/api/auth/logout", axum::routing::post(auth::logout))
        .merge(blogs::routes())
        .merge(news::routes())
        .merge(projects::routes())
        .merge(project_categories::routes())
        .merge(clients::routes())
        .merge(careers::routes())
        .merge(team::routes())
        .merge(slider::routes())
        .merge(uploads::routes())
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Leptos SSR frontend: API routes + SSR app + uploaded media at `/uploads`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let media_service = ServeDir::new(state.media_root.clone());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/uploads", media_service)
        .fallback_service(ServeDir::new(site_root_path)))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
