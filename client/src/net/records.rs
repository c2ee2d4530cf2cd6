//! Generic record-store client.
//!
//! DESIGN
//! ======
//! Every resource exposes the same five operations, so the HTTP plumbing is
//! written once and parameterized by resource name and record type. Pages
//! never build URLs themselves.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

/// Resource names as they appear in `/api/{resource}` paths.
pub mod resources {
    pub const BLOGS: &str = "blogs";
    pub const BLOG_CATEGORIES: &str = "blog-categories";
    pub const NEWS: &str = "news";
    pub const PROJECTS: &str = "projects";
    pub const PROJECT_CATEGORIES: &str = "project-categories";
    pub const CLIENTS: &str = "clients";
    pub const CAREERS: &str = "careers";
    pub const TEAM_MEMBERS: &str = "team-members";
    pub const SLIDER: &str = "slider";
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn collection_endpoint(resource: &str) -> String {
    format!("/api/{resource}")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn record_endpoint(resource: &str, id: &str) -> String {
    format!("/api/{resource}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(resource: &str, status: u16) -> String {
    match status {
        404 => format!("{resource}: not found"),
        401 => "session expired, sign in again".to_owned(),
        _ => format!("{resource}: request failed ({status})"),
    }
}

/// `GET /api/{resource}` — fetch all records.
///
/// # Errors
///
/// Returns a message when the request fails or the body cannot be decoded.
#[cfg(feature = "hydrate")]
pub async fn list<T: DeserializeOwned>(resource: &str) -> Result<Vec<T>, String> {
    let resp = gloo_net::http::Request::get(&collection_endpoint(resource))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resource, resp.status()));
    }
    resp.json::<Vec<T>>().await.map_err(|e| e.to_string())
}

/// `GET /api/{resource}/{id}` — fetch one record.
///
/// # Errors
///
/// Returns a message when the record is absent or the request fails.
#[cfg(feature = "hydrate")]
pub async fn get<T: DeserializeOwned>(resource: &str, id: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(&record_endpoint(resource, id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resource, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// `POST /api/{resource}` — insert a record, returning the stored row.
///
/// # Errors
///
/// Returns a message when the write is rejected or the request fails.
#[cfg(feature = "hydrate")]
pub async fn insert<T: DeserializeOwned, B: Serialize>(resource: &str, body: &B) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(&collection_endpoint(resource))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resource, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// `PATCH /api/{resource}/{id}` — update a record, returning the stored row.
///
/// # Errors
///
/// Returns a message when the write is rejected or the request fails.
#[cfg(feature = "hydrate")]
pub async fn update<T: DeserializeOwned, B: Serialize>(resource: &str, id: &str, body: &B) -> Result<T, String> {
    let resp = gloo_net::http::Request::patch(&record_endpoint(resource, id))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resource, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// `DELETE /api/{resource}/{id}` — delete a record (no-op when absent).
///
/// # Errors
///
/// Returns a message when the request fails.
#[cfg(feature = "hydrate")]
pub async fn delete(resource: &str, id: &str) -> Result<(), String> {
    let resp = gloo_net::http::Request::delete(&record_endpoint(resource, id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resource, resp.status()));
    }
    Ok(())
}
