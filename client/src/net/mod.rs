//! Typed HTTP layer over the server's JSON API.

pub mod api;
pub mod records;
pub mod types;
