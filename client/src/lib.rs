//! # client
//!
//! Leptos + WASM frontend for the Arrow Structures admin back-office.
//! Every management screen loads records from the server's JSON API,
//! renders a table or form, and writes edits back; the session gate
//! decides which chrome wraps the current route.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
