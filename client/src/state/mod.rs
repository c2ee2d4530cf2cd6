//! Shared reactive state provided through Leptos context.

pub mod records;
pub mod session;
pub mod ui;
