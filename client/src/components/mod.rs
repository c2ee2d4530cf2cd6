//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin chrome and shared form widgets while reading
//! shared state from Leptos context providers. `session_gate` owns the
//! session snapshot every other component reads.

pub mod app_header;
pub mod app_sidebar;
pub mod image_upload;
pub mod loading_screen;
pub mod session_gate;
pub mod toast_host;
