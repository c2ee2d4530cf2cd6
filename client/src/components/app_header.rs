//! Admin header: breadcrumb-style page title and the sign-out control.

use leptos::prelude::*;

use crate::components::session_gate::{use_auth_events, use_session};
use crate::state::session::AuthEvent;

/// Human-readable title for the current route's first path segment.
fn page_title(path: &str) -> &'static str {
    let first = path.trim_start_matches('/').split('/').next().unwrap_or("");
    match first {
        "" | "dashboard" => "Dashboard",
        "blogs" => "Blog Posts",
        "news" => "News Articles",
        "projects" => "Projects",
        "team" => "Team Members",
        "clients" => "Clients",
        "careers" => "Job Openings",
        "slider" => "Image Slider",
        _ => "Admin",
    }
}

#[component]
pub fn AppHeader() -> impl IntoView {
    let session = use_session();
    let events = use_auth_events();
    let pathname = leptos_router::hooks::use_location().pathname;

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::sign_out().await;
            events.run(AuthEvent::SignedOut);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            events.run(AuthEvent::SignedOut);
        }
    };

    view! {
        <header class="header">
            <h2 class="header__title">{move || page_title(&pathname.get())}</h2>
            <div class="header__account">
                <span class="header__email">
                    {move || session.get().identity.map(|i| i.email).unwrap_or_default()}
                </span>
                <button class="header__signout" on:click=on_sign_out>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_title() {
        assert_eq!(page_title("/dashboard"), "Dashboard");
        assert_eq!(page_title("/"), "Dashboard");
    }

    #[test]
    fn resource_titles() {
        assert_eq!(page_title("/blogs/add"), "Blog Posts");
        assert_eq!(page_title("/projects/categories"), "Projects");
        assert_eq!(page_title("/careers/42/edit"), "Job Openings");
    }

    #[test]
    fn unknown_route_falls_back() {
        assert_eq!(page_title("/whatever"), "Admin");
    }
}
