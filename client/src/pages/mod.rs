//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each resource file owns its list page plus add/edit forms and delegates
//! HTTP plumbing to `net::records`. Fetch results land in `Remote` cells so
//! every screen gates its own loading indicator.

pub mod blogs;
pub mod careers;
pub mod clients;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod news;
pub mod project_categories;
pub mod projects;
pub mod signup;
pub mod slider;
pub mod team;

use leptos::prelude::*;

use crate::state::records::Remote;

/// Kick off a list fetch into a `Remote` cell. Browser-only: during SSR the
/// cell stays in `Loading` and the page renders its indicator.
pub(crate) fn load_list<T>(resource: &'static str, into: RwSignal<Remote<Vec<T>>>)
where
    T: serde::de::DeserializeOwned + Send + Sync + 'static,
{
    into.set(Remote::Loading);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        into.set(Remote::from_result(crate::net::records::list::<T>(resource).await));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = resource;
}

/// Kick off a single-record fetch into a `Remote` cell.
pub(crate) fn load_record<T>(resource: &'static str, id: String, into: RwSignal<Remote<T>>)
where
    T: serde::de::DeserializeOwned + Send + Sync + 'static,
{
    into.set(Remote::Loading);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        into.set(Remote::from_result(crate::net::records::get::<T>(resource, &id).await));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (resource, id);
}

/// Heading block shared by every management screen.
#[component]
pub(crate) fn PageHeading(
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional, into)] back: Option<&'static str>,
    #[prop(optional, into)] action: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="page-heading">
            {back.map(|href| view! { <a class="page-heading__back" href=href>"Back"</a> })}
            <div class="page-heading__text">
                <h1>{title}</h1>
                <p>{subtitle}</p>
            </div>
            {action.map(|(label, href)| view! { <a class="page-heading__action" href=href>{label}</a> })}
        </div>
    }
}

/// Case-insensitive substring match used by the list-page search boxes.
pub(crate) fn matches_search(haystacks: &[&str], needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks.iter().any(|h| h.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_matches_everything() {
        assert!(matches_search(&["Steel Bridge"], ""));
        assert!(matches_search(&[], "   "));
    }

    #[test]
    fn search_is_case_insensitive() {
        assert!(matches_search(&["Steel Bridge", "Chennai"], "bridge"));
        assert!(matches_search(&["Steel Bridge"], "STEEL"));
    }

    #[test]
    fn search_misses_report_false() {
        assert!(!matches_search(&["Steel Bridge"], "harbour"));
    }
}
