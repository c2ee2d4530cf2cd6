//! Admin navigation sidebar.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::normalize_path;

struct NavItem {
    title: &'static str,
    url: &'static str,
}

struct NavGroup {
    title: &'static str,
    items: &'static [NavItem],
}

const NAV: &[NavGroup] = &[
    NavGroup {
        title: "Overview",
        items: &[NavItem { title: "Dashboard", url: "/dashboard" }],
    },
    NavGroup {
        title: "Content Management",
        items: &[
            NavItem { title: "Blog Posts", url: "/blogs" },
            NavItem { title: "News Articles", url: "/news" },
            NavItem { title: "Projects", url: "/projects" },
            NavItem { title: "Project Categories", url: "/projects/categories" },
        ],
    },
    NavGroup {
        title: "People & Careers",
        items: &[
            NavItem { title: "Team Members", url: "/team" },
            NavItem { title: "Clients", url: "/clients" },
            NavItem { title: "Job Openings", url: "/careers" },
        ],
    },
    NavGroup {
        title: "Media & Assets",
        items: &[NavItem { title: "Image Slider", url: "/slider" }],
    },
];

fn is_active(current: &str, url: &str) -> bool {
    let current = normalize_path(current);
    current == url || (url != "/" && current.starts_with(&format!("{url}/")))
}

#[component]
pub fn AppSidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <a href="/dashboard">"Arrow Structures"</a>
                <span class="sidebar__brand-sub">"Admin"</span>
            </div>
            <nav class="sidebar__nav">
                {NAV
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="sidebar__group">
                                <span class="sidebar__group-title">{group.title}</span>
                                <ul>
                                    {group
                                        .items
                                        .iter()
                                        .map(|item| {
                                            let url = item.url;
                                            view! {
                                                <li>
                                                    <a
                                                        href=url
                                                        class="sidebar__link"
                                                        class:sidebar__link--active=move || {
                                                            is_active(&pathname.get(), url)
                                                        }
                                                    >
                                                        {item.title}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_active() {
        assert!(is_active("/blogs", "/blogs"));
    }

    #[test]
    fn child_route_keeps_parent_active() {
        assert!(is_active("/blogs/add", "/blogs"));
        assert!(is_active("/careers/42/edit", "/careers"));
    }

    #[test]
    fn sibling_prefix_is_not_active() {
        assert!(!is_active("/blogsarchive", "/blogs"));
    }

    #[test]
    fn categories_does_not_activate_projects_link_exactly() {
        // Both links render; the categories child keeps Projects highlighted too.
        assert!(is_active("/projects/categories", "/projects"));
        assert!(is_active("/projects/categories", "/projects/categories"));
    }
}
