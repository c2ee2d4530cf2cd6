//! Dashboard page — record-count stat cards for every managed resource.
//!
//! Each card fires its own fetch and gates its own indicator; two cards
//! never wait on each other.

use leptos::prelude::*;

use crate::net::records::resources;
use crate::pages::load_list;
use crate::state::records::Remote;

type CountCell = RwSignal<Remote<Vec<serde_json::Value>>>;

fn count_cell(resource: &'static str) -> CountCell {
    let cell = RwSignal::new(Remote::Idle);
    load_list::<serde_json::Value>(resource, cell);
    cell
}

#[component]
fn StatCard(title: &'static str, href: &'static str, cell: CountCell) -> impl IntoView {
    view! {
        <a class="stat-card" href=href>
            <span class="stat-card__title">{title}</span>
            <span class="stat-card__value">
                {move || match cell.get() {
                    Remote::Ready(items) => items.len().to_string(),
                    Remote::Failed(_) => "n/a".to_owned(),
                    _ => "...".to_owned(),
                }}
            </span>
        </a>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let blogs = count_cell(resources::BLOGS);
    let news = count_cell(resources::NEWS);
    let projects = count_cell(resources::PROJECTS);
    let clients = count_cell(resources::CLIENTS);
    let careers = count_cell(resources::CAREERS);
    let team = count_cell(resources::TEAM_MEMBERS);
    let slider = count_cell(resources::SLIDER);

    view! {
        <div class="page dashboard">
            <div class="page-heading">
                <div class="page-heading__text">
                    <h1>"Dashboard"</h1>
                    <p>"Content overview for the Arrow Structures website"</p>
                </div>
            </div>
            <div class="dashboard__grid">
                <StatCard title="Blog Posts" href="/blogs" cell=blogs/>
                <StatCard title="News Articles" href="/news" cell=news/>
                <StatCard title="Projects" href="/projects" cell=projects/>
                <StatCard title="Clients" href="/clients" cell=clients/>
                <StatCard title="Job Openings" href="/careers" cell=careers/>
                <StatCard title="Team Members" href="/team" cell=team/>
                <StatCard title="Slider Images" href="/slider" cell=slider/>
            </div>
        </div>
    }
}
