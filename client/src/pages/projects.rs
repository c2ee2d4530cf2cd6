//! Project portfolio screens: list, add, edit.
//!
//! The form fires two independent fetches on edit (the record and the
//! category list); each gates its own rendering and neither assumes the
//! other resolved first.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::image_upload::{ImageUpload, SelectedFile};
use crate::components::loading_screen::LoadingScreen;
use crate::net::records::resources;
use crate::net::types::{Project, ProjectCategory};
use crate::pages::{PageHeading, load_list, load_record, matches_search};
use crate::state::records::Remote;
use crate::state::ui::ToastState;
use crate::util::form::{UploadOutcome, image_url_for_write};

const STATUSES: &[&str] = &["planning", "in-progress", "completed", "on-hold"];

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let projects = RwSignal::new(Remote::<Vec<Project>>::Idle);
    let search = RwSignal::new(String::new());
    load_list(resources::PROJECTS, projects);

    let filtered = move || {
        let needle = search.get();
        projects
            .get()
            .ready()
            .map(|rows| {
                rows.iter()
                    .filter(|p| matches_search(&[&p.project_name, &p.client, &p.location, &p.status], &needle))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::records::delete(resources::PROJECTS, &id).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Project deleted.");
                    });
                    load_list(resources::PROJECTS, projects);
                }
                Err(message) => {
                    toasts.update(|t| {
                        t.error(format!("Failed to delete project: {message}"));
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <div class="page">
            <PageHeading
                title="Projects"
                subtitle="Portfolio shown on the public website"
                action=("Add Project", "/projects/add")
            />
            <input
                class="page__search"
                type="search"
                placeholder="Search projects..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Show when=move || projects.get().is_loading()>
                <p class="page__loading">"Loading projects..."</p>
            </Show>
            {move || {
                projects.get().error().map(|message| view! { <p class="page__error">{message.to_owned()}</p> })
            }}
            <Show when=move || projects.get().ready().is_some()>
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Project"</th>
                            <th>"Client"</th>
                            <th>"Location"</th>
                            <th>"Status"</th>
                            <th>"Added"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=filtered key=|p| p.id.clone() children=move |p| {
                            let id = p.id.clone();
                            let edit_href = format!("/projects/edit/{}", p.id);
                            let image = p.image.clone();
                            let has_image = !image.is_empty();
                            view! {
                                <tr>
                                    <td class="record-table__primary">
                                        <Show when=move || has_image>
                                            <img class="record-table__thumb" src=image.clone() alt=""/>
                                        </Show>
                                        {p.project_name.clone()}
                                    </td>
                                    <td>{p.client.clone()}</td>
                                    <td>{p.location.clone()}</td>
                                    <td>{p.status.clone()}</td>
                                    <td>{p.created_at.clone()}</td>
                                    <td class="record-table__actions">
                                        <a href=edit_href>"Edit"</a>
                                        <button on:click=move |_| on_delete(id.clone())>"Delete"</button>
                                    </td>
                                </tr>
                            }
                        }/>
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
pub fn AddProjectPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeading title="Add Project" subtitle="Add a project to the portfolio" back="/projects"/>
            <ProjectForm existing=None/>
        </div>
    }
}

#[component]
pub fn EditProjectPage() -> impl IntoView {
    let params = use_params_map();
    let record = RwSignal::new(Remote::<Project>::Idle);
    let id = params.read_untracked().get("id").unwrap_or_default();
    load_record(resources::PROJECTS, id, record);

    view! {
        <div class="page">
            <PageHeading title="Edit Project" subtitle="Update project details" back="/projects"/>
            {move || match record.get() {
                Remote::Ready(project) => view! { <ProjectForm existing=Some(project)/> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                _ => view! { <LoadingScreen/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProjectForm(existing: Option<Project>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    // Category options load independently of the record being edited.
    let categories = RwSignal::new(Remote::<Vec<ProjectCategory>>::Idle);
    load_list(resources::PROJECT_CATEGORIES, categories);

    let existing_id = existing.as_ref().map(|p| p.id.clone());
    let current_image = existing.as_ref().map(|p| p.image.clone()).unwrap_or_default();
    let project_name = RwSignal::new(existing.as_ref().map(|p| p.project_name.clone()).unwrap_or_default());
    let client = RwSignal::new(existing.as_ref().map(|p| p.client.clone()).unwrap_or_default());
    let category = RwSignal::new(existing.as_ref().and_then(|p| p.category.clone()).unwrap_or_default());
    let description = RwSignal::new(existing.as_ref().map(|p| p.description.clone()).unwrap_or_default());
    let location = RwSignal::new(existing.as_ref().map(|p| p.location.clone()).unwrap_or_default());
    let status = RwSignal::new(existing.as_ref().map(|p| p.status.clone()).unwrap_or_default());
    let image_file: RwSignal<Option<SelectedFile>, LocalStorage> = RwSignal::new_local(None);
    let busy = RwSignal::new(false);

    let current_image_for_submit = current_image.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if project_name.get().trim().is_empty() {
            toasts.update(|t| {
                t.error("Project name is required.");
            });
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let existing_id = existing_id.clone();
            let current_image = current_image_for_submit.clone();
            leptos::task::spawn_local(async move {
                let outcome = match image_file.get_untracked() {
                    Some(file) => match crate::net::api::upload_image("project-images", &file).await {
                        Ok(url) => UploadOutcome::Uploaded(url),
                        Err(message) => UploadOutcome::Failed(message),
                    },
                    None => UploadOutcome::NoFile,
                };
                let image_url = match image_url_for_write(outcome, &current_image) {
                    Ok(url) => url,
                    Err(message) => {
                        toasts.update(|t| {
                            t.error(format!("Image upload failed: {message}"));
                        });
                        busy.set(false);
                        return;
                    }
                };

                let category_value = category.get_untracked();
                let payload = serde_json::json!({
                    "project_name": project_name.get_untracked().trim(),
                    "client": client.get_untracked().trim(),
                    "category": if category_value.is_empty() { None } else { Some(category_value) },
                    "description": description.get_untracked(),
                    "location": location.get_untracked().trim(),
                    "status": status.get_untracked(),
                    "image": image_url,
                });
                let result = match existing_id.as_deref() {
                    Some(id) => crate::net::records::update::<Project, _>(resources::PROJECTS, id, &payload)
                        .await
                        .map(|_| ()),
                    None => crate::net::records::insert::<Project, _>(resources::PROJECTS, &payload)
                        .await
                        .map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        toasts.update(|t| {
                            t.success("Project saved successfully!");
                        });
                        navigate("/projects", NavigateOptions::default());
                    }
                    Err(message) => {
                        toasts.update(|t| {
                            t.error(format!("Failed to save project: {message}"));
                        });
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &existing_id, &current_image_for_submit);
            busy.set(false);
        }
    };

    view! {
        <form class="form" on:submit=on_submit>
            <div class="form__grid">
                <label class="field">
                    <span class="field__label">"Project Name"</span>
                    <input
                        prop:value=move || project_name.get()
                        on:input=move |ev| project_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Client"</span>
                    <input prop:value=move || client.get() on:input=move |ev| client.set(event_target_value(&ev))/>
                </label>
                <label class="field">
                    <span class="field__label">"Category"</span>
                    <select
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="">"Select category"</option>
                        <For
                            each=move || categories.get().ready().cloned().unwrap_or_default()
                            key=|c| c.id.clone()
                            children=|c| {
                                view! { <option value=c.id.clone()>{c.project_category_name.clone()}</option> }
                            }
                        />
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Status"</span>
                    <select prop:value=move || status.get() on:change=move |ev| status.set(event_target_value(&ev))>
                        <option value="">"Select status"</option>
                        {STATUSES
                            .iter()
                            .map(|s| view! { <option value=*s>{*s}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="field field--wide">
                    <span class="field__label">"Location"</span>
                    <input
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <label class="field field--wide">
                <span class="field__label">"Description"</span>
                <textarea
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <ImageUpload label="Project image" file=image_file current_url=current_image.clone()/>
            <button class="form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Save Project" }}
            </button>
        </form>
    }
}
