//! Project category screens: list, add, edit.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading_screen::LoadingScreen;
use crate::net::records::resources;
use crate::net::types::ProjectCategory;
use crate::pages::{PageHeading, load_list, load_record, matches_search};
use crate::state::records::Remote;
use crate::state::ui::ToastState;

#[component]
pub fn ProjectCategoriesPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let categories = RwSignal::new(Remote::<Vec<ProjectCategory>>::Idle);
    let search = RwSignal::new(String::new());
    load_list(resources::PROJECT_CATEGORIES, categories);

    let filtered = move || {
        let needle = search.get();
        categories
            .get()
            .ready()
            .map(|rows| {
                rows.iter()
                    .filter(|c| matches_search(&[&c.project_category_name, &c.description], &needle))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::records::delete(resources::PROJECT_CATEGORIES, &id).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Category deleted.");
                    });
                    load_list(resources::PROJECT_CATEGORIES, categories);
                }
                Err(message) => {
                    toasts.update(|t| {
                        t.error(format!("Failed to delete category: {message}"));
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
                title="Project Categories"
                subtitle="Groupings for the project portfolio"
                action=("Add Category", "/projects/categories/add")
            />
            <input
                class="page__search"
                type="search"
                placeholder="Search categories..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Show when=move || categories.get().is_loading()>
                <p class="page__loading">"Loading categories..."</p>
            </Show>
            {move || {
                categories.get().error().map(|message| view! { <p class="page__error">{message.to_owned()}</p> })
            }}
            <Show when=move || categories.get().ready().is_some()>
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Category"</th>
                            <th>"Description"</th>
                            <th>"Added"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=filtered key=|c| c.id.clone() children=move |c| {
                            let id = c.id.clone();
                            let edit_href = format!("/projects/categories/edit/{}", c.id);
                            view! {
                                <tr>
                                    <td class="record-table__primary">{c.project_category_name.clone()}</td>
                                    <td>{c.description.clone()}</td>
                                    <td>{c.created_at.clone()}</td>
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
pub fn AddProjectCategoryPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeading
                title="Add Category"
                subtitle="Create a project category"
                back="/projects/categories"
            />
            <ProjectCategoryForm existing=None/>
        </div>
    }
}

#[component]
pub fn EditProjectCategoryPage() -> impl IntoView {
    let params = use_params_map();
    let record = RwSignal::new(Remote::<ProjectCategory>::Idle);
    let id = params.read_untracked().get("id").unwrap_or_default();
    load_record(resources::PROJECT_CATEGORIES, id, record);

    view! {
        <div class="page">
            <PageHeading
                title="Edit Category"
                subtitle="Update this project category"
                back="/projects/categories"
            />
            {move || match record.get() {
                Remote::Ready(category) => view! { <ProjectCategoryForm existing=Some(category)/> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                _ => view! { <LoadingScreen/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProjectCategoryForm(existing: Option<ProjectCategory>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let existing_id = existing.as_ref().map(|c| c.id.clone());
    let name = RwSignal::new(existing.as_ref().map(|c| c.project_category_name.clone()).unwrap_or_default());
    let description = RwSignal::new(existing.as_ref().map(|c| c.description.clone()).unwrap_or_default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if name.get().trim().is_empty() {
            toasts.update(|t| {
                t.error("Category name is required.");
            });
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let existing_id = existing_id.clone();
            leptos::task::spawn_local(async move {
                let payload = serde_json::json!({
                    "project_category_name": name.get_untracked().trim(),
                    "description": description.get_untracked(),
                });
                let result = match existing_id.as_deref() {
                    Some(id) => {
                        crate::net::records::update::<ProjectCategory, _>(resources::PROJECT_CATEGORIES, id, &payload)
                            .await
                            .map(|_| ())
                    }
                    None => crate::net::records::insert::<ProjectCategory, _>(resources::PROJECT_CATEGORIES, &payload)
                        .await
                        .map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        toasts.update(|t| {
                            t.success("Category saved successfully!");
                        });
                        navigate("/projects/categories", NavigateOptions::default());
                    }
                    Err(message) => {
                        toasts.update(|t| {
                            t.error(format!("Failed to save category: {message}"));
                        });
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &existing_id);
            busy.set(false);
        }
    };

    view! {
        <form class="form" on:submit=on_submit>
            <label class="field field--wide">
                <span class="field__label">"Category Name"</span>
                <input prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev))/>
            </label>
            <label class="field field--wide">
                <span class="field__label">"Description"</span>
                <textarea
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button class="form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Save Category" }}
            </button>
        </form>
    }
}
