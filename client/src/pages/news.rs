//! News article screens: list, add, edit.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::image_upload::{ImageUpload, SelectedFile};
use crate::components::loading_screen::LoadingScreen;
use crate::net::records::resources;
use crate::net::types::NewsArticle;
use crate::pages::{PageHeading, load_list, load_record, matches_search};
use crate::state::records::Remote;
use crate::state::ui::ToastState;
use crate::util::form::{UploadOutcome, image_url_for_write};

#[component]
pub fn NewsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let articles = RwSignal::new(Remote::<Vec<NewsArticle>>::Idle);
    let search = RwSignal::new(String::new());
    load_list(resources::NEWS, articles);

    let filtered = move || {
        let needle = search.get();
        articles
            .get()
            .ready()
            .map(|rows| {
                rows.iter()
                    .filter(|a| matches_search(&[&a.headline, &a.summary], &needle))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::records::delete(resources::NEWS, &id).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Article deleted.");
                    });
                    load_list(resources::NEWS, articles);
                }
                Err(message) => {
                    toasts.update(|t| {
                        t.error(format!("Failed to delete article: {message}"));
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
                title="News Articles"
                subtitle="Company announcements on the public website"
                action=("Add Article", "/news/add")
            />
            <input
                class="page__search"
                type="search"
                placeholder="Search articles..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Show when=move || articles.get().is_loading()>
                <p class="page__loading">"Loading articles..."</p>
            </Show>
            {move || {
                articles.get().error().map(|message| view! { <p class="page__error">{message.to_owned()}</p> })
            }}
            <Show when=move || articles.get().ready().is_some()>
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Headline"</th>
                            <th>"Summary"</th>
                            <th>"Featured"</th>
                            <th>"Published"</th>
                            <th>"Added"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=filtered key=|a| a.id.clone() children=move |a| {
                            let id = a.id.clone();
                            let edit_href = format!("/news/edit/{}", a.id);
                            view! {
                                <tr>
                                    <td class="record-table__primary">{a.headline.clone()}</td>
                                    <td>{a.summary.clone()}</td>
                                    <td>{if a.featured_news { "Yes" } else { "No" }}</td>
                                    <td>{if a.publish_immediately { "Live" } else { "Draft" }}</td>
                                    <td>{a.created_at.clone()}</td>
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
pub fn AddNewsPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeading title="Add News Article" subtitle="Publish a company announcement" back="/news"/>
            <NewsForm existing=None/>
        </div>
    }
}

#[component]
pub fn EditNewsPage() -> impl IntoView {
    let params = use_params_map();
    let record = RwSignal::new(Remote::<NewsArticle>::Idle);
    let id = params.read_untracked().get("id").unwrap_or_default();
    load_record(resources::NEWS, id, record);

    view! {
        <div class="page">
            <PageHeading title="Edit News Article" subtitle="Update this announcement" back="/news"/>
            {move || match record.get() {
                Remote::Ready(article) => view! { <NewsForm existing=Some(article)/> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                _ => view! { <LoadingScreen/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn NewsForm(existing: Option<NewsArticle>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let existing_id = existing.as_ref().map(|a| a.id.clone());
    let current_image = existing.as_ref().map(|a| a.image.clone()).unwrap_or_default();
    let headline = RwSignal::new(existing.as_ref().map(|a| a.headline.clone()).unwrap_or_default());
    let summary = RwSignal::new(existing.as_ref().map(|a| a.summary.clone()).unwrap_or_default());
    let content = RwSignal::new(existing.as_ref().map(|a| a.content.clone()).unwrap_or_default());
    let featured = RwSignal::new(existing.as_ref().is_some_and(|a| a.featured_news));
    let publish = RwSignal::new(existing.as_ref().is_some_and(|a| a.publish_immediately));
    let image_file: RwSignal<Option<SelectedFile>, LocalStorage> = RwSignal::new_local(None);
    let busy = RwSignal::new(false);

    let current_image_for_submit = current_image.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if headline.get().trim().is_empty() {
            toasts.update(|t| {
                t.error("Headline is required.");
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
                    Some(file) => match crate::net::api::upload_image("news-images", &file).await {
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

                let payload = serde_json::json!({
                    "headline": headline.get_untracked().trim(),
                    "summary": summary.get_untracked(),
                    "content": content.get_untracked(),
                    "image": image_url,
                    "featured_news": featured.get_untracked(),
                    "publish_immediately": publish.get_untracked(),
                });
                let result = match existing_id.as_deref() {
                    Some(id) => crate::net::records::update::<NewsArticle, _>(resources::NEWS, id, &payload)
                        .await
                        .map(|_| ()),
                    None => crate::net::records::insert::<NewsArticle, _>(resources::NEWS, &payload)
                        .await
                        .map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        toasts.update(|t| {
                            t.success("Article saved successfully!");
                        });
                        navigate("/news", NavigateOptions::default());
                    }
                    Err(message) => {
                        toasts.update(|t| {
                            t.error(format!("Failed to save article: {message}"));
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
            <label class="field field--wide">
                <span class="field__label">"Headline"</span>
                <input prop:value=move || headline.get() on:input=move |ev| headline.set(event_target_value(&ev))/>
            </label>
            <label class="field field--wide">
                <span class="field__label">"Summary"</span>
                <textarea
                    prop:value=move || summary.get()
                    on:input=move |ev| summary.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="field field--wide">
                <span class="field__label">"Content"</span>
                <textarea
                    class="field__textarea--tall"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="field field--toggle">
                <input
                    type="checkbox"
                    prop:checked=move || featured.get()
                    on:change=move |ev| featured.set(event_target_checked(&ev))
                />
                <span>"Featured news"</span>
            </label>
            <label class="field field--toggle">
                <input
                    type="checkbox"
                    prop:checked=move || publish.get()
                    on:change=move |ev| publish.set(event_target_checked(&ev))
                />
                <span>"Publish immediately"</span>
            </label>
            <ImageUpload label="Feature image" file=image_file current_url=current_image.clone()/>
            <button class="form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Save Article" }}
            </button>
        </form>
    }
}
