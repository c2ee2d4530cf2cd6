//! Blog post screens: list, add, edit.
//!
//! The blog form fetches the category lookup independently of the post
//! being edited; both cells gate their own rendering.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::image_upload::{ImageUpload, SelectedFile};
use crate::components::loading_screen::LoadingScreen;
use crate::net::records::resources;
use crate::net::types::{Blog, BlogCategory};
use crate::pages::{PageHeading, load_list, load_record, matches_search};
use crate::state::records::Remote;
use crate::state::ui::ToastState;
use crate::util::form::{UploadOutcome, image_url_for_write};

#[component]
pub fn BlogsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let blogs = RwSignal::new(Remote::<Vec<Blog>>::Idle);
    let search = RwSignal::new(String::new());
    load_list(resources::BLOGS, blogs);

    let filtered = move || {
        let needle = search.get();
        blogs
            .get()
            .ready()
            .map(|rows| {
                rows.iter()
                    .filter(|b| matches_search(&[&b.title, &b.excerpt, &b.tag], &needle))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::records::delete(resources::BLOGS, &id).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Blog post deleted.");
                    });
                    load_list(resources::BLOGS, blogs);
                }
                Err(message) => {
                    toasts.update(|t| {
                        t.error(format!("Failed to delete blog post: {message}"));
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
                title="Blog Posts"
                subtitle="Articles on the company blog"
                action=("Add Post", "/blogs/add")
            />
            <input
                class="page__search"
                type="search"
                placeholder="Search blog posts..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Show when=move || blogs.get().is_loading()>
                <p class="page__loading">"Loading blog posts..."</p>
            </Show>
            {move || {
                blogs.get().error().map(|message| view! { <p class="page__error">{message.to_owned()}</p> })
            }}
            <Show when=move || blogs.get().ready().is_some()>
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Tag"</th>
                            <th>"Featured"</th>
                            <th>"Published"</th>
                            <th>"Added"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=filtered key=|b| b.id.clone() children=move |b| {
                            let id = b.id.clone();
                            let edit_href = format!("/blogs/edit/{}", b.id);
                            view! {
                                <tr>
                                    <td class="record-table__primary">{b.title.clone()}</td>
                                    <td>{b.tag.clone()}</td>
                                    <td>{if b.featured_post { "Yes" } else { "No" }}</td>
                                    <td>{if b.publish_immediately { "Live" } else { "Draft" }}</td>
                                    <td>{b.created_at.clone()}</td>
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
pub fn AddBlogPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeading title="Add Blog Post" subtitle="Write a new article for the blog" back="/blogs"/>
            <BlogForm existing=None/>
        </div>
    }
}

#[component]
pub fn EditBlogPage() -> impl IntoView {
    let params = use_params_map();
    let record = RwSignal::new(Remote::<Blog>::Idle);
    let id = params.read_untracked().get("id").unwrap_or_default();
    load_record(resources::BLOGS, id, record);

    view! {
        <div class="page">
            <PageHeading title="Edit Blog Post" subtitle="Update this article" back="/blogs"/>
            {move || match record.get() {
                Remote::Ready(blog) => view! { <BlogForm existing=Some(blog)/> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                _ => view! { <LoadingScreen/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn BlogForm(existing: Option<Blog>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let categories = RwSignal::new(Remote::<Vec<BlogCategory>>::Idle);
    load_list(resources::BLOG_CATEGORIES, categories);

    let existing_id = existing.as_ref().map(|b| b.id.clone());
    let current_image = existing.as_ref().map(|b| b.image.clone()).unwrap_or_default();
    let title = RwSignal::new(existing.as_ref().map(|b| b.title.clone()).unwrap_or_default());
    let excerpt = RwSignal::new(existing.as_ref().map(|b| b.excerpt.clone()).unwrap_or_default());
    let content = RwSignal::new(existing.as_ref().map(|b| b.content.clone()).unwrap_or_default());
    let category = RwSignal::new(existing.as_ref().and_then(|b| b.category.clone()).unwrap_or_default());
    let tag = RwSignal::new(existing.as_ref().map(|b| b.tag.clone()).unwrap_or_default());
    let featured = RwSignal::new(existing.as_ref().is_some_and(|b| b.featured_post));
    let publish = RwSignal::new(existing.as_ref().is_some_and(|b| b.publish_immediately));
    let image_file: RwSignal<Option<SelectedFile>, LocalStorage> = RwSignal::new_local(None);
    let busy = RwSignal::new(false);

    let current_image_for_submit = current_image.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if title.get().trim().is_empty() {
            toasts.update(|t| {
                t.error("Title is required.");
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
                    Some(file) => match crate::net::api::upload_image("blog-images", &file).await {
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
                    "title": title.get_untracked().trim(),
                    "excerpt": excerpt.get_untracked(),
                    "content": content.get_untracked(),
                    "category": if category_value.is_empty() { None } else { Some(category_value) },
                    "tag": tag.get_untracked().trim(),
                    "image": image_url,
                    "featured_post": featured.get_untracked(),
                    "publish_immediately": publish.get_untracked(),
                });
                let result = match existing_id.as_deref() {
                    Some(id) => crate::net::records::update::<Blog, _>(resources::BLOGS, id, &payload)
                        .await
                        .map(|_| ()),
                    None => crate::net::records::insert::<Blog, _>(resources::BLOGS, &payload)
                        .await
                        .map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        toasts.update(|t| {
                            t.success("Blog post saved successfully!");
                        });
                        navigate("/blogs", NavigateOptions::default());
                    }
                    Err(message) => {
                        toasts.update(|t| {
                            t.error(format!("Failed to save blog post: {message}"));
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
                    <span class="field__label">"Title"</span>
                    <input prop:value=move || title.get() on:input=move |ev| title.set(event_target_value(&ev))/>
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
                            children=|c| view! { <option value=c.id.clone()>{c.category_name.clone()}</option> }
                        />
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Tag"</span>
                    <input prop:value=move || tag.get() on:input=move |ev| tag.set(event_target_value(&ev))/>
                </label>
            </div>
            <label class="field field--wide">
                <span class="field__label">"Excerpt"</span>
                <textarea
                    prop:value=move || excerpt.get()
                    on:input=move |ev| excerpt.set(event_target_value(&ev))
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
                <span>"Featured post"</span>
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
                {move || if busy.get() { "Saving..." } else { "Save Post" }}
            </button>
        </form>
    }
}
