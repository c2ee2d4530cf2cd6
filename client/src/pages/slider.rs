//! Homepage slider screens: list, add, edit.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::image_upload::{ImageUpload, SelectedFile};
use crate::components::loading_screen::LoadingScreen;
use crate::net::records::resources;
use crate::net::types::Slide;
use crate::pages::{PageHeading, load_list, load_record, matches_search};
use crate::state::records::Remote;
use crate::state::ui::ToastState;
use crate::util::form::{UploadOutcome, image_url_for_write};

#[component]
pub fn SliderPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let slides = RwSignal::new(Remote::<Vec<Slide>>::Idle);
    let search = RwSignal::new(String::new());
    load_list(resources::SLIDER, slides);

    let filtered = move || {
        let needle = search.get();
        slides
            .get()
            .ready()
            .map(|rows| {
                rows.iter()
                    .filter(|s| matches_search(&[&s.title, &s.description], &needle))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::records::delete(resources::SLIDER, &id).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Slide deleted.");
                    });
                    load_list(resources::SLIDER, slides);
                }
                Err(message) => {
                    toasts.update(|t| {
                        t.error(format!("Failed to delete slide: {message}"));
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
                title="Image Slider"
                subtitle="Hero images on the website homepage"
                action=("Add Slide", "/slider/add")
            />
            <input
                class="page__search"
                type="search"
                placeholder="Search slides..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Show when=move || slides.get().is_loading()>
                <p class="page__loading">"Loading slides..."</p>
            </Show>
            {move || {
                slides.get().error().map(|message| view! { <p class="page__error">{message.to_owned()}</p> })
            }}
            <Show when=move || slides.get().ready().is_some()>
                <div class="slide-grid">
                    <For each=filtered key=|s| s.id.clone() children=move |s| {
                        let id = s.id.clone();
                        let edit_href = format!("/slider/edit/{}", s.id);
                        let image = s.slider_image.clone();
                        let has_image = !image.is_empty();
                        view! {
                            <div class="slide-card">
                                <Show when=move || has_image>
                                    <img class="slide-card__image" src=image.clone() alt=""/>
                                </Show>
                                <div class="slide-card__body">
                                    <h3>{s.title.clone()}</h3>
                                    <p>{s.description.clone()}</p>
                                </div>
                                <div class="slide-card__actions">
                                    <a href=edit_href>"Edit"</a>
                                    <button on:click=move |_| on_delete(id.clone())>"Delete"</button>
                                </div>
                            </div>
                        }
                    }/>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn AddSlidePage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeading title="Add Slide" subtitle="Add a hero image to the homepage slider" back="/slider"/>
            <SlideForm existing=None/>
        </div>
    }
}

#[component]
pub fn EditSlidePage() -> impl IntoView {
    let params = use_params_map();
    let record = RwSignal::new(Remote::<Slide>::Idle);
    let id = params.read_untracked().get("id").unwrap_or_default();
    load_record(resources::SLIDER, id, record);

    view! {
        <div class="page">
            <PageHeading title="Edit Slide" subtitle="Update this slide" back="/slider"/>
            {move || match record.get() {
                Remote::Ready(slide) => view! { <SlideForm existing=Some(slide)/> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                _ => view! { <LoadingScreen/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn SlideForm(existing: Option<Slide>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let existing_id = existing.as_ref().map(|s| s.id.clone());
    let current_image = existing.as_ref().map(|s| s.slider_image.clone()).unwrap_or_default();
    let title = RwSignal::new(existing.as_ref().map(|s| s.title.clone()).unwrap_or_default());
    let description = RwSignal::new(existing.as_ref().map(|s| s.description.clone()).unwrap_or_default());
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
                t.error("Slide title is required.");
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
                    Some(file) => match crate::net::api::upload_image("slider-images", &file).await {
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
                    "title": title.get_untracked().trim(),
                    "description": description.get_untracked(),
                    "slider_image": image_url,
                });
                let result = match existing_id.as_deref() {
                    Some(id) => crate::net::records::update::<Slide, _>(resources::SLIDER, id, &payload)
                        .await
                        .map(|_| ()),
                    None => crate::net::records::insert::<Slide, _>(resources::SLIDER, &payload)
                        .await
                        .map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        toasts.update(|t| {
                            t.success("Slide saved successfully!");
                        });
                        navigate("/slider", NavigateOptions::default());
                    }
                    Err(message) => {
                        toasts.update(|t| {
                            t.error(format!("Failed to save slide: {message}"));
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
                <span class="field__label">"Title"</span>
                <input prop:value=move || title.get() on:input=move |ev| title.set(event_target_value(&ev))/>
            </label>
            <label class="field field--wide">
                <span class="field__label">"Description"</span>
                <textarea
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <ImageUpload label="Slider image" file=image_file current_url=current_image.clone()/>
            <button class="form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Save Slide" }}
            </button>
        </form>
    }
}
