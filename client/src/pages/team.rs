//! Team member screens: list, add, edit.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::image_upload::{ImageUpload, SelectedFile};
use crate::components::loading_screen::LoadingScreen;
use crate::net::records::resources;
use crate::net::types::TeamMember;
use crate::pages::{PageHeading, load_list, load_record, matches_search};
use crate::state::records::Remote;
use crate::state::ui::ToastState;
use crate::util::form::{UploadOutcome, image_url_for_write};

#[component]
pub fn TeamPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let members = RwSignal::new(Remote::<Vec<TeamMember>>::Idle);
    let search = RwSignal::new(String::new());
    load_list(resources::TEAM_MEMBERS, members);

    let filtered = move || {
        let needle = search.get();
        members
            .get()
            .ready()
            .map(|rows| {
                rows.iter()
                    .filter(|m| matches_search(&[&m.name, &m.designation, &m.email], &needle))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::records::delete(resources::TEAM_MEMBERS, &id).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Team member removed.");
                    });
                    load_list(resources::TEAM_MEMBERS, members);
                }
                Err(message) => {
                    toasts.update(|t| {
                        t.error(format!("Failed to remove team member: {message}"));
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
                title="Team Members"
                subtitle="People shown on the website's team section"
                action=("Add Member", "/team/add")
            />
            <input
                class="page__search"
                type="search"
                placeholder="Search team members..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Show when=move || members.get().is_loading()>
                <p class="page__loading">"Loading team members..."</p>
            </Show>
            {move || {
                members.get().error().map(|message| view! { <p class="page__error">{message.to_owned()}</p> })
            }}
            <Show when=move || members.get().ready().is_some()>
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Designation"</th>
                            <th>"Email"</th>
                            <th>"Mobile"</th>
                            <th>"Added"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=filtered key=|m| m.id.clone() children=move |m| {
                            let id = m.id.clone();
                            let edit_href = format!("/team/edit/{}", m.id);
                            let photo = m.profile_image.clone();
                            let has_photo = !photo.is_empty();
                            view! {
                                <tr>
                                    <td class="record-table__primary">
                                        <Show when=move || has_photo>
                                            <img class="record-table__thumb" src=photo.clone() alt=""/>
                                        </Show>
                                        {m.name.clone()}
                                    </td>
                                    <td>{m.designation.clone()}</td>
                                    <td>{m.email.clone()}</td>
                                    <td>{m.mobile_number.clone()}</td>
                                    <td>{m.created_at.clone()}</td>
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
pub fn AddTeamMemberPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeading title="Add Team Member" subtitle="Add a person to the public team page" back="/team"/>
            <TeamMemberForm existing=None/>
        </div>
    }
}

#[component]
pub fn EditTeamMemberPage() -> impl IntoView {
    let params = use_params_map();
    let record = RwSignal::new(Remote::<TeamMember>::Idle);
    let id = params.read_untracked().get("id").unwrap_or_default();
    load_record(resources::TEAM_MEMBERS, id, record);

    view! {
        <div class="page">
            <PageHeading title="Edit Team Member" subtitle="Update member details" back="/team"/>
            {move || match record.get() {
                Remote::Ready(member) => view! { <TeamMemberForm existing=Some(member)/> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                _ => view! { <LoadingScreen/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn TeamMemberForm(existing: Option<TeamMember>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let existing_id = existing.as_ref().map(|m| m.id.clone());
    let current_photo = existing.as_ref().map(|m| m.profile_image.clone()).unwrap_or_default();
    let name = RwSignal::new(existing.as_ref().map(|m| m.name.clone()).unwrap_or_default());
    let email = RwSignal::new(existing.as_ref().map(|m| m.email.clone()).unwrap_or_default());
    let mobile_number = RwSignal::new(existing.as_ref().map(|m| m.mobile_number.clone()).unwrap_or_default());
    let designation = RwSignal::new(existing.as_ref().map(|m| m.designation.clone()).unwrap_or_default());
    let photo_file: RwSignal<Option<SelectedFile>, LocalStorage> = RwSignal::new_local(None);
    let busy = RwSignal::new(false);

    let current_photo_for_submit = current_photo.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if name.get().trim().is_empty() {
            toasts.update(|t| {
                t.error("Name is required.");
            });
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let existing_id = existing_id.clone();
            let current_photo = current_photo_for_submit.clone();
            leptos::task::spawn_local(async move {
                let outcome = match photo_file.get_untracked() {
                    Some(file) => match crate::net::api::upload_image("member-images", &file).await {
                        Ok(url) => UploadOutcome::Uploaded(url),
                        Err(message) => UploadOutcome::Failed(message),
                    },
                    None => UploadOutcome::NoFile,
                };
                let photo_url = match image_url_for_write(outcome, &current_photo) {
                    Ok(url) => url,
                    Err(message) => {
                        toasts.update(|t| {
                            t.error(format!("Photo upload failed: {message}"));
                        });
                        busy.set(false);
                        return;
                    }
                };

                let payload = serde_json::json!({
                    "name": name.get_untracked().trim(),
                    "email": email.get_untracked().trim(),
                    "mobile_number": mobile_number.get_untracked().trim(),
                    "designation": designation.get_untracked().trim(),
                    "profile_image": photo_url,
                });
                let result = match existing_id.as_deref() {
                    Some(id) => crate::net::records::update::<TeamMember, _>(resources::TEAM_MEMBERS, id, &payload)
                        .await
                        .map(|_| ()),
                    None => crate::net::records::insert::<TeamMember, _>(resources::TEAM_MEMBERS, &payload)
                        .await
                        .map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        toasts.update(|t| {
                            t.success("Team member saved successfully!");
                        });
                        navigate("/team", NavigateOptions::default());
                    }
                    Err(message) => {
                        toasts.update(|t| {
                            t.error(format!("Failed to save team member: {message}"));
                        });
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &existing_id, &current_photo_for_submit);
            busy.set(false);
        }
    };

    view! {
        <form class="form" on:submit=on_submit>
            <div class="form__grid">
                <label class="field">
                    <span class="field__label">"Name"</span>
                    <input prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev))/>
                </label>
                <label class="field">
                    <span class="field__label">"Designation"</span>
                    <input
                        placeholder="e.g. Senior Site Engineer"
                        prop:value=move || designation.get()
                        on:input=move |ev| designation.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Email"</span>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Mobile Number"</span>
                    <input
                        prop:value=move || mobile_number.get()
                        on:input=move |ev| mobile_number.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <ImageUpload label="Profile photo" file=photo_file current_url=current_photo.clone()/>
            <button class="form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Save Member" }}
            </button>
        </form>
    }
}
