//! Client management screens: list, add, edit.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::image_upload::{ImageUpload, SelectedFile};
use crate::components::loading_screen::LoadingScreen;
use crate::net::records::resources;
use crate::net::types::ClientRecord;
use crate::pages::{PageHeading, load_list, load_record, matches_search};
use crate::state::records::Remote;
use crate::state::ui::ToastState;
use crate::util::form::{UploadOutcome, image_url_for_write};

#[component]
pub fn ClientsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let clients = RwSignal::new(Remote::<Vec<ClientRecord>>::Idle);
    let search = RwSignal::new(String::new());
    load_list(resources::CLIENTS, clients);

    let filtered = move || {
        let needle = search.get();
        clients
            .get()
            .ready()
            .map(|rows| {
                rows.iter()
                    .filter(|c| {
                        matches_search(
                            &[&c.client_name, &c.company_name, &c.email, &c.location],
                            &needle,
                        )
                    })
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::records::delete(resources::CLIENTS, &id).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Client deleted.");
                    });
                    load_list(resources::CLIENTS, clients);
                }
                Err(message) => {
                    toasts.update(|t| {
                        t.error(format!("Failed to delete client: {message}"));
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
                title="Clients"
                subtitle="Companies Arrow Structures has built for"
                action=("Add Client", "/clients/add")
            />
            <input
                class="page__search"
                type="search"
                placeholder="Search clients..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Show when=move || clients.get().is_loading()>
                <p class="page__loading">"Loading clients..."</p>
            </Show>
            {move || {
                clients.get().error().map(|message| view! { <p class="page__error">{message.to_owned()}</p> })
            }}
            <Show when=move || clients.get().ready().is_some()>
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Client"</th>
                            <th>"Company"</th>
                            <th>"Email"</th>
                            <th>"Mobile"</th>
                            <th>"Location"</th>
                            <th>"Added"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=filtered key=|c| c.id.clone() children=move |c| {
                            let id = c.id.clone();
                            let edit_href = format!("/clients/edit/{}", c.id);
                            let logo = c.client_logo_url.clone();
                            let has_logo = !logo.is_empty();
                            view! {
                                <tr>
                                    <td class="record-table__primary">
                                        <Show when=move || has_logo>
                                            <img class="record-table__thumb" src=logo.clone() alt=""/>
                                        </Show>
                                        {c.client_name.clone()}
                                    </td>
                                    <td>{c.company_name.clone()}</td>
                                    <td>{c.email.clone()}</td>
                                    <td>{c.mobile_number.clone()}</td>
                                    <td>{c.location.clone()}</td>
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
pub fn AddClientPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeading title="Add New Client" subtitle="Register a client for the portfolio" back="/clients"/>
            <ClientForm existing=None/>
        </div>
    }
}

#[component]
pub fn EditClientPage() -> impl IntoView {
    let params = use_params_map();
    let record = RwSignal::new(Remote::<ClientRecord>::Idle);
    let id = params.read_untracked().get("id").unwrap_or_default();
    load_record(resources::CLIENTS, id, record);

    view! {
        <div class="page">
            <PageHeading title="Edit Client" subtitle="Update client details" back="/clients"/>
            {move || match record.get() {
                Remote::Ready(client) => view! { <ClientForm existing=Some(client)/> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                _ => view! { <LoadingScreen/> }.into_any(),
            }}
        </div>
    }
}

/// Shared add/edit form. Uploads the selected logo first; an upload failure
/// aborts the record write so no client is saved with a dangling logo field.
#[component]
fn ClientForm(existing: Option<ClientRecord>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let existing_id = existing.as_ref().map(|c| c.id.clone());
    let current_logo = existing.as_ref().map(|c| c.client_logo_url.clone()).unwrap_or_default();
    let client_name = RwSignal::new(existing.as_ref().map(|c| c.client_name.clone()).unwrap_or_default());
    let email = RwSignal::new(existing.as_ref().map(|c| c.email.clone()).unwrap_or_default());
    let mobile_number = RwSignal::new(existing.as_ref().map(|c| c.mobile_number.clone()).unwrap_or_default());
    let company_name = RwSignal::new(existing.as_ref().map(|c| c.company_name.clone()).unwrap_or_default());
    let location = RwSignal::new(existing.as_ref().map(|c| c.location.clone()).unwrap_or_default());
    let logo_file: RwSignal<Option<SelectedFile>, LocalStorage> = RwSignal::new_local(None);
    let busy = RwSignal::new(false);

    let current_logo_for_submit = current_logo.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if client_name.get().trim().is_empty() {
            toasts.update(|t| {
                t.error("Client name is required.");
            });
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let existing_id = existing_id.clone();
            let current_logo = current_logo_for_submit.clone();
            leptos::task::spawn_local(async move {
                let outcome = match logo_file.get_untracked() {
                    Some(file) => match crate::net::api::upload_image("client-images", &file).await {
                        Ok(url) => UploadOutcome::Uploaded(url),
                        Err(message) => UploadOutcome::Failed(message),
                    },
                    None => UploadOutcome::NoFile,
                };
                let logo_url = match image_url_for_write(outcome, &current_logo) {
                    Ok(url) => url,
                    Err(message) => {
                        toasts.update(|t| {
                            t.error(format!("Logo upload failed: {message}"));
                        });
                        busy.set(false);
                        return;
                    }
                };

                let payload = serde_json::json!({
                    "client_name": client_name.get_untracked().trim(),
                    "email": email.get_untracked().trim(),
                    "mobile_number": mobile_number.get_untracked().trim(),
                    "company_name": company_name.get_untracked().trim(),
                    "location": location.get_untracked().trim(),
                    "client_logo_url": logo_url,
                });
                let result = match existing_id.as_deref() {
                    Some(id) => crate::net::records::update::<ClientRecord, _>(resources::CLIENTS, id, &payload)
                        .await
                        .map(|_| ()),
                    None => crate::net::records::insert::<ClientRecord, _>(resources::CLIENTS, &payload)
                        .await
                        .map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        toasts.update(|t| {
                            t.success("Client saved successfully!");
                        });
                        navigate("/clients", NavigateOptions::default());
                    }
                    Err(message) => {
                        toasts.update(|t| {
                            t.error(format!("Failed to save client: {message}"));
                        });
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &existing_id, &current_logo_for_submit);
            busy.set(false);
        }
    };

    view! {
        <form class="form" on:submit=on_submit>
            <div class="form__grid">
                <label class="field">
                    <span class="field__label">"Client Name"</span>
                    <input
                        prop:value=move || client_name.get()
                        on:input=move |ev| client_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Company Name"</span>
                    <input
                        prop:value=move || company_name.get()
                        on:input=move |ev| company_name.set(event_target_value(&ev))
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
                <label class="field field--wide">
                    <span class="field__label">"Location"</span>
                    <input
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <ImageUpload label="Client logo (optional)" file=logo_file current_url=current_logo.clone()/>
            <button class="form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Save Client" }}
            </button>
        </form>
    }
}
