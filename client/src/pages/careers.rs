//! Career posting screens: list, add, edit.
//!
//! Salary inputs are free text in the form but numeric on the wire; the
//! conversion runs before any write and a bad input stops the submit.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading_screen::LoadingScreen;
use crate::net::records::resources;
use crate::net::types::Career;
use crate::pages::{PageHeading, load_list, load_record, matches_search};
use crate::state::records::Remote;
use crate::state::ui::ToastState;
use crate::util::form::parse_optional_salary;

const DEPARTMENTS: &[&str] = &["engineering", "operations", "safety", "design", "management"];
const JOB_TYPES: &[&str] = &["full-time", "part-time", "contract", "internship"];

fn salary_range_label(career: &Career) -> String {
    match (career.min_salary, career.max_salary) {
        (Some(min), Some(max)) => format!("{min:.0} - {max:.0}"),
        (Some(min), None) => format!("from {min:.0}"),
        (None, Some(max)) => format!("up to {max:.0}"),
        (None, None) => "not specified".to_owned(),
    }
}

#[component]
pub fn CareersPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let careers = RwSignal::new(Remote::<Vec<Career>>::Idle);
    let search = RwSignal::new(String::new());
    load_list(resources::CAREERS, careers);

    let filtered = move || {
        let needle = search.get();
        careers
            .get()
            .ready()
            .map(|rows| {
                rows.iter()
                    .filter(|c| matches_search(&[&c.job_title, &c.department, &c.location, &c.job_type], &needle))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::records::delete(resources::CAREERS, &id).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Job posting deleted.");
                    });
                    load_list(resources::CAREERS, careers);
                }
                Err(message) => {
                    toasts.update(|t| {
                        t.error(format!("Failed to delete job posting: {message}"));
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
                title="Job Openings"
                subtitle="Career postings on the public website"
                action=("Add Career", "/careers/add")
            />
            <input
                class="page__search"
                type="search"
                placeholder="Search job openings..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Show when=move || careers.get().is_loading()>
                <p class="page__loading">"Loading job openings..."</p>
            </Show>
            {move || {
                careers.get().error().map(|message| view! { <p class="page__error">{message.to_owned()}</p> })
            }}
            <Show when=move || careers.get().ready().is_some()>
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Job Title"</th>
                            <th>"Department"</th>
                            <th>"Location"</th>
                            <th>"Type"</th>
                            <th>"Salary"</th>
                            <th>"Remote"</th>
                            <th>"Published"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=filtered key=|c| c.id.clone() children=move |c| {
                            let id = c.id.clone();
                            let edit_href = format!("/careers/{}/edit", c.id);
                            let salary = salary_range_label(&c);
                            view! {
                                <tr>
                                    <td class="record-table__primary">{c.job_title.clone()}</td>
                                    <td>{c.department.clone()}</td>
                                    <td>{c.location.clone()}</td>
                                    <td>{c.job_type.clone()}</td>
                                    <td>{salary}</td>
                                    <td>{if c.remote_work_available { "Yes" } else { "No" }}</td>
                                    <td>{if c.publish_immediately { "Live" } else { "Draft" }}</td>
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
pub fn AddCareerPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeading title="Add New Career" subtitle="Create a job posting for your company" back="/careers"/>
            <CareerForm existing=None/>
        </div>
    }
}

#[component]
pub fn EditCareerPage() -> impl IntoView {
    let params = use_params_map();
    let record = RwSignal::new(Remote::<Career>::Idle);
    let id = params.read_untracked().get("id").unwrap_or_default();
    load_record(resources::CAREERS, id, record);

    view! {
        <div class="page">
            <PageHeading title="Edit Career" subtitle="Update this job posting" back="/careers"/>
            {move || match record.get() {
                Remote::Ready(career) => view! { <CareerForm existing=Some(career)/> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                _ => view! { <LoadingScreen/> }.into_any(),
            }}
        </div>
    }
}

fn salary_input_value(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.0}")).unwrap_or_default()
}

#[component]
fn CareerForm(existing: Option<Career>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let existing_id = existing.as_ref().map(|c| c.id.clone());
    let job_title = RwSignal::new(existing.as_ref().map(|c| c.job_title.clone()).unwrap_or_default());
    let department = RwSignal::new(existing.as_ref().map(|c| c.department.clone()).unwrap_or_default());
    let location = RwSignal::new(existing.as_ref().map(|c| c.location.clone()).unwrap_or_default());
    let job_type = RwSignal::new(existing.as_ref().map(|c| c.job_type.clone()).unwrap_or_default());
    let job_description = RwSignal::new(existing.as_ref().map(|c| c.job_description.clone()).unwrap_or_default());
    let requirements = RwSignal::new(existing.as_ref().map(|c| c.requirements.clone()).unwrap_or_default());
    let benefits = RwSignal::new(existing.as_ref().map(|c| c.benefits.clone()).unwrap_or_default());
    let min_salary = RwSignal::new(existing.as_ref().map(|c| salary_input_value(c.min_salary)).unwrap_or_default());
    let max_salary = RwSignal::new(existing.as_ref().map(|c| salary_input_value(c.max_salary)).unwrap_or_default());
    let remote_work = RwSignal::new(existing.as_ref().is_some_and(|c| c.remote_work_available));
    let publish = RwSignal::new(existing.as_ref().is_some_and(|c| c.publish_immediately));
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if job_title.get().trim().is_empty() {
            toasts.update(|t| {
                t.error("Job title is required.");
            });
            return;
        }
        // String-to-number conversion happens before the write is issued.
        let min = match parse_optional_salary(&min_salary.get()) {
            Ok(value) => value,
            Err(message) => {
                toasts.update(|t| {
                    t.error(format!("Minimum salary: {message}"));
                });
                return;
            }
        };
        let max = match parse_optional_salary(&max_salary.get()) {
            Ok(value) => value,
            Err(message) => {
                toasts.update(|t| {
                    t.error(format!("Maximum salary: {message}"));
                });
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let existing_id = existing_id.clone();
            leptos::task::spawn_local(async move {
                let payload = serde_json::json!({
                    "job_title": job_title.get_untracked().trim(),
                    "department": department.get_untracked(),
                    "location": location.get_untracked().trim(),
                    "job_type": job_type.get_untracked(),
                    "job_description": job_description.get_untracked(),
                    "requirements": requirements.get_untracked(),
                    "benefits": benefits.get_untracked(),
                    "min_salary": min,
                    "max_salary": max,
                    "remote_work_available": remote_work.get_untracked(),
                    "publish_immediately": publish.get_untracked(),
                });
                let result = match existing_id.as_deref() {
                    Some(id) => crate::net::records::update::<Career, _>(resources::CAREERS, id, &payload)
                        .await
                        .map(|_| ()),
                    None => crate::net::records::insert::<Career, _>(resources::CAREERS, &payload)
                        .await
                        .map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        toasts.update(|t| {
                            t.success("Job posting saved successfully!");
                        });
                        navigate("/careers", NavigateOptions::default());
                    }
                    Err(message) => {
                        toasts.update(|t| {
                            t.error(format!("Failed to save job: {message}"));
                        });
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &existing_id, min, max);
            busy.set(false);
        }
    };

    view! {
        <form class="form" on:submit=on_submit>
            <div class="form__grid">
                <label class="field">
                    <span class="field__label">"Job Title"</span>
                    <input
                        placeholder="e.g. Structural Engineer"
                        prop:value=move || job_title.get()
                        on:input=move |ev| job_title.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Department"</span>
                    <select
                        prop:value=move || department.get()
                        on:change=move |ev| department.set(event_target_value(&ev))
                    >
                        <option value="">"Select department"</option>
                        {DEPARTMENTS
                            .iter()
                            .map(|d| view! { <option value=*d>{*d}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Location"</span>
                    <input
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Job Type"</span>
                    <select
                        prop:value=move || job_type.get()
                        on:change=move |ev| job_type.set(event_target_value(&ev))
                    >
                        <option value="">"Select type"</option>
                        {JOB_TYPES
                            .iter()
                            .map(|t| view! { <option value=*t>{*t}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Minimum Salary"</span>
                    <input
                        placeholder="50000"
                        prop:value=move || min_salary.get()
                        on:input=move |ev| min_salary.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Maximum Salary"</span>
                    <input
                        placeholder="80000"
                        prop:value=move || max_salary.get()
                        on:input=move |ev| max_salary.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <label class="field field--wide">
                <span class="field__label">"Job Description"</span>
                <textarea
                    prop:value=move || job_description.get()
                    on:input=move |ev| job_description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="field field--wide">
                <span class="field__label">"Requirements"</span>
                <textarea
                    prop:value=move || requirements.get()
                    on:input=move |ev| requirements.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="field field--wide">
                <span class="field__label">"Benefits"</span>
                <textarea
                    prop:value=move || benefits.get()
                    on:input=move |ev| benefits.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="field field--toggle">
                <input
                    type="checkbox"
                    prop:checked=move || remote_work.get()
                    on:change=move |ev| remote_work.set(event_target_checked(&ev))
                />
                <span>"Remote work available"</span>
            </label>
            <label class="field field--toggle">
                <input
                    type="checkbox"
                    prop:checked=move || publish.get()
                    on:change=move |ev| publish.set(event_target_checked(&ev))
                />
                <span>"Publish immediately"</span>
            </label>
            <button class="form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Save Job Posting" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_range_label_both_bounds() {
        let career = Career { min_salary: Some(50000.0), max_salary: Some(80000.0), ..Career::default() };
        assert_eq!(salary_range_label(&career), "50000 - 80000");
    }

    #[test]
    fn salary_range_label_single_bound() {
        let career = Career { min_salary: Some(50000.0), ..Career::default() };
        assert_eq!(salary_range_label(&career), "from 50000");
        let career = Career { max_salary: Some(80000.0), ..Career::default() };
        assert_eq!(salary_range_label(&career), "up to 80000");
    }

    #[test]
    fn salary_range_label_unspecified() {
        assert_eq!(salary_range_label(&Career::default()), "not specified");
    }

    #[test]
    fn salary_input_value_round_trips_whole_numbers() {
        assert_eq!(salary_input_value(Some(50000.0)), "50000");
        assert_eq!(salary_input_value(None), "");
    }
}
