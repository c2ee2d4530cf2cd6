//! Login page — email + password sign-in.
//!
//! On success the page reports `SignedIn` to the session gate; the gate's
//! redirect policy then moves the visitor off this public-only route.

use leptos::prelude::*;

use crate::components::session_gate::use_auth_events;
use crate::state::session::AuthEvent;

#[component]
pub fn LoginPage() -> impl IntoView {
    let events = use_auth_events();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            error.set("Enter both email and password.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in(&email_value, &password_value).await {
                Ok(identity) => events.run(AuthEvent::SignedIn(identity)),
                Err(message) => {
                    error.set(message);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = events;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Arrow Structures"</h1>
                <p class="auth-card__subtitle">"Sign in to the admin dashboard"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@arrowstructures.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href="/auth/signup">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
