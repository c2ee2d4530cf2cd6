//! Unauthenticated landing page.
//!
//! The only route an anonymous visitor may stay on besides login/signup.

use leptos::prelude::*;

use crate::components::session_gate::use_session;

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="landing">
            <h1>"Arrow Structures Admin"</h1>
            <p>"Management console for the Arrow Structures marketing website."</p>
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| view! { <a class="landing__cta" href="/auth/login">"Sign in"</a> }
            >
                <a class="landing__cta" href="/dashboard">"Go to dashboard"</a>
            </Show>
        </div>
    }
}
