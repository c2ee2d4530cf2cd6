//! Neutral full-screen placeholder shown while the identity check resolves.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" aria-busy="true">
            <div class="loading-screen__spinner"></div>
        </div>
    }
}
