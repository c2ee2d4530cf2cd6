//! Toast rendering.
//!
//! Reads the shared `ToastState` context, renders the queue top-right, and
//! auto-dismisses each toast after a few seconds (click dismisses early).

use leptos::prelude::*;

use crate::state::ui::{ToastLevel, ToastState};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_SECS: u64 = 4;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    {
        // Watch for new toasts and schedule their dismissal.
        let scheduled = RwSignal::new(0u64);
        Effect::new(move || {
            let state = toasts.get();
            for toast in &state.toasts {
                if toast.id < scheduled.get_untracked() {
                    continue;
                }
                let id = toast.id;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(AUTO_DISMISS_SECS)).await;
                    toasts.update(|s| s.dismiss(id));
                });
            }
            if let Some(last) = state.toasts.last() {
                scheduled.set(last.id + 1);
            }
        });
    }

    view! {
        <div class="toasts">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.level {
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| toasts.update(|s| s.dismiss(id))>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
