//! The session gate: single authority for identity, shell choice, and the
//! redirect policy.
//!
//! ARCHITECTURE
//! ============
//! Mounted once as the layout route wrapping every page. The gate owns the
//! `SessionState` signal, resolves the initial identity check, and is the
//! only registered listener for auth events: pages report sign-in/sign-out
//! through the [`AuthEvents`] callback and read the snapshot through the
//! read-only [`SessionReader`]; they never mutate it directly.
//!
//! Redirects are evaluated whenever the snapshot or the location changes;
//! the decision table itself lives in `state::session` as pure functions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::app_header::AppHeader;
use crate::components::app_sidebar::AppSidebar;
use crate::components::loading_screen::LoadingScreen;
use crate::state::session::{AuthEvent, SessionState, Shell, redirect_target, shell_for};

/// Read-only view of the session snapshot, provided via context.
#[derive(Clone, Copy)]
pub struct SessionReader(pub Signal<SessionState>);

/// Auth-event channel into the gate, provided via context.
#[derive(Clone, Copy)]
pub struct AuthEvents(pub Callback<AuthEvent>);

/// Latest session snapshot; side-effect-free read.
pub fn use_session() -> Signal<SessionState> {
    expect_context::<SessionReader>().0
}

/// Callback pages invoke after a successful sign-in or sign-out.
pub fn use_auth_events() -> Callback<AuthEvent> {
    expect_context::<AuthEvents>().0
}

/// Layout route wrapping every page in the application.
#[component]
pub fn SessionGate() -> impl IntoView {
    let session = RwSignal::new(SessionState::resolving());
    let events = Callback::new(move |event: AuthEvent| {
        session.update(|state| state.apply(event));
    });
    provide_context(SessionReader(session.read_only().into()));
    provide_context(AuthEvents(events));

    // Initial identity resolution. A failed check degrades to anonymous
    // instead of propagating into the page tree.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_current_identity().await {
            Some(identity) => events.run(AuthEvent::SignedIn(identity)),
            None => events.run(AuthEvent::SignedOut),
        }
    });

    let pathname = use_location().pathname;
    let navigate = use_navigate();
    Effect::new(move || {
        let state = session.get();
        let path = pathname.get();
        if let Some(target) = redirect_target(&state, &path) {
            navigate(target, NavigateOptions::default());
        }
    });

    let shell = Memo::new(move |_| shell_for(&session.get(), &pathname.get()));

    view! {
        {move || match shell.get() {
            Shell::Placeholder => view! { <LoadingScreen/> }.into_any(),
            Shell::Admin => {
                view! {
                    <div class="admin-shell">
                        <AppSidebar/>
                        <div class="admin-shell__main">
                            <AppHeader/>
                            <main class="admin-shell__content">
                                <Outlet/>
                            </main>
                        </div>
                    </div>
                }
                .into_any()
            }
            Shell::Bare => {
                view! {
                    <div class="public-shell">
                        <Outlet/>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
