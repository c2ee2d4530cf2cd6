//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::session_gate::SessionGate;
use crate::components::toast_host::ToastHost;
use crate::pages::blogs::{AddBlogPage, BlogsPage, EditBlogPage};
use crate::pages::careers::{AddCareerPage, CareersPage, EditCareerPage};
use crate::pages::clients::{AddClientPage, ClientsPage, EditClientPage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::news::{AddNewsPage, EditNewsPage, NewsPage};
use crate::pages::project_categories::{AddProjectCategoryPage, EditProjectCategoryPage, ProjectCategoriesPage};
use crate::pages::projects::{AddProjectPage, EditProjectPage, ProjectsPage};
use crate::pages::signup::SignupPage;
use crate::pages::slider::{AddSlidePage, EditSlidePage, SliderPage};
use crate::pages::team::{AddTeamMemberPage, EditTeamMemberPage, TeamPage};
use crate::state::ui::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// WASM entry point invoked after the bundle loads in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}

/// Root application component.
///
/// Provides the toast context and mounts the session gate as the layout
/// route around every page; the gate itself provides the session contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/arrow-admin.css"/>
        <Title text="Arrow Structures Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=StaticSegment("") view=SessionGate>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignupPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>

                    <Route path=StaticSegment("blogs") view=BlogsPage/>
                    <Route path=(StaticSegment("blogs"), StaticSegment("add")) view=AddBlogPage/>
                    <Route
                        path=(StaticSegment("blogs"), StaticSegment("edit"), ParamSegment("id"))
                        view=EditBlogPage
                    />

                    <Route path=StaticSegment("news") view=NewsPage/>
                    <Route path=(StaticSegment("news"), StaticSegment("add")) view=AddNewsPage/>
                    <Route
                        path=(StaticSegment("news"), StaticSegment("edit"), ParamSegment("id"))
                        view=EditNewsPage
                    />

                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=(StaticSegment("projects"), StaticSegment("add")) view=AddProjectPage/>
                    <Route
                        path=(StaticSegment("projects"), StaticSegment("edit"), ParamSegment("id"))
                        view=EditProjectPage
                    />
                    <Route
                        path=(StaticSegment("projects"), StaticSegment("categories"))
                        view=ProjectCategoriesPage
                    />
                    <Route
                        path=(StaticSegment("projects"), StaticSegment("categories"), StaticSegment("add"))
                        view=AddProjectCategoryPage
                    />
                    <Route
                        path=(
                            StaticSegment("projects"),
                            StaticSegment("categories"),
                            StaticSegment("edit"),
                            ParamSegment("id"),
                        )
                        view=EditProjectCategoryPage
                    />

                    <Route path=StaticSegment("clients") view=ClientsPage/>
                    <Route path=(StaticSegment("clients"), StaticSegment("add")) view=AddClientPage/>
                    <Route
                        path=(StaticSegment("clients"), StaticSegment("edit"), ParamSegment("id"))
                        view=EditClientPage
                    />

                    <Route path=StaticSegment("careers") view=CareersPage/>
                    <Route path=(StaticSegment("careers"), StaticSegment("add")) view=AddCareerPage/>
                    <Route
                        path=(StaticSegment("careers"), ParamSegment("id"), StaticSegment("edit"))
                        view=EditCareerPage
                    />

                    <Route path=StaticSegment("team") view=TeamPage/>
                    <Route path=(StaticSegment("team"), StaticSegment("add")) view=AddTeamMemberPage/>
                    <Route
                        path=(StaticSegment("team"), StaticSegment("edit"), ParamSegment("id"))
                        view=EditTeamMemberPage
                    />

                    <Route path=StaticSegment("slider") view=SliderPage/>
                    <Route path=(StaticSegment("slider"), StaticSegment("add")) view=AddSlidePage/>
                    <Route
                        path=(StaticSegment("slider"), StaticSegment("edit"), ParamSegment("id"))
                        view=EditSlidePage
                    />
                </ParentRoute>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
