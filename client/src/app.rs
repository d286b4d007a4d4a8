//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` builds the session machine (restore already applied) and hands it
//! to [`App`], which owns it as a signal for the lifetime of the page. Every
//! route except `/login` is wrapped in a `ProtectedRoute` driven by the same
//! guard.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{ProtectedRoute, Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::config::ApiConfig;
use crate::pages::{
    animal_form::AnimalFormPage, animals::AnimalsPage, dashboard::DashboardPage, login::LoginPage,
    tutor_form::TutorFormPage, tutors::TutorsPage,
};
use crate::state::session::AppSession;
use crate::util::auth::{LOGIN_PATH, route_condition};

/// Root application component.
///
/// Provides the session and API config contexts and sets up client-side
/// routing.
#[component]
pub fn App(session: AppSession) -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(session);

    provide_context(session);
    provide_context(ApiConfig::from_build_env());

    let condition = move || route_condition(session);
    let redirect = || LOGIN_PATH;

    view! {
        <Title text="AnimalHotels"/>

        <Router>
            <main>
                <Routes fallback=|| "Página não encontrada.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <ProtectedRoute
                        path=StaticSegment("")
                        condition=condition
                        redirect_path=redirect
                        view=DashboardPage
                    />
                    <ProtectedRoute
                        path=StaticSegment("tutors")
                        condition=condition
                        redirect_path=redirect
                        view=TutorsPage
                    />
                    <ProtectedRoute
                        path=(StaticSegment("tutors"), StaticSegment("new"))
                        condition=condition
                        redirect_path=redirect
                        view=TutorFormPage
                    />
                    <ProtectedRoute
                        path=(StaticSegment("tutors"), ParamSegment("id"), StaticSegment("edit"))
                        condition=condition
                        redirect_path=redirect
                        view=TutorFormPage
                    />
                    <ProtectedRoute
                        path=StaticSegment("animals")
                        condition=condition
                        redirect_path=redirect
                        view=AnimalsPage
                    />
                    <ProtectedRoute
                        path=(StaticSegment("animals"), StaticSegment("new"))
                        condition=condition
                        redirect_path=redirect
                        view=AnimalFormPage
                    />
                    <ProtectedRoute
                        path=(StaticSegment("animals"), ParamSegment("id"), StaticSegment("edit"))
                        condition=condition
                        redirect_path=redirect
                        view=AnimalFormPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
