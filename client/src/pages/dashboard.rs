//! Dashboard: the authenticated landing route.
//!
//! Greets the session user and links to the tutor and animal lists. Logout
//! clears the session and returns to the login page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::AppSession;
use crate::util::auth::LOGIN_PATH;

fn greeting(name: Option<&str>) -> String {
    format!("Olá, {}", name.unwrap_or_default())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let navigate = use_navigate();

    let user_name = move || session.with(|m| greeting(m.state().user().map(|u| u.name.as_str())));

    let on_logout = move |_| {
        session.update(|m| m.logout());
        leptos::logging::log!("logged out");
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <h1>"Dashboard"</h1>
                <div class="page__actions">
                    <span class="dashboard-page__greeting">{user_name}</span>
                    <button class="btn btn--danger" on:click=on_logout>
                        "Sair"
                    </button>
                </div>
            </header>
            <div class="dashboard-page__cards">
                <a class="card" href="/tutors">
                    <h2>"Tutores"</h2>
                    <p>"Gerenciar tutores"</p>
                </a>
                <a class="card" href="/animals">
                    <h2>"Animais"</h2>
                    <p>"Gerenciar animais"</p>
                </a>
            </div>
        </div>
    }
}
