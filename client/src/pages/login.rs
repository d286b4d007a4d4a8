//! Login page: email + password checked against the users resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page commits `Authenticating` synchronously, releases the session
//! signal while the gateway call is in flight, and applies the outcome when
//! it lands. Success navigates to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::error::AuthError;
use crate::net::gateway::{AuthGateway, HttpAuthGateway};
use crate::state::session::AppSession;
use crate::util::validation::validate_login;

pub const LOGIN_FAILED_MESSAGE: &str = "Email ou senha inválidos";

fn submit_label(loading: bool) -> &'static str {
    if loading { "Entrando..." } else { "Entrar" }
}

/// Inline message for a finished attempt. A superseded attempt stays quiet;
/// whichever attempt won already updated the page.
fn failure_message(err: &AuthError) -> Option<&'static str> {
    match err {
        AuthError::InvalidCredentials => Some(LOGIN_FAILED_MESSAGE),
        AuthError::Superseded => None,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let loading = move || session.with(|m| m.state().is_loading());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(|m| m.state().is_loading()) {
            return;
        }
        let (email_value, password_value) = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        session.update(|m| m.begin_login());

        let gateway = HttpAuthGateway::new(config.clone());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = gateway.authenticate(&email_value, &password_value).await;
            match session.try_update(|m| m.complete_login(outcome)) {
                Some(Ok(())) => navigate("/", NavigateOptions::default()),
                Some(Err(e)) => {
                    if let Some(message) = failure_message(&e) {
                        error.set(Some(message));
                    }
                }
                None => leptos::logging::warn!("session disposed before login completed"),
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"AnimalHotels - Login"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <label class="field">
                    <span class="field__label">"Email"</span>
                    <input
                        class="field__input"
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Senha"</span>
                    <input
                        class="field__input"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary login-button" type="submit" disabled=loading>
                    {move || submit_label(loading())}
                </button>
            </form>
        </div>
    }
}
