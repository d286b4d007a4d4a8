//! Tutor list with per-row edit and delete.

use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api;
use crate::state::tutors::{TutorsState, delete_prompt};
use crate::util::dialog::{confirm, delete_label};

const LOAD_FAILED: &str = "Erro ao carregar tutores";

/// Fetch the list into `state`. A failure keeps the previous rows.
async fn refresh_tutors(config: &ApiConfig, state: RwSignal<TutorsState>) {
    match api::list_tutors(config).await {
        Ok(items) => {
            state.try_update(|s| s.finish_loading(items));
        }
        Err(e) => {
            warn!("failed to load tutors: {e}");
            state.try_update(|s| s.fail_loading(LOAD_FAILED));
        }
    }
}

#[component]
pub fn TutorsPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let state = RwSignal::new(TutorsState::loading());

    leptos::task::spawn_local(async move {
        refresh_tutors(&config.get_value(), state).await;
    });

    let on_delete = Callback::new(move |(id, name): (i64, String)| {
        if !confirm(&delete_prompt(&name)) {
            return;
        }
        state.update(|s| s.begin_delete(id));
        leptos::task::spawn_local(async move {
            let config = config.get_value();
            match api::delete_tutor(&config, id).await {
                Ok(()) => {
                    log!("deleted tutor {id}");
                    refresh_tutors(&config, state).await;
                    state.try_update(|s| s.end_delete());
                }
                Err(e) => {
                    warn!("failed to delete tutor {id}: {e}");
                    state.try_update(|s| s.fail_delete("Erro ao excluir tutor"));
                }
            }
        });
    });

    view! {
        <Show
            when=move || !state.with(|s| s.loading)
            fallback=|| view! { <div class="page page--centered"><p>"Carregando..."</p></div> }
        >
            <div class="page tutors-page">
                <header class="page__header">
                    <h1>"Tutores"</h1>
                    <div class="page__actions">
                        <a class="btn" href="/">"Voltar"</a>
                        <a class="btn btn--primary" href="/tutors/new">"Novo Tutor"</a>
                    </div>
                </header>
                <Show when=move || state.with(|s| s.error.is_some())>
                    <p class="page__error" role="alert">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Nome"</th>
                            <th>"Email"</th>
                            <th>"Telefone"</th>
                            <th>"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let s = state.get();
                            if s.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="table__empty" colspan="4">"Nenhum tutor cadastrado ainda."</td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            s.items
                                .iter()
                                .map(|tutor| {
                                    let id = tutor.id;
                                    let name = tutor.name.clone();
                                    let deleting = s.is_deleting(id);
                                    view! {
                                        <tr>
                                            <td class="table__primary">{tutor.name.clone()}</td>
                                            <td>{tutor.email.clone()}</td>
                                            <td>{tutor.phone.clone()}</td>
                                            <td class="table__actions">
                                                <a class="link" href=format!("/tutors/{id}/edit")>"Editar"</a>
                                                <button
                                                    class="link link--danger"
                                                    disabled=deleting
                                                    on:click=move |_| on_delete.run((id, name.clone()))
                                                >
                                                    {delete_label(deleting)}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
