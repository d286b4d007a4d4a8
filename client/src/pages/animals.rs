//! Animal list with tutor names and per-row edit and delete.

#[cfg(test)]
#[path = "animals_test.rs"]
mod animals_test;

use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::net::api;
use crate::net::types::{Animal, Tutor};
use crate::state::animals::{AnimalsState, age_label, delete_prompt};
use crate::util::dialog::{confirm, delete_label};

const LOAD_FAILED: &str = "Erro ao carregar dados";

async fn fetch_all(config: &ApiConfig) -> Result<(Vec<Animal>, Vec<Tutor>), ApiError> {
    load_page(api::list_animals(config), api::list_tutors(config)).await
}

/// Drive both list requests concurrently; the first failure fails the page.
async fn load_page<A, T>(animals: A, tutors: T) -> Result<(Vec<Animal>, Vec<Tutor>), ApiError>
where
    A: Future<Output = Result<Vec<Animal>, ApiError>>,
    T: Future<Output = Result<Vec<Tutor>, ApiError>>,
{
    futures::try_join!(animals, tutors)
}

async fn refresh_animals(config: &ApiConfig, state: RwSignal<AnimalsState>) {
    match fetch_all(config).await {
        Ok((animals, tutors)) => {
            state.try_update(|s| s.finish_loading(animals, tutors));
        }
        Err(e) => {
            warn!("failed to load animals: {e}");
            state.try_update(|s| s.fail_loading(LOAD_FAILED));
        }
    }
}

#[component]
pub fn AnimalsPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let state = RwSignal::new(AnimalsState::loading());

    leptos::task::spawn_local(async move {
        refresh_animals(&config.get_value(), state).await;
    });

    let on_delete = Callback::new(move |(id, name): (i64, String)| {
        if !confirm(&delete_prompt(&name)) {
            return;
        }
        state.update(|s| s.begin_delete(id));
        leptos::task::spawn_local(async move {
            let config = config.get_value();
            match api::delete_animal(&config, id).await {
                Ok(()) => {
                    log!("deleted animal {id}");
                    refresh_animals(&config, state).await;
                    state.try_update(|s| s.end_delete());
                }
                Err(e) => {
                    warn!("failed to delete animal {id}: {e}");
                    state.try_update(|s| s.fail_delete("Erro ao excluir animal"));
                }
            }
        });
    });

    view! {
        <Show
            when=move || !state.with(|s| s.loading)
            fallback=|| view! { <div class="page page--centered"><p>"Carregando..."</p></div> }
        >
            <div class="page animals-page">
                <header class="page__header">
                    <h1>"Animais"</h1>
                    <div class="page__actions">
                        <a class="btn" href="/">"Voltar"</a>
                        <a class="btn btn--primary" href="/animals/new">"Novo Animal"</a>
                    </div>
                </header>
                <Show when=move || state.with(|s| s.error.is_some())>
                    <p class="page__error" role="alert">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Nome"</th>
                            <th>"Espécie"</th>
                            <th>"Raça"</th>
                            <th>"Idade"</th>
                            <th>"Tutor"</th>
                            <th>"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let s = state.get();
                            if s.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="table__empty" colspan="6">"Nenhum animal cadastrado ainda."</td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            s.items
                                .iter()
                                .map(|animal| {
                                    let id = animal.id;
                                    let name = animal.name.clone();
                                    let deleting = s.is_deleting(id);
                                    view! {
                                        <tr>
                                            <td class="table__primary">{animal.name.clone()}</td>
                                            <td>{animal.species.label()}</td>
                                            <td>{animal.breed.clone()}</td>
                                            <td>{age_label(animal.age)}</td>
                                            <td>{s.tutor_name(animal).to_owned()}</td>
                                            <td class="table__actions">
                                                <a class="link" href=format!("/animals/{id}/edit")>"Editar"</a>
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
