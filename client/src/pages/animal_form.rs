//! Create/edit form for an animal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/animals/new` and `/animals/:id/edit`. The tutor list is always
//! loaded for the owner select; edit mode also loads the record. Creating with
//! no tutors on file shows a notice pointing at the tutor form instead.

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::field::Field;
use crate::config::ApiConfig;
use crate::net::api;
use crate::net::types::{Species, Tutor};
use crate::state::animals::needs_tutor_first;
use crate::util::validation::{AnimalForm, FormErrors, FormMode, SaveTarget, save_label, validate_animal};

const ANIMALS_PATH: &str = "/animals";
const LOAD_FAILED: &str = "Erro ao carregar animal";

#[component]
pub fn AnimalFormPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let navigate = use_navigate();
    let params = use_params_map();
    let mode = FormMode::from_param(params.read_untracked().get("id").as_deref());

    let form = RwSignal::new(AnimalForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let tutors = RwSignal::new(Vec::<Tutor>::new());
    let tutors_loading = RwSignal::new(true);
    let record_loading = RwSignal::new(!mode.is_create());
    let saving = RwSignal::new(false);
    let page_error = RwSignal::new(None::<&'static str>);
    let load_failed = RwSignal::new(false);

    leptos::task::spawn_local(async move {
        match api::list_tutors(&config.get_value()).await {
            Ok(items) => {
                tutors.try_update(|t| *t = items);
            }
            Err(e) => {
                warn!("failed to load tutors: {e}");
                page_error.try_update(|p| *p = Some("Erro ao carregar tutores"));
            }
        }
        tutors_loading.try_update(|l| *l = false);
    });

    if !mode.is_create() {
        leptos::task::spawn_local(async move {
            let loaded = match mode {
                FormMode::Edit(id) => api::get_animal(&config.get_value(), id).await.map_err(|e| e.to_string()),
                FormMode::Create | FormMode::InvalidId => Err("invalid animal id".to_owned()),
            };
            match loaded {
                Ok(animal) => {
                    form.try_update(|f| *f = AnimalForm::from(&animal));
                    record_loading.try_update(|l| *l = false);
                }
                Err(e) => {
                    warn!("failed to load animal: {e}");
                    page_error.try_update(|p| *p = Some(LOAD_FAILED));
                    load_failed.try_update(|f| *f = true);
                    record_loading.try_update(|l| *l = false);
                }
            }
        });
    }

    let loading = move || tutors_loading.get() || record_loading.get();
    let show_notice = move || {
        !loading() && page_error.get().is_none() && tutors.with(|t| needs_tutor_first(!mode.is_create(), t.len()))
    };
    let record_failed = move || load_failed.get();
    let show_form = move || !loading() && !show_notice() && !record_failed();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() || load_failed.get_untracked() {
            return;
        }
        let Some(target) = mode.save_target() else {
            return;
        };
        let input = match validate_animal(&form.get_untracked()) {
            Ok(input) => input,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FormErrors::default());
        page_error.set(None);
        saving.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let config = config.get_value();
            let saved = match target {
                SaveTarget::Update(id) => api::update_animal(&config, id, &input).await,
                SaveTarget::Create => api::create_animal(&config, &input).await,
            };
            match saved {
                Ok(animal) => {
                    log!("saved animal {}", animal.id);
                    navigate(ANIMALS_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    warn!("failed to save animal: {e}");
                    page_error.try_update(|p| *p = Some("Erro ao salvar animal"));
                }
            }
            saving.try_update(|s| *s = false);
        });
    };

    let error_for = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field)));
    let title = if mode.is_create() { "Novo Animal" } else { "Editar Animal" };

    view! {
        <div class="page page--narrow">
            <Show when=loading>
                <p class="page__loading">"Carregando..."</p>
            </Show>
            <Show when=move || page_error.get().is_some()>
                <p class="page__error" role="alert">{move || page_error.get().unwrap_or_default()}</p>
                <a class="link" href=ANIMALS_PATH>"Voltar para a lista"</a>
            </Show>
            <Show when=show_notice>
                <div class="notice notice--warning">
                    <p>"Você precisa cadastrar pelo menos um tutor antes de cadastrar um animal."</p>
                </div>
                <a class="btn btn--primary" href="/tutors/new">"Cadastrar Tutor"</a>
            </Show>
            <h1 hidden=move || !show_form()>{title}</h1>
            <form class="form" hidden=move || !show_form() on:submit=on_submit>
                <Field label="Nome" required=true error=error_for("name")>
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </Field>
                <Field label="Espécie" required=true error=error_for("species")>
                    <select
                        class="field__input"
                        prop:value=move || form.with(|f| f.species.clone())
                        on:change=move |ev| form.update(|f| f.species = event_target_value(&ev))
                    >
                        <option value="">"Selecione..."</option>
                        {Species::ALL
                            .iter()
                            .map(|species| view! { <option value=species.as_str()>{species.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </Field>
                <Field label="Raça" required=true error=error_for("breed")>
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || form.with(|f| f.breed.clone())
                        on:input=move |ev| form.update(|f| f.breed = event_target_value(&ev))
                    />
                </Field>
                <Field label="Idade" required=true error=error_for("age")>
                    <input
                        class="field__input"
                        type="number"
                        min="0"
                        max="30"
                        prop:value=move || form.with(|f| f.age.clone())
                        on:input=move |ev| form.update(|f| f.age = event_target_value(&ev))
                    />
                </Field>
                <Field label="Tutor" required=true error=error_for("tutor_id")>
                    <select
                        class="field__input"
                        prop:value=move || form.with(|f| f.tutor_id.clone())
                        on:change=move |ev| form.update(|f| f.tutor_id = event_target_value(&ev))
                    >
                        <option value="">"Selecione um tutor..."</option>
                        {move || {
                            tutors
                                .get()
                                .into_iter()
                                .map(|tutor| view! { <option value=tutor.id.to_string()>{tutor.name}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </Field>
                <Field label="URL da Foto" error=error_for("photo_url")>
                    <input
                        class="field__input"
                        type="url"
                        placeholder="https://exemplo.com/foto.jpg"
                        prop:value=move || form.with(|f| f.photo_url.clone())
                        on:input=move |ev| form.update(|f| f.photo_url = event_target_value(&ev))
                    />
                </Field>
                <div class="form__actions">
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || saving.get() || tutors.with(Vec::is_empty)
                    >
                        {move || save_label(saving.get())}
                    </button>
                    <a class="btn" href=ANIMALS_PATH>"Cancelar"</a>
                </div>
            </form>
        </div>
    }
}
