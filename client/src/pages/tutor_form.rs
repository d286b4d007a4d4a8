//! Create/edit form for a tutor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/tutors/new` and `/tutors/:id/edit`. Edit mode loads the record
//! first; a failed load leaves the form hidden behind an inline error.

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::field::Field;
use crate::config::ApiConfig;
use crate::net::api;
use crate::util::validation::{FormErrors, FormMode, SaveTarget, TutorForm, save_label, validate_tutor};

const TUTORS_PATH: &str = "/tutors";
const LOAD_FAILED: &str = "Erro ao carregar tutor";

#[component]
pub fn TutorFormPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let navigate = use_navigate();
    let params = use_params_map();
    let mode = FormMode::from_param(params.read_untracked().get("id").as_deref());

    let form = RwSignal::new(TutorForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let loading = RwSignal::new(!mode.is_create());
    let saving = RwSignal::new(false);
    let page_error = RwSignal::new(None::<&'static str>);
    let load_failed = RwSignal::new(false);

    if !mode.is_create() {
        leptos::task::spawn_local(async move {
            let loaded = match mode {
                FormMode::Edit(id) => api::get_tutor(&config.get_value(), id).await.map_err(|e| e.to_string()),
                FormMode::Create | FormMode::InvalidId => Err("invalid tutor id".to_owned()),
            };
            match loaded {
                Ok(tutor) => {
                    form.try_update(|f| *f = TutorForm::from(&tutor));
                    loading.try_update(|l| *l = false);
                }
                Err(e) => {
                    warn!("failed to load tutor: {e}");
                    page_error.try_update(|p| *p = Some(LOAD_FAILED));
                    load_failed.try_update(|f| *f = true);
                    loading.try_update(|l| *l = false);
                }
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() || load_failed.get_untracked() {
            return;
        }
        let Some(target) = mode.save_target() else {
            return;
        };
        let input = match validate_tutor(&form.get_untracked()) {
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
                SaveTarget::Update(id) => api::update_tutor(&config, id, &input).await,
                SaveTarget::Create => api::create_tutor(&config, &input).await,
            };
            match saved {
                Ok(tutor) => {
                    log!("saved tutor {}", tutor.id);
                    navigate(TUTORS_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    warn!("failed to save tutor: {e}");
                    page_error.try_update(|p| *p = Some("Erro ao salvar tutor"));
                }
            }
            saving.try_update(|s| *s = false);
        });
    };

    let form_blocked = move || load_failed.get();
    let error_for = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field)));
    let title = if mode.is_create() { "Novo Tutor" } else { "Editar Tutor" };

    view! {
        <div class="page page--narrow">
            <Show when=move || loading.get()>
                <p class="page__loading">"Carregando..."</p>
            </Show>
            <h1 hidden=move || loading.get()>{title}</h1>
            <Show when=move || page_error.get().is_some()>
                <p class="page__error" role="alert">{move || page_error.get().unwrap_or_default()}</p>
                <a class="link" href=TUTORS_PATH>"Voltar para a lista"</a>
            </Show>
            <form class="form" hidden=move || loading.get() || form_blocked() on:submit=on_submit>
                <Field label="Nome" required=true error=error_for("name")>
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </Field>
                <Field label="Email" required=true error=error_for("email")>
                    <input
                        class="field__input"
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </Field>
                <Field label="Telefone" required=true error=error_for("phone")>
                    <input
                        class="field__input"
                        type="tel"
                        placeholder="(11) 99999-9999"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                </Field>
                <div class="form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || save_label(saving.get())}
                    </button>
                    <a class="btn" href=TUTORS_PATH>"Cancelar"</a>
                </div>
            </form>
        </div>
    }
}
