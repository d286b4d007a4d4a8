//! Labelled form field with an inline validation message.

use leptos::prelude::*;

#[component]
pub fn Field(
    label: &'static str,
    #[prop(optional)] required: bool,
    error: Signal<Option<&'static str>>,
    children: Children,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">
                {label}
                {required.then(|| view! { <span class="field__required">" *"</span> })}
            </span>
            {children()}
            <Show when=move || error.get().is_some()>
                <p class="field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </label>
    }
}
