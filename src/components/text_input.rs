//! Form input with an inline validation message.

use leptos::prelude::*;

/// Text input bound to `value`, rendering `error` beneath when present.
#[component]
pub fn TextInput(
    /// DOM id of the underlying input element.
    id: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <input
                class="field__input"
                class:field__input--invalid=move || error.get().is_some()
                id=id
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <span class="field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
