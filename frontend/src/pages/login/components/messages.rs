use crate::pages::login::utils::{Field, FieldErrors};
use leptos::*;

#[component]
pub fn FieldErrorMessage(field: Field, errors: Signal<FieldErrors>) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|e| e.has(field)) fallback=|| ()>
            <p id=field.error_id() class="mt-1 text-sm text-red-600">
                {move || errors.with(|e| e.get(field).to_string())}
            </p>
        </Show>
    }
}
