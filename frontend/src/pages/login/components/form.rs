use crate::pages::login::{
    components::messages::FieldErrorMessage,
    utils::{Credentials, Field, FieldErrors},
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "mt-1 w-full px-3 py-2 border border-gray-300 rounded-lg shadow-sm focus:ring-2 focus:ring-blue-500 focus:border-blue-500";

#[component]
fn CredentialInput(
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    autocomplete: &'static str,
    values: Signal<Credentials>,
    errors: Signal<FieldErrors>,
    on_input: Callback<(Field, String)>,
) -> impl IntoView {
    let has_error = move || errors.with(|e| e.has(field));

    view! {
        <div>
            <label for=field.id() class="block text-sm font-medium text-gray-700">
                {label}
            </label>
            <input
                type=input_type
                id=field.id()
                name=field.id()
                class=INPUT_CLASS
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || values.with(|v| v.get(field).to_string())
                aria-invalid=move || if has_error() { "true" } else { "false" }
                aria-describedby=move || has_error().then_some(field.error_id())
                on:input=move |ev| on_input.call((field, event_target_value(&ev)))
            />
            <FieldErrorMessage field=field errors=errors />
        </div>
    }
}

#[component]
pub fn LoginForm(
    values: Signal<Credentials>,
    errors: Signal<FieldErrors>,
    on_input: Callback<(Field, String)>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center p-10">
            <h2 class="text-2xl font-bold text-gray-900 mb-6 text-center md:text-left">
                "Iniciar sesión"
            </h2>
            <form class="space-y-4" novalidate on:submit=move |ev| on_submit.call(ev)>
                <CredentialInput
                    field=Field::Usuario
                    label="Usuario o correo"
                    input_type="text"
                    placeholder="Escribe tu usuario o correo"
                    autocomplete="username"
                    values=values
                    errors=errors
                    on_input=on_input
                />
                <CredentialInput
                    field=Field::Contrasena
                    label="Contraseña"
                    input_type="password"
                    placeholder="••••••••••"
                    autocomplete="current-password"
                    values=values
                    errors=errors
                    on_input=on_input
                />
                <button
                    type="submit"
                    class="w-full py-2 px-4 bg-blue-900 text-white font-semibold rounded-lg shadow hover:bg-blue-800 transition"
                >
                    "Ingresar"
                </button>
            </form>
            <div class="mt-4 text-sm text-gray-600 text-center">
                <a href="#" class="text-blue-900">
                    "¿Olvidaste tu contraseña?"
                </a>
            </div>
        </div>
    }
}
