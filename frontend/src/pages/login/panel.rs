use crate::pages::login::{
    components::{
        branding::{BrandFooter, BrandIntro, BrandLogo, Branding},
        form::LoginForm,
    },
    utils::Field,
    view_model::use_login_view_model,
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel(branding: Branding) -> impl IntoView {
    let vm = use_login_view_model();
    let footer = branding.footer_text();
    let Branding {
        logo,
        ilustracion,
        nombre_clinica,
    } = branding;

    let on_input = {
        let vm = vm.clone();
        Callback::new(move |(field, value): (Field, String)| vm.set_field(field, value))
    };

    let on_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        })
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-200 px-4 relative">
            <div class="max-w-5xl w-full bg-white shadow-lg rounded-xl grid grid-cols-1 md:grid-cols-2 overflow-hidden">
                <BrandLogo logo=logo />
                <BrandIntro ilustracion=ilustracion nombre_clinica=nombre_clinica />
                <LoginForm
                    values=vm.values.into()
                    errors=vm.errors.into()
                    on_input=on_input
                    on_submit=on_submit
                />
            </div>
            <BrandFooter text=footer />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::recording_services, ssr::render_with_services};

    #[test]
    fn panel_renders_default_branding_and_form() {
        let (services, notifier, navigator) = recording_services();
        let html = render_with_services(services, || {
            view! { <LoginPanel branding=Branding::default() /> }
        });

        assert!(html.contains("CLÍNICA SALUD INTEGRAL"));
        assert!(html.contains("Iniciar sesión"));
        assert!(html.contains("© 2025 Clínica Salud Integral - Todos los derechos reservados | Soporte"));
        assert!(!html.contains("<img"));
        assert!(notifier.messages().is_empty());
        assert!(navigator.paths().is_empty());
    }

    #[test]
    fn panel_renders_supplied_images() {
        let (services, _, _) = recording_services();
        let html = render_with_services(services, || {
            let branding = Branding::new(
                Some("/logo.webp".into()),
                Some("/doctor.webp".into()),
                Some("Clínica Norte".into()),
            );
            view! { <LoginPanel branding=branding /> }
        });

        assert!(html.contains("src=\"/logo.webp\""));
        assert!(html.contains("src=\"/doctor.webp\""));
        assert!(html.contains("CLÍNICA NORTE"));
    }
}
