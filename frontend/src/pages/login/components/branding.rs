use leptos::*;

pub const DEFAULT_NOMBRE_CLINICA: &str = "Clínica Salud Integral";

/// Clinic identity handed down by the application shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub logo: Option<String>,
    pub ilustracion: Option<String>,
    pub nombre_clinica: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            logo: None,
            ilustracion: None,
            nombre_clinica: DEFAULT_NOMBRE_CLINICA.to_string(),
        }
    }
}

impl Branding {
    pub fn new(
        logo: Option<String>,
        ilustracion: Option<String>,
        nombre_clinica: Option<String>,
    ) -> Self {
        Self {
            logo,
            ilustracion,
            nombre_clinica: nombre_clinica.unwrap_or_else(|| DEFAULT_NOMBRE_CLINICA.to_string()),
        }
    }

    pub fn footer_text(&self) -> String {
        format!(
            "© 2025 {} - Todos los derechos reservados | Soporte",
            self.nombre_clinica
        )
    }
}

#[component]
pub fn BrandLogo(logo: Option<String>) -> impl IntoView {
    logo.map(|src| {
        view! {
            <div class="col-span-1 md:col-span-2 flex justify-center items-center p-10 pb-0 bg-white">
                <img src=src alt="Logo clínica" class="w-40 object-contain"/>
            </div>
        }
    })
}

#[component]
pub fn BrandIntro(ilustracion: Option<String>, nombre_clinica: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-8 bg-gray-50">
            {ilustracion.map(|src| {
                view! { <img src=src alt="Ilustración médica" class="w-full mb-6 object-contain"/> }
            })}
            <h1 class="text-2xl font-bold text-blue-900 text-center">
                {nombre_clinica.to_uppercase()}
            </h1>
            <p class="mt-4 text-gray-600 text-center max-w-sm">
                "Bienvenido al Sistema de Gestión Clínica. Accede con tu cuenta para continuar según tu rol asignado."
            </p>
        </div>
    }
}

#[component]
pub fn BrandFooter(text: String) -> impl IntoView {
    view! {
        <footer class="absolute bottom-4 text-xs text-gray-500 text-center w-full">{text}</footer>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn branding_defaults_clinic_name() {
        let branding = Branding::new(None, None, None);
        assert_eq!(branding, Branding::default());
        assert_eq!(branding.nombre_clinica, DEFAULT_NOMBRE_CLINICA);
        assert_eq!(
            branding.footer_text(),
            "© 2025 Clínica Salud Integral - Todos los derechos reservados | Soporte"
        );
    }

    #[test]
    fn logo_is_omitted_without_source() {
        let html = render_to_string(|| view! { <BrandLogo logo=None /> });
        assert!(!html.contains("<img"));

        let html = render_to_string(|| {
            view! { <BrandLogo logo=Some("/assets/logo.webp".to_string()) /> }
        });
        assert!(html.contains("src=\"/assets/logo.webp\""));
        assert!(html.contains("Logo clínica"));
    }

    #[test]
    fn intro_uppercases_clinic_name() {
        let html = render_to_string(|| {
            view! { <BrandIntro ilustracion=None nombre_clinica="Clínica Vida Sana".to_string() /> }
        });
        assert!(html.contains("CLÍNICA VIDA SANA"));
        assert!(!html.contains("Ilustración médica"));
    }
}
