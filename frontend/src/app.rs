use crate::pages::login::LoginPage;
use leptos::*;
use leptos_meta::{provide_meta_context, Title};

pub const LOGO_SRC: &str = "/assets/clinica/logo.webp";
pub const ILUSTRACION_SRC: &str = "/assets/clinica/doctor.webp";
pub const NOMBRE_CLINICA: &str = "Clínica Vida Sana";

#[component]
pub fn ClinicApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=format!("Iniciar sesión | {}", NOMBRE_CLINICA)/>
        <LoginPage logo=LOGO_SRC ilustracion=ILUSTRACION_SRC nombre_clinica=NOMBRE_CLINICA/>
    }
}
