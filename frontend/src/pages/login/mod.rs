use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use components::branding::Branding;
pub use panel::LoginPanel;

#[component]
pub fn LoginPage(
    #[prop(optional, into)] logo: Option<String>,
    #[prop(optional, into)] ilustracion: Option<String>,
    #[prop(optional, into)] nombre_clinica: Option<String>,
) -> impl IntoView {
    let branding = Branding::new(logo, ilustracion, nombre_clinica);
    view! { <LoginPanel branding=branding /> }
}
