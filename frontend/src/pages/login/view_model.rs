use super::repository::LoginRepository;
use super::utils::{self, Credentials, Field, FieldErrors};
use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse};
use crate::utils::browser::{AlertNotifier, LocationNavigator, Navigator, Notifier};
use leptos::*;
use std::rc::Rc;

/// Side-effect capabilities used once a login attempt completes.
#[derive(Clone)]
pub struct LoginServices {
    pub notifier: Rc<dyn Notifier>,
    pub navigator: Rc<dyn Navigator>,
}

impl Default for LoginServices {
    fn default() -> Self {
        Self {
            notifier: Rc::new(AlertNotifier),
            navigator: Rc::new(LocationNavigator),
        }
    }
}

pub fn use_login_services() -> LoginServices {
    use_context::<LoginServices>().unwrap_or_default()
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub values: RwSignal<Credentials>,
    pub errors: RwSignal<FieldErrors>,
    pub login_action: Action<LoginRequest, Result<LoginResponse, ApiError>>,
}

impl LoginViewModel {
    pub fn set_field(&self, field: Field, value: String) {
        if self.errors.with_untracked(|errors| errors.has(field)) {
            self.errors.update(|errors| errors.clear(field));
        }
        self.values.update(|values| values.set(field, value));
    }

    /// Validates the current values and replaces both field errors at once.
    /// Returns the trimmed request only when nothing failed.
    pub fn prepare_submission(&self) -> Option<LoginRequest> {
        let (request, errors) = utils::validate_credentials(&self.values.get_untracked());
        let valid = errors.is_empty();
        self.errors.set(errors);
        valid.then_some(request)
    }

    // Overlapping submissions are allowed; every completion is applied.
    pub fn submit(&self) {
        if let Some(request) = self.prepare_submission() {
            self.login_action.dispatch(request);
        }
    }
}

pub fn apply_outcome(
    result: &Result<LoginResponse, ApiError>,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) {
    match result {
        Ok(response) => log::info!("login accepted (nivel={})", response.usuario.nivel()),
        Err(err @ ApiError::Rejected { .. }) => log::warn!("login {}", err),
        Err(ApiError::Transport(cause)) => log::error!("login request failed: {}", cause),
    }

    let outcome = utils::resolve_outcome(result);
    notifier.notify(&outcome.notification);
    if let Some(path) = outcome.redirect {
        navigator.navigate(path);
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LoginRepository::new_with_client(Rc::new(api));
    let services = use_login_services();

    let values = create_rw_signal(Credentials::default());
    let errors = create_rw_signal(FieldErrors::default());

    let login_action = create_action(move |request: &LoginRequest| {
        let repo = repository.clone();
        let request = request.clone();
        async move { repo.login(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            apply_outcome(
                &result,
                services.notifier.as_ref(),
                services.navigator.as_ref(),
            );
        }
    });

    LoginViewModel {
        values,
        errors,
        login_action,
    }
}
