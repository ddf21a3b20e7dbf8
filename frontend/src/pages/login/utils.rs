use crate::api::{ApiError, LoginRequest, LoginResponse};

pub const USUARIO_REQUIRED: &str = "El usuario es obligatorio.";
pub const CONTRASENA_REQUIRED: &str = "La contraseña es obligatoria.";
pub const LOGIN_FAILED_FALLBACK: &str = "Error al iniciar sesión";
pub const CONNECTION_ERROR: &str = "Error de conexión con el servidor";

pub const ADMIN_LEVEL: &str = "admin";
pub const ADMIN_DESTINATION: &str = "/dashboard-admin";
pub const DEFAULT_DESTINATION: &str = "/inicio";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Usuario,
    Contrasena,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Field::Usuario => "usuario",
            Field::Contrasena => "contrasena",
        }
    }

    pub fn error_id(self) -> &'static str {
        match self {
            Field::Usuario => "usuario-error",
            Field::Contrasena => "contrasena-error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub usuario: String,
    pub contrasena: String,
}

impl Credentials {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Usuario => &self.usuario,
            Field::Contrasena => &self.contrasena,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Usuario => self.usuario = value,
            Field::Contrasena => self.contrasena = value,
        }
    }

    pub fn trimmed(&self) -> LoginRequest {
        LoginRequest {
            usuario: self.usuario.trim().to_string(),
            contrasena: self.contrasena.trim().to_string(),
        }
    }
}

/// Per-field messages; an empty string means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub usuario: String,
    pub contrasena: String,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Usuario => &self.usuario,
            Field::Contrasena => &self.contrasena,
        }
    }

    pub fn has(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Usuario => self.usuario.clear(),
            Field::Contrasena => self.contrasena.clear(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.usuario.is_empty() && self.contrasena.is_empty()
    }
}

/// Trims both fields and checks each one independently.
///
/// The returned errors always cover both fields, so callers can replace the
/// previous errors in a single update.
pub fn validate_credentials(values: &Credentials) -> (LoginRequest, FieldErrors) {
    let request = values.trimmed();
    let errors = FieldErrors {
        usuario: required(&request.usuario, USUARIO_REQUIRED),
        contrasena: required(&request.contrasena, CONTRASENA_REQUIRED),
    };
    (request, errors)
}

fn required(value: &str, message: &str) -> String {
    if value.is_empty() {
        message.to_string()
    } else {
        String::new()
    }
}

pub fn destination_for(nivel: &str) -> &'static str {
    if nivel == ADMIN_LEVEL {
        ADMIN_DESTINATION
    } else {
        DEFAULT_DESTINATION
    }
}

pub fn welcome_message(nombre: &str) -> String {
    format!("Bienvenido {}", nombre)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub notification: String,
    pub redirect: Option<&'static str>,
}

pub fn resolve_outcome(result: &Result<LoginResponse, ApiError>) -> LoginOutcome {
    match result {
        Ok(response) => LoginOutcome {
            notification: welcome_message(&response.usuario.nombre),
            redirect: Some(destination_for(response.usuario.nivel())),
        },
        Err(ApiError::Rejected { message, .. }) => LoginOutcome {
            notification: message
                .clone()
                .unwrap_or_else(|| LOGIN_FAILED_FALLBACK.to_string()),
            redirect: None,
        },
        Err(ApiError::Transport(_)) => LoginOutcome {
            notification: CONNECTION_ERROR.to_string(),
            redirect: None,
        },
    }
}
