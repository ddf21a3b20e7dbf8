use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub usuario: String,
    pub contrasena: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub usuario: UsuarioResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsuarioResponse {
    pub nombre: String,
    /// Missing or null roles fall through to the default destination.
    #[serde(default)]
    pub nivel: Option<String>,
}

impl UsuarioResponse {
    pub fn nivel(&self) -> &str {
        self.nivel.as_deref().unwrap_or("")
    }
}

/// Body returned by the authentication service on a non-2xx status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ErrorBody {
    /// Text to show for `message`; falsy values (null, false, 0, "") yield
    /// `None` and non-string values are shown in their JSON form.
    pub fn display_message(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status and a parseable body.
    #[error("rejected with status {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Rejected { status: u16, message: Option<String> },
    /// The request never completed or a body could not be parsed.
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        let message = message.filter(|m| !m.is_empty());
        Self::Rejected { status, message }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
