// ============================================================================
// ERRORES - Taxonomía tipada de autenticación / transporte / storage
// ============================================================================

use serde_json::Value;
use thiserror::Error;

/// Fallo alcanzando el servicio remoto (red o cuerpo ilegible)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Decode(String),
}

/// Fallo del key/value store persistente (localStorage en el navegador)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("localStorage no disponible")]
    Unavailable,

    #[error("Error guardando '{key}': {message}")]
    Write { key: String, message: String },
}

/// Errores del bootstrap de sesión.
///
/// Ninguno se reintenta automáticamente: el llamador decide si vuelve a
/// autenticarse.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    /// Red caída o respuesta no parseable
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// El servicio respondió pero sin `token`
    #[error("Login rechazado: {payload}")]
    Rejected { payload: Value },

    /// Llamada protegida sin sesión local
    #[error("No hay sesión activa")]
    Unauthenticated,

    /// El servicio rechazó el token presentado
    #[error("HTTP {status}: {payload}")]
    Unauthorized { status: u16, payload: Value },

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Otro login empezó mientras este esperaba respuesta
    #[error("Login reemplazado por un intento más reciente")]
    Superseded,
}

impl AuthError {
    /// Nombre estable del tipo de error para JS
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::Transport(_) => "transport",
            AuthError::Rejected { .. } => "rejected",
            AuthError::Unauthenticated => "unauthenticated",
            AuthError::Unauthorized { .. } => "unauthorized",
            AuthError::Storage(_) => "storage",
            AuthError::Superseded => "superseded",
        }
    }

    /// Payload devuelto por el servidor, si lo hay
    pub fn server_payload(&self) -> Option<&Value> {
        match self {
            AuthError::Rejected { payload } | AuthError::Unauthorized { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Mensaje legible extraído del payload (`error` o `message`)
    pub fn server_message(&self) -> Option<&str> {
        let payload = self.server_payload()?;
        payload
            .get("error")
            .or_else(|| payload.get("message"))
            .and_then(Value::as_str)
            .or_else(|| payload.as_str())
    }
}
