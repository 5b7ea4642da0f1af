// ============================================================================
// AUTH SERVICE - Bootstrap de sesión (login + persistencia + llamadas protegidas)
// ============================================================================

use std::cell::Cell;

use serde_json::{json, Value};

use crate::error::{AuthError, StorageError};
use crate::models::auth::SessionRecord;
use crate::services::api_client::HttpTransport;
use crate::state::session_store::SessionStore;
use crate::utils::constants::{LOGIN_PATH, STORAGE_KEY_AUTH_TOKEN};
use crate::utils::storage::{clear_session, load_session, persist_session};

/// Cliente de autenticación con transporte y store inyectados
pub struct SessionBootstrap<T, S> {
    transport: T,
    store: S,
    base_url: String,
    /// Número del último login iniciado
    generation: Cell<u64>,
}

impl<T: HttpTransport, S: SessionStore> SessionBootstrap<T, S> {
    pub fn new(transport: T, store: S, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            store,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            generation: Cell::new(0),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Perform login with email and password.
    ///
    /// Borra la sesión anterior antes de llamar al backend, haga lo que haga
    /// el request. Un solo intento, sin reintentos.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionRecord, AuthError> {
        let generation = self.next_generation();
        clear_session(&self.store)?;

        log::info!("🔐 [AUTH] Login para {}", email);
        let body = json!({ "email": email, "password": password });
        let response = self.transport.post_json(&self.url(LOGIN_PATH), &body).await;

        if self.generation.get() != generation {
            log::warn!("⚠️ [AUTH] Respuesta de login obsoleta descartada ({})", email);
            return Err(AuthError::Superseded);
        }

        let response = response.map_err(|e| {
            log::error!("❌ [AUTH] Error de red en login: {}", e);
            AuthError::Transport(e)
        })?;
        let payload = response.json().map_err(|e| {
            log::error!("❌ [AUTH] Respuesta de login ilegible (HTTP {}): {}", response.status, e);
            AuthError::Transport(e)
        })?;

        let Some(record) = SessionRecord::from_login_payload(&payload) else {
            log::warn!("⚠️ [AUTH] Login rechazado (HTTP {})", response.status);
            return Err(AuthError::Rejected { payload });
        };

        persist_session(&self.store, &record)?;
        log::info!(
            "✅ [AUTH] Sesión guardada para {} ({} organizaciones)",
            record.user_id,
            record.organizations.as_ref().map_or(0, Vec::len)
        );
        Ok(record)
    }

    /// Invalida cualquier login en vuelo
    fn next_generation(&self) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        generation
    }

    /// GET protegido con el token persistido como bearer.
    ///
    /// Un fallo no toca la sesión guardada.
    pub async fn call_protected_endpoint(&self, path: &str) -> Result<Value, AuthError> {
        let token = self
            .store
            .get_item(STORAGE_KEY_AUTH_TOKEN)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                log::warn!("⚠️ [AUTH] {} sin sesión activa", path);
                AuthError::Unauthenticated
            })?;

        let response = self.transport.get(&self.url(path), Some(&token)).await?;

        if !response.ok() {
            log::warn!("⚠️ [AUTH] {} -> HTTP {}", path, response.status);
            return Err(AuthError::Unauthorized {
                status: response.status,
                payload: response.json_or_text(),
            });
        }

        Ok(response.json()?)
    }

    /// Logout - limpiar la sesión persistida. Un login que siga esperando
    /// respuesta termina en `Superseded` y no guarda nada.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.next_generation();
        clear_session(&self.store)?;
        log::info!("👋 [AUTH] Logout");
        Ok(())
    }

    /// Sesión guardada (p.ej. tras recargar la página)
    pub fn current_session(&self) -> Option<SessionRecord> {
        load_session(&self.store)
    }

    pub fn is_authenticated(&self) -> bool {
        self.store
            .get_item(STORAGE_KEY_AUTH_TOKEN)
            .is_some_and(|t| !t.is_empty())
    }
}
