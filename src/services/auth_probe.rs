// ============================================================================
// AUTH PROBE - Diagnóstico del flujo de login desde la consola
// ============================================================================
// Login -> volcado del store -> llamada protegida. El token nunca sale
// completo en el informe.
// ============================================================================

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::AuthError;
use crate::services::api_client::HttpTransport;
use crate::services::auth_service::SessionBootstrap;
use crate::state::session_store::SessionStore;
use crate::utils::constants::{STORAGE_KEY_AUTH_ORGS, STORAGE_KEY_AUTH_TOKEN, STORAGE_KEY_AUTH_USER};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthProbeReport {
    pub user_id: String,
    pub organization_count: usize,
    pub stored: BTreeMap<&'static str, Option<String>>,
    pub protected_path: String,
    pub protected_ok: bool,
    pub protected_response: Value,
}

/// Primeros 6 caracteres del token
pub fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(6).collect();
    if visible.len() < token.len() {
        format!("{}…", visible)
    } else {
        "***".to_string()
    }
}

fn stored_snapshot<S: SessionStore>(store: &S) -> BTreeMap<&'static str, Option<String>> {
    let mut stored = BTreeMap::new();
    stored.insert(
        STORAGE_KEY_AUTH_TOKEN,
        store.get_item(STORAGE_KEY_AUTH_TOKEN).map(|t| mask_token(&t)),
    );
    stored.insert(STORAGE_KEY_AUTH_USER, store.get_item(STORAGE_KEY_AUTH_USER));
    stored.insert(STORAGE_KEY_AUTH_ORGS, store.get_item(STORAGE_KEY_AUTH_ORGS));
    stored
}

/// Ejecutar el diagnóstico completo. Solo falla si el login falla; el
/// resultado de la llamada protegida va dentro del informe.
pub async fn run_auth_probe<T, S>(
    client: &SessionBootstrap<T, S>,
    email: &str,
    password: &str,
    protected_path: &str,
) -> Result<AuthProbeReport, AuthError>
where
    T: HttpTransport,
    S: SessionStore,
{
    log::info!("🧪 [PROBE] Login contra {}", client.base_url());
    let record = client.login(email, password).await?;

    let stored = stored_snapshot(client.store());
    for (key, value) in &stored {
        log::info!("🧪 [PROBE] {} = {}", key, value.as_deref().unwrap_or("<ausente>"));
    }

    let (protected_ok, protected_response) = match client.call_protected_endpoint(protected_path).await {
        Ok(body) => {
            log::info!("✅ [PROBE] {} OK", protected_path);
            (true, body)
        }
        Err(e) => {
            log::error!("❌ [PROBE] {} falló: {}", protected_path, e);
            let detail = e.server_payload().cloned().unwrap_or_else(|| Value::String(e.to_string()));
            (false, detail)
        }
    };

    Ok(AuthProbeReport {
        organization_count: record.organizations.as_ref().map_or(0, Vec::len),
        user_id: record.user_id,
        stored,
        protected_path: protected_path.to_string(),
        protected_ok,
        protected_response,
    })
}
