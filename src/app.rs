// ============================================================================
// APP - Superficie JS (wasm-bindgen) del bootstrap de sesión y del indicador
// ============================================================================

use std::rc::Rc;

use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;

use crate::config::CONFIG;
use crate::error::AuthError;
use crate::models::connectivity::ConnectivitySignals;
use crate::services::{run_auth_probe, BrowserTransport, SessionBootstrap};
use crate::state::BrowserSessionStore;
use crate::viewmodels::status_view;

type BrowserSession = SessionBootstrap<BrowserTransport, BrowserSessionStore>;

// Instancia única por página: el contador de generación de login se comparte
thread_local! {
    static SESSION: Rc<BrowserSession> = Rc::new(SessionBootstrap::new(
        BrowserTransport::new(),
        BrowserSessionStore,
        CONFIG.api_base_url(),
    ));
}

fn browser_session() -> Rc<BrowserSession> {
    SESSION.with(Rc::clone)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Error serializando: {}", e)))?;
    js_sys::JSON::parse(&json)
}

fn auth_error_to_js(error: AuthError) -> JsValue {
    let body = json!({
        "kind": error.kind(),
        "message": error.to_string(),
        "payload": error.server_payload(),
    });
    to_js(&body).unwrap_or_else(|e| e)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 panel-session listo ({} -> {})", CONFIG.environment, CONFIG.api_base_url());
    Ok(())
}

/// Login y persistencia; devuelve `{ user, organizations }`
#[wasm_bindgen]
pub async fn login(email: String, password: String) -> Result<JsValue, JsValue> {
    let record = browser_session()
        .login(&email, &password)
        .await
        .map_err(auth_error_to_js)?;
    to_js(&json!({
        "user": record.stored_user(),
        "organizations": record.organizations,
    }))
}

/// GET protegido con el token guardado
#[wasm_bindgen(js_name = callProtectedEndpoint)]
pub async fn call_protected_endpoint(path: String) -> Result<JsValue, JsValue> {
    let body = browser_session()
        .call_protected_endpoint(&path)
        .await
        .map_err(auth_error_to_js)?;
    to_js(&body)
}

#[wasm_bindgen]
pub fn logout() -> Result<(), JsValue> {
    browser_session()
        .logout()
        .map_err(|e| auth_error_to_js(AuthError::from(e)))
}

/// Usuario de la sesión guardada, o `null`
#[wasm_bindgen(js_name = currentUser)]
pub fn current_user() -> Result<JsValue, JsValue> {
    match browser_session().current_session() {
        Some(record) => to_js(&record.stored_user()),
        None => Ok(JsValue::NULL),
    }
}

/// Diagnóstico: login, volcado del store y llamada al endpoint protegido
#[wasm_bindgen(js_name = debugAuthProbe)]
pub async fn debug_auth_probe(email: String, password: String) -> Result<JsValue, JsValue> {
    let session = browser_session();
    let report = run_auth_probe(&*session, &email, &password, &CONFIG.auth_probe_path)
        .await
        .map_err(auth_error_to_js)?;
    let report = to_js(&report)?;
    web_sys::console::log_2(&JsValue::from_str("🧪 [PROBE] Informe:"), &report);
    Ok(report)
}

/// Estado del indicador de tag-sync para la capa de render
#[wasm_bindgen(js_name = connectivityStatus)]
pub fn connectivity_status(
    is_project_mode: bool,
    project_id: Option<String>,
    last_error: Option<String>,
    is_connecting: bool,
    is_connected: bool,
) -> Result<JsValue, JsValue> {
    let signals = ConnectivitySignals {
        is_project_mode,
        project_id: project_id.as_deref(),
        last_error: last_error.as_deref(),
        is_connecting,
        is_connected,
    };
    to_js(&status_view(&signals))
}
