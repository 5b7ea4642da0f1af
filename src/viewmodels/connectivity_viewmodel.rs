// ============================================================================
// CONNECTIVITY VIEWMODEL - Proyección de señales a un único estado
// ============================================================================
// Función pura: sin I/O, sin caché. Se recalcula en cada render.
// ============================================================================

use serde::Serialize;

use crate::models::connectivity::{ConnectivitySignals, ConnectivityStatus};

type Rule = fn(&ConnectivitySignals<'_>) -> Option<ConnectivityStatus>;

/// Reglas en orden de prioridad; gana la primera que aplica
const RULES: [Rule; 6] = [
    |s| (!s.is_project_mode).then_some(ConnectivityStatus::SessionModeUnavailable),
    |s| s.project_id.is_none().then_some(ConnectivityStatus::NoProjectSelected),
    |s| s.last_error.map(|message| ConnectivityStatus::Error { message: message.to_string() }),
    |s| s.is_connecting.then_some(ConnectivityStatus::Connecting),
    |s| s.is_connected.then_some(ConnectivityStatus::Connected),
    |_| Some(ConnectivityStatus::Disconnected),
];

/// Seleccionar el estado visible del tag-sync
pub fn project_status(signals: &ConnectivitySignals<'_>) -> ConnectivityStatus {
    RULES
        .iter()
        .find_map(|rule| rule(signals))
        .unwrap_or(ConnectivityStatus::Disconnected)
}

/// Estado listo para la capa de render (JS)
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusView {
    pub status: &'static str,
    pub icon: &'static str,
    pub label: String,
    pub css_class: &'static str,
    pub alert: bool,
}

pub fn status_view(signals: &ConnectivitySignals<'_>) -> StatusView {
    let status = project_status(signals);
    let presentation = status.presentation();
    StatusView {
        status: status.kind(),
        icon: presentation.icon,
        label: presentation.label,
        css_class: presentation.css_class,
        alert: status.is_alert(),
    }
}
