// ============================================================================
// CONNECTIVITY - Estado de conexión del tag-sync en tiempo real
// ============================================================================

/// Señales crudas que alimentan el indicador de conexión.
///
/// `project_id` y `last_error` se consultan, nunca se poseen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ConnectivitySignals<'a> {
    pub is_project_mode: bool,
    pub project_id: Option<&'a str>,
    pub last_error: Option<&'a str>,
    pub is_connecting: bool,
    pub is_connected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectivityStatus {
    SessionModeUnavailable,
    NoProjectSelected,
    /// `message` es texto ya formateado para el usuario
    Error { message: String },
    Connecting,
    Connected,
    Disconnected,
}

/// Icono, texto y clase CSS de un estado
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusPresentation {
    pub icon: &'static str,
    pub label: String,
    pub css_class: &'static str,
}

impl ConnectivityStatus {
    pub fn presentation(&self) -> StatusPresentation {
        let (icon, label, css_class) = match self {
            ConnectivityStatus::SessionModeUnavailable => {
                ("🔒", "Tag sync disponible solo en modo proyecto".to_string(), "tag-sync-status unavailable")
            }
            ConnectivityStatus::NoProjectSelected => {
                ("📁", "Ningún proyecto seleccionado".to_string(), "tag-sync-status no-project")
            }
            ConnectivityStatus::Error { message } => {
                ("⚠️", message.clone(), "tag-sync-status error")
            }
            ConnectivityStatus::Connecting => {
                ("⏳", "Conectando...".to_string(), "tag-sync-status connecting")
            }
            ConnectivityStatus::Connected => {
                ("🟢", "Sincronización en vivo".to_string(), "tag-sync-status connected")
            }
            ConnectivityStatus::Disconnected => {
                ("📴", "Desconectado".to_string(), "tag-sync-status disconnected")
            }
        };
        StatusPresentation { icon, label, css_class }
    }

    /// Nombre estable del estado para JS
    pub fn kind(&self) -> &'static str {
        match self {
            ConnectivityStatus::SessionModeUnavailable => "session-mode-unavailable",
            ConnectivityStatus::NoProjectSelected => "no-project-selected",
            ConnectivityStatus::Error { .. } => "error",
            ConnectivityStatus::Connecting => "connecting",
            ConnectivityStatus::Connected => "connected",
            ConnectivityStatus::Disconnected => "disconnected",
        }
    }

    /// Estados que el indicador resalta como alerta
    pub fn is_alert(&self) -> bool {
        matches!(self, ConnectivityStatus::Error { .. } | ConnectivityStatus::Disconnected)
    }
}
