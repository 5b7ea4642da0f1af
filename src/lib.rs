// ============================================================================
// PANEL SESSION - Bootstrap de sesión + estado de conexión del tag-sync
// ============================================================================
// - Services: login / llamadas protegidas (transporte inyectable)
// - State: store persistente inyectable (localStorage en el navegador)
// - ViewModels: proyección pura de señales a estado visible
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{AuthError, StorageError, TransportError};
pub use models::{ConnectivitySignals, ConnectivityStatus, SessionRecord};
pub use services::{HttpTransport, SessionBootstrap};
pub use state::{MemorySessionStore, SessionStore};
pub use viewmodels::project_status;
