// ============================================================================
// STATE - Persistencia de sesión inyectable
// ============================================================================

pub mod session_store;
#[cfg(target_arch = "wasm32")]
pub mod browser_store;

pub use session_store::{MemorySessionStore, SessionStore};
#[cfg(target_arch = "wasm32")]
pub use browser_store::BrowserSessionStore;
