// ============================================================================
// BROWSER STORE - SessionStore sobre localStorage
// ============================================================================
// Sin window o con localStorage deshabilitado (modo privado) las lecturas
// devuelven None y las escrituras StorageError::Unavailable.
// ============================================================================

use web_sys::{window, Storage};

use crate::error::StorageError;
use crate::state::session_store::SessionStore;

fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// localStorage del navegador: sobrevive recargas, se limpia bajo demanda
#[derive(Clone, Copy, Default, Debug)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("Error eliminando: {:?}", e),
        })
    }
}
