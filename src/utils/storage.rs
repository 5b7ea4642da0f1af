use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::models::auth::{Organization, SessionRecord, StoredUser};
use crate::state::session_store::SessionStore;
use crate::utils::constants::{STORAGE_KEY_AUTH_ORGS, STORAGE_KEY_AUTH_TOKEN, STORAGE_KEY_AUTH_USER};

pub fn save_to_storage<S, T>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: SessionStore + ?Sized,
    T: Serialize,
{
    let json = serde_json::to_string(value).map_err(|e| StorageError::Write {
        key: key.to_string(),
        message: format!("Error serializando datos: {}", e),
    })?;
    store.set_item(key, &json)
}

pub fn load_from_storage<S, T>(store: &S, key: &str) -> Option<T>
where
    S: SessionStore + ?Sized,
    T: DeserializeOwned,
{
    let json = store.get_item(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] '{}' ilegible, se ignora: {}", key, e);
            None
        }
    }
}

/// Guardar la sesión completa. Si alguna escritura falla se borra lo ya
/// escrito para no dejar una sesión a medias.
pub fn persist_session<S: SessionStore + ?Sized>(store: &S, record: &SessionRecord) -> Result<(), StorageError> {
    let result = store
        .set_item(STORAGE_KEY_AUTH_TOKEN, &record.token)
        .and_then(|_| save_to_storage(store, STORAGE_KEY_AUTH_USER, &record.stored_user()))
        .and_then(|_| match &record.organizations {
            Some(orgs) => save_to_storage(store, STORAGE_KEY_AUTH_ORGS, orgs),
            None => Ok(()),
        });

    if let Err(e) = &result {
        log::error!("❌ [STORAGE] Error persistiendo sesión, limpiando: {}", e);
        if let Err(clear_error) = clear_session(store) {
            log::error!("❌ [STORAGE] Tampoco se pudo limpiar la sesión: {}", clear_error);
        }
    }
    result
}

/// Leer la sesión persistida (token + usuario obligatorios)
pub fn load_session<S: SessionStore + ?Sized>(store: &S) -> Option<SessionRecord> {
    let token = store.get_item(STORAGE_KEY_AUTH_TOKEN).filter(|t| !t.is_empty())?;
    let user = load_from_storage::<S, StoredUser>(store, STORAGE_KEY_AUTH_USER)?;
    let organizations = load_from_storage::<S, Vec<Organization>>(store, STORAGE_KEY_AUTH_ORGS);
    Some(SessionRecord::from_stored(token, user, organizations))
}

pub fn clear_session<S: SessionStore + ?Sized>(store: &S) -> Result<(), StorageError> {
    store.remove_item(STORAGE_KEY_AUTH_TOKEN)?;
    store.remove_item(STORAGE_KEY_AUTH_USER)?;
    store.remove_item(STORAGE_KEY_AUTH_ORGS)
}
