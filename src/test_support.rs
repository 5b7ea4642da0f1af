// ============================================================================
// TEST SUPPORT - Transporte simulado, store con fallos y cuentas demo
// ============================================================================
// Las cuentas demo son SOLO un fixture de test: no es un mecanismo de
// seguridad y no se compila fuera de `cfg(test)`.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Notify;

use crate::error::{StorageError, TransportError};
use crate::models::auth::SessionRecord;
use crate::services::api_client::{HttpResponse, HttpTransport};
use crate::state::session_store::{MemorySessionStore, SessionStore};

pub const DEMO_EMAIL: &str = "test@pandaura.com";
pub const DEMO_PASSWORD: &str = "pandaura123";

struct DemoAccount {
    email: &'static str,
    password: &'static str,
    user_id: &'static str,
    full_name: &'static str,
}

const DEMO_ACCOUNTS: [DemoAccount; 2] = [
    DemoAccount { email: DEMO_EMAIL, password: DEMO_PASSWORD, user_id: "u1", full_name: "Test User" },
    DemoAccount { email: "operator@pandaura.com", password: "operator123", user_id: "u2", full_name: "Line Operator" },
];

/// Chequeo lineal contra las cuentas demo
pub fn check_demo_credentials(email: &str, password: &str) -> bool {
    DEMO_ACCOUNTS.iter().any(|a| a.email == email && a.password == password)
}

fn demo_body(email: &str) -> Option<Value> {
    let account = DEMO_ACCOUNTS.iter().find(|a| a.email == email)?;
    Some(json!({
        "token": format!("demo-token-{}", account.user_id),
        "userId": account.user_id,
        "fullName": account.full_name,
        "email": account.email,
        "organizations": [{ "id": "org-1", "name": "Pandaura Demo Plant" }]
    }))
}

/// Sesión que el backend simulado concede a `DEMO_EMAIL`
pub fn demo_session() -> SessionRecord {
    demo_body(DEMO_EMAIL)
        .and_then(|body| SessionRecord::from_login_payload(&body))
        .expect("la cuenta demo siempre tiene token")
}

enum Scripted {
    Reply { response: HttpResponse, gate: Option<Rc<Notify>> },
    Fail(TransportError),
}

/// Transporte con respuestas encoladas y contadores de llamadas
#[derive(Default)]
pub struct MockTransport {
    logins: RefCell<VecDeque<Scripted>>,
    protected: RefCell<VecDeque<Scripted>>,
    demo: bool,
    posts: RefCell<Vec<(String, Value)>>,
    gets: RefCell<Vec<(String, Option<String>)>>,
    calls: Cell<usize>,
    observed_store: RefCell<Option<MemorySessionStore>>,
    keys_at_login: RefCell<Vec<Vec<String>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sin respuestas encoladas, el login se resuelve contra las cuentas demo
    pub fn demo() -> Self {
        Self { demo: true, ..Self::default() }
    }

    fn reply(status: u16, body: Value) -> Scripted {
        Scripted::Reply {
            response: HttpResponse { status, body: body.to_string() },
            gate: None,
        }
    }

    pub fn push_login(&self, status: u16, body: Value) {
        self.logins.borrow_mut().push_back(Self::reply(status, body));
    }

    pub fn push_login_raw(&self, status: u16, body: &str) {
        self.logins.borrow_mut().push_back(Scripted::Reply {
            response: HttpResponse { status, body: body.to_string() },
            gate: None,
        });
    }

    /// La respuesta se entrega solo cuando `gate` recibe notify
    pub fn push_login_gated(&self, status: u16, body: Value, gate: Rc<Notify>) {
        self.logins.borrow_mut().push_back(Scripted::Reply {
            response: HttpResponse { status, body: body.to_string() },
            gate: Some(gate),
        });
    }

    pub fn push_login_error(&self, error: TransportError) {
        self.logins.borrow_mut().push_back(Scripted::Fail(error));
    }

    pub fn push_get(&self, status: u16, body: Value) {
        self.protected.borrow_mut().push_back(Self::reply(status, body));
    }

    /// Anotar las claves de `store` en el instante de cada POST de login
    pub fn observe_store(&self, store: &MemorySessionStore) {
        *self.observed_store.borrow_mut() = Some(store.clone());
    }

    pub fn keys_at_login(&self) -> Vec<Vec<String>> {
        self.keys_at_login.borrow().clone()
    }

    pub fn posts(&self) -> Vec<(String, Value)> {
        self.posts.borrow().clone()
    }

    pub fn gets(&self) -> Vec<(String, Option<String>)> {
        self.gets.borrow().clone()
    }

    pub fn post_count(&self) -> usize {
        self.posts.borrow().len()
    }

    pub fn get_count(&self) -> usize {
        self.gets.borrow().len()
    }

    /// Total de requests enviados
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn demo_login(body: &Value) -> Scripted {
        let email = body.get("email").and_then(Value::as_str).unwrap_or_default();
        let password = body.get("password").and_then(Value::as_str).unwrap_or_default();
        match demo_body(email).filter(|_| check_demo_credentials(email, password)) {
            Some(found) => Self::reply(200, found),
            None => Self::reply(401, json!({ "error": "invalid credentials" })),
        }
    }

    async fn deliver(next: Option<Scripted>) -> Result<HttpResponse, TransportError> {
        match next {
            Some(Scripted::Reply { response, gate }) => {
                if let Some(gate) = gate {
                    gate.notified().await;
                }
                Ok(response)
            }
            Some(Scripted::Fail(error)) => Err(error),
            None => Ok(HttpResponse { status: 500, body: r#"{"error":"unscripted request"}"#.to_string() }),
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, TransportError> {
        self.calls.set(self.calls.get() + 1);
        self.posts.borrow_mut().push((url.to_string(), body.clone()));
        if let Some(store) = self.observed_store.borrow().as_ref() {
            self.keys_at_login.borrow_mut().push(store.keys());
        }
        let next = self.logins.borrow_mut().pop_front();
        let next = match next {
            None if self.demo => Some(Self::demo_login(body)),
            other => other,
        };
        Self::deliver(next).await
    }

    async fn get(&self, url: &str, bearer: Option<&str>) -> Result<HttpResponse, TransportError> {
        self.calls.set(self.calls.get() + 1);
        self.gets.borrow_mut().push((url.to_string(), bearer.map(str::to_string)));
        let next = self.protected.borrow_mut().pop_front();
        Self::deliver(next).await
    }
}

/// Store que falla al escribir una clave concreta (p.ej. cuota agotada) o
/// que no está disponible en absoluto (modo privado)
pub struct FailingStore {
    pub inner: MemorySessionStore,
    failing_key: Option<String>,
}

impl FailingStore {
    pub fn failing_on(key: &str) -> Self {
        Self { inner: MemorySessionStore::new(), failing_key: Some(key.to_string()) }
    }

    pub fn unavailable() -> Self {
        Self { inner: MemorySessionStore::new(), failing_key: None }
    }
}

impl SessionStore for FailingStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match &self.failing_key {
            None => Err(StorageError::Unavailable),
            Some(failing) if failing == key => Err(StorageError::Write {
                key: key.to_string(),
                message: "QuotaExceededError".to_string(),
            }),
            Some(_) => self.inner.set_item(key, value),
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match &self.failing_key {
            None => Err(StorageError::Unavailable),
            Some(_) => self.inner.remove_item(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_credentials_are_exact_pairs() {
        assert!(check_demo_credentials(DEMO_EMAIL, DEMO_PASSWORD));
        assert!(check_demo_credentials("operator@pandaura.com", "operator123"));
        assert!(!check_demo_credentials(DEMO_EMAIL, "operator123"));
        assert!(!check_demo_credentials("", ""));
    }
}
