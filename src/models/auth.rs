use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Organización tal como la manda el backend. Opaca: se guarda en
/// `authOrgs` exactamente como llegó.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct Organization(pub Value);

impl Organization {
    /// `id` como texto, sea string o número
    pub fn id(&self) -> Option<String> {
        self.0.get("id").and_then(scalar_text)
    }

    pub fn name(&self) -> Option<String> {
        self.0.get("name").and_then(scalar_text)
    }
}

/// Valor guardado bajo `authUser`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub two_factor_enabled: bool,
}

/// Sesión autenticada conocida por el cliente
#[derive(Clone, PartialEq, Debug)]
pub struct SessionRecord {
    pub token: String,
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub two_factor_enabled: bool,
    pub organizations: Option<Vec<Organization>>,
}

/// Strings tal cual; números y booleanos como su texto JSON
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl SessionRecord {
    /// Construye la sesión a partir del cuerpo de `POST /api/v1/auth/login`.
    ///
    /// Solo un `token` string no vacío decide el éxito; el resto de campos se
    /// lee de forma tolerante y nunca invalida un login con token.
    pub fn from_login_payload(payload: &Value) -> Option<Self> {
        let token = payload
            .get("token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())?;
        let text = |key: &str| payload.get(key).and_then(scalar_text).unwrap_or_default();

        Some(Self {
            token: token.to_string(),
            user_id: text("userId"),
            full_name: text("fullName"),
            email: text("email"),
            two_factor_enabled: payload
                .get("twoFactorEnabled")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            organizations: payload
                .get("organizations")
                .and_then(Value::as_array)
                .map(|orgs| orgs.iter().cloned().map(Organization).collect()),
        })
    }

    pub fn stored_user(&self) -> StoredUser {
        StoredUser {
            user_id: self.user_id.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            two_factor_enabled: self.two_factor_enabled,
        }
    }

    /// Reconstruye la sesión a partir de lo persistido
    pub fn from_stored(token: String, user: StoredUser, organizations: Option<Vec<Organization>>) -> Self {
        Self {
            token,
            user_id: user.user_id,
            full_name: user.full_name,
            email: user.email,
            two_factor_enabled: user.two_factor_enabled,
            organizations,
        }
    }
}
