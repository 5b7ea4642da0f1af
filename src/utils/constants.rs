/// Claves del store persistente
pub const STORAGE_KEY_AUTH_TOKEN: &str = "authToken";
pub const STORAGE_KEY_AUTH_USER: &str = "authUser";
pub const STORAGE_KEY_AUTH_ORGS: &str = "authOrgs";

/// Endpoint de login del backend
pub const LOGIN_PATH: &str = "/api/v1/auth/login";
